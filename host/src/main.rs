use std::env;
use std::fs;
use std::time::Instant;

use host::{replay_match, MatchReport, SessionOutcome};
use swing_core::MatchLog;

fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::filter::EnvFilter::from_default_env())
        .init();

    println!("🎯 Swing - two-player needle duel");
    println!("{}", "=".repeat(70));
    println!();

    // Parse CLI arguments
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        print_usage(&args[0]);
        std::process::exit(1);
    }

    let command = &args[1];

    match command.as_str() {
        "play" => {
            let output_file = args.get(2).map(|s| s.as_str());
            play_command(output_file);
        }

        "replay" => {
            if args.len() < 3 {
                eprintln!("Usage: {} replay <log_file>", args[0]);
                eprintln!("Error: Missing required argument");
                std::process::exit(1);
            }

            replay_command(&args[2]);
        }

        "--help" | "-h" => {
            print_usage(&args[0]);
            std::process::exit(0);
        }

        _ => {
            eprintln!("❌ Unknown command: {}", command);
            print_usage(&args[0]);
            std::process::exit(1);
        }
    }
}

fn print_usage(program: &str) {
    eprintln!("Usage: {} <command> [options]", program);
    eprintln!();
    eprintln!("Commands:");
    eprintln!("  play [output_file]");
    eprintln!("      Play an interactive two-player match in the terminal");
    eprintln!("      - player 1 stops the needle with 'a', player 2 with 'l'");
    eprintln!("      - 'q' or Esc aborts the match");
    eprintln!("      - output_file: Optional file to save the match log (JSON)");
    eprintln!("                     Defaults to: swing-log_game<id>_<timestamp>.json");
    eprintln!();
    eprintln!("  replay <log_file>");
    eprintln!("      Recompute scores and winner from a recorded match log");
    eprintln!("      - log_file: JSON file containing the match log");
    eprintln!();
    eprintln!("Example workflow:");
    eprintln!("  1. Play a match:   {} play", program);
    eprintln!("     (saves to swing-log_game<id>_<timestamp>.json)");
    eprintln!("  2. Replay it:      {} replay swing-log_game<id>_<timestamp>.json", program);
}

fn play_command(output_file: Option<&str>) {
    println!("🎮 Starting a match");
    println!("  Player 1 stops the needle with 'a', player 2 with 'l'");
    println!("  Stop as close to +90 as you can; 'q' aborts");
    println!();

    let game_id: u32 = rand::random();

    let outcome = host::run_match(game_id).unwrap_or_else(|e| {
        eprintln!("❌ Session error: {}", e);
        std::process::exit(1);
    });

    let log = match outcome {
        SessionOutcome::Completed(log) => log,
        SessionOutcome::Aborted => {
            println!("🚪 Match aborted before both players played; nothing recorded");
            return;
        }
    };

    // Recompute the result from the recorded log; live play and replay share
    // the same engine, so this is exactly what the players saw on screen.
    let report = replay_match(&log).unwrap_or_else(|e| {
        eprintln!("❌ Error replaying freshly recorded log: {}", e);
        std::process::exit(1);
    });

    print_report(&report);

    // Determine output filename
    let default_filename = format!(
        "swing-log_game{}_{}.json",
        log.game_id,
        chrono::Utc::now().timestamp()
    );
    let file_to_save = output_file.unwrap_or(&default_filename);

    match save_log(&log, file_to_save) {
        Ok(_) => {
            println!("💾 Match log saved to: {}", file_to_save);
            println!("   Use 'replay {}' to recompute this result", file_to_save);
            println!("{}", "=".repeat(70));
        }
        Err(e) => {
            eprintln!("❌ Error saving match log: {}", e);
            std::process::exit(1);
        }
    }
}

fn replay_command(log_file: &str) {
    println!("📋 Replaying match log");
    println!("  Log file: {}", log_file);
    println!();

    // Check file size before reading (malformed-input protection)
    const MAX_LOG_SIZE: u64 = 1024 * 1024; // 1 MB
    let metadata = fs::metadata(log_file).unwrap_or_else(|e| {
        eprintln!("❌ Error accessing file '{}': {}", log_file, e);
        std::process::exit(1);
    });

    if metadata.len() > MAX_LOG_SIZE {
        eprintln!(
            "❌ Log file too large: {} bytes (max {} bytes)",
            metadata.len(),
            MAX_LOG_SIZE
        );
        eprintln!("   A match log holds one stop event per player");
        std::process::exit(1);
    }

    // Load log file
    let raw = fs::read_to_string(log_file).unwrap_or_else(|e| {
        eprintln!("❌ Error reading file '{}': {}", log_file, e);
        std::process::exit(1);
    });

    let log: MatchLog = serde_json::from_str(&raw).unwrap_or_else(|e| {
        eprintln!("❌ Error parsing JSON: {}", e);
        std::process::exit(1);
    });

    println!("📦 Loaded {} stop events from log", log.events.len());
    println!("  Game ID: {}", log.game_id);
    println!();

    let start = Instant::now();

    let report = replay_match(&log).unwrap_or_else(|e| {
        eprintln!("❌ Replay failed: {}", e);
        std::process::exit(1);
    });

    let duration = start.elapsed();
    println!("  Replay time: {:.2}ms", duration.as_secs_f64() * 1000.0);
    println!();

    print_report(&report);
    println!("{}", "=".repeat(70));
}

fn print_report(report: &MatchReport) {
    println!("✅ Match result");
    println!(
        "  Score: {}-{}",
        report.player_one_score, report.player_two_score
    );
    println!("  {}", report.winner);
    println!("  Log Hash: 0x{}", hex::encode(report.log_hash));
    println!("  Events Processed: {}", report.events_len);
    println!();
}

fn save_log(log: &MatchLog, path: &str) -> Result<(), Box<dyn std::error::Error>> {
    let json = serde_json::to_string_pretty(log)?;
    fs::write(path, json)?;
    Ok(())
}
