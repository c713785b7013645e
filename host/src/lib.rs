use serde::{Deserialize, Serialize};
use swing_core::{determine_winner, replay_log, MatchLog, Scores, Winner};

pub mod render;
pub mod session;

pub use session::{run_match, SessionOutcome};

/// Final report for a completed or replayed match.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchReport {
    pub game_id: u32,

    pub player_one_score: u32,

    pub player_two_score: u32,

    /// Winner under strict score comparison; equal scores tie
    pub winner: Winner,

    /// SHA-256 hash of the match log
    pub log_hash: [u8; 32],

    /// Number of stop events processed
    pub events_len: u32,
}

/// Replay a recorded match log and recompute its result.
///
/// The same engine scores live play and replay, so a freshly recorded log
/// replays to the scores the players saw on screen.
///
/// # Arguments
/// * `log` - The recorded match log
///
/// # Returns
/// * `Ok(MatchReport)` - Scores, winner, and the binding log hash
/// * `Err` - If the log fails validation
pub fn replay_match(log: &MatchLog) -> Result<MatchReport, Box<dyn std::error::Error>> {
    tracing::info!("Replaying match log for game {}", log.game_id);

    let out = replay_log(log);
    if !out.valid {
        return Err(format!(
            "Log validation failed: {}",
            out.reason.as_deref().unwrap_or("unknown")
        )
        .into());
    }

    let scores = Scores {
        player_one: out.player_one_score,
        player_two: out.player_two_score,
    };

    tracing::info!(
        "Replay complete for game {}: {}-{}",
        out.game_id,
        scores.player_one,
        scores.player_two
    );

    Ok(MatchReport {
        game_id: out.game_id,
        player_one_score: out.player_one_score,
        player_two_score: out.player_two_score,
        winner: determine_winner(&scores),
        log_hash: out.log_hash_sha256,
        events_len: out.events_len,
    })
}
