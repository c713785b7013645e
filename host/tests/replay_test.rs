// Tests for replaying recorded match logs from JSON files
// These tests depend on the swing-log JSON files in the project root
use swing_core::{replay_log, MatchLog};

fn load_log(path: &str) -> MatchLog {
    let raw = std::fs::read_to_string(path)
        .unwrap_or_else(|e| panic!("Failed to read {}: {}", path, e));

    serde_json::from_str(&raw).unwrap_or_else(|e| panic!("Failed to parse {}: {}", path, e))
}

#[test]
fn test_recorded_match_player_one_wins() {
    let log = load_log("../swing-log_game2381554198_1754640000.json");

    let out = replay_log(&log);

    assert!(out.valid, "Log should replay cleanly");
    assert_eq!(out.player_one_score, 100, "Expected player 1 score 100");
    assert_eq!(out.player_two_score, 10, "Expected player 2 score 10");
    assert_eq!(out.events_len, 2, "Expected one stop per player");
    assert!(out.reason.is_none(), "Should not have error reason");
    assert_eq!(out.game_id, 2381554198);
}

#[test]
fn test_recorded_match_tie() {
    let log = load_log("../swing-log_game914750223_1754641288.json");

    let out = replay_log(&log);

    assert!(out.valid, "Log should replay cleanly");
    assert_eq!(out.player_one_score, 100, "Expected player 1 score 100");
    assert_eq!(out.player_two_score, 100, "Expected player 2 score 100");
}

#[test]
fn test_recorded_match_player_two_wins() {
    let log = load_log("../swing-log_game402211673_1754642013.json");

    let out = replay_log(&log);

    assert!(out.valid, "Log should replay cleanly");
    assert_eq!(out.player_one_score, 50, "Expected player 1 score 50");
    assert_eq!(out.player_two_score, 100, "Expected player 2 score 100");
}

#[test]
fn test_unsupported_log_version() {
    let log = MatchLog {
        v: 2,
        game_id: 1,
        events: vec![90, 45],
    };

    let out = replay_log(&log);

    assert!(!out.valid, "Future log versions must be rejected");
    assert!(
        out.reason.unwrap().contains("version"),
        "Error should mention the version"
    );
}

#[test]
fn test_wrong_event_count() {
    // One player never stopped: incomplete match
    let log = MatchLog::new(1, vec![90]);
    let out = replay_log(&log);
    assert!(!out.valid, "Incomplete logs must be rejected");
    assert!(
        out.reason.unwrap().contains("per player"),
        "Error should mention the one-stop-per-player rule"
    );

    // Extra trailing events are rejected too
    let log = MatchLog::new(1, vec![90, 45, 12]);
    assert!(!replay_log(&log).valid);

    let log = MatchLog::new(1, vec![]);
    assert!(!replay_log(&log).valid);
}

#[test]
fn test_long_turns_replay_in_constant_time() {
    // Tick counts far beyond one sweep still land on in-bounds angles
    let log = MatchLog::new(9, vec![u32::MAX, 1_000_000_090]);
    let out = replay_log(&log);
    assert!(out.valid);
    assert!(out.player_one_score <= 100);
    assert!(out.player_two_score <= 100);
}

#[test]
fn test_hash_determinism() {
    let log = MatchLog::new(42, vec![90, 45]);

    let first = replay_log(&log);
    let second = replay_log(&log);
    assert_eq!(
        first.log_hash_sha256, second.log_hash_sha256,
        "Hash should be deterministic - same log should produce same hash"
    );

    // Same events under a different game id hash differently
    let other = MatchLog::new(43, vec![90, 45]);
    assert_ne!(replay_log(&other).log_hash_sha256, first.log_hash_sha256);

    // Different events hash differently
    let other = MatchLog::new(42, vec![90, 47]);
    assert_ne!(replay_log(&other).log_hash_sha256, first.log_hash_sha256);
}
