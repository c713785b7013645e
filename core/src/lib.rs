#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod constants;
pub mod engine;
pub mod oscillator;
pub mod types;

use alloc::string::String;
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

pub use engine::{calculate_score, determine_winner, replay_log, TurnEngine, TurnResult};
pub use oscillator::{angle_after, Oscillator};
pub use types::{GameState, Player, Scores, Winner};

use crate::constants::LOG_VERSION;

/// Recorded match: the tick at which each player stopped the needle, in
/// play order. Enough to recompute both scores and the winner.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct MatchLog {
    pub v: u32,
    /// Unique match identifier - mixed into the log hash so two matches with
    /// identical stop ticks still produce distinct hashes.
    pub game_id: u32,
    /// Stop tick per player: events[0] is player 1, events[1] is player 2.
    pub events: Vec<u32>,
}

impl MatchLog {
    pub fn new(game_id: u32, events: Vec<u32>) -> Self {
        Self {
            v: LOG_VERSION,
            game_id,
            events,
        }
    }
}

/// Output of replaying a recorded match log.
#[derive(Serialize, Deserialize, Debug)]
pub struct ReplayOutcome {
    pub valid: bool,
    pub reason: Option<String>,
    pub player_one_score: u32,
    pub player_two_score: u32,
    pub events_len: u32,
    pub log_hash_sha256: [u8; 32],
    /// Game ID echoed from the log
    pub game_id: u32,
}

impl ReplayOutcome {
    pub fn ok(scores: Scores, events_len: u32, hash: [u8; 32], game_id: u32) -> Self {
        Self {
            valid: true,
            reason: None,
            player_one_score: scores.player_one,
            player_two_score: scores.player_two,
            events_len,
            log_hash_sha256: hash,
            game_id,
        }
    }

    pub fn invalid(msg: &str) -> Self {
        Self {
            valid: false,
            reason: Some(msg.into()),
            player_one_score: 0,
            player_two_score: 0,
            events_len: 0,
            log_hash_sha256: [0u8; 32],
            game_id: 0,
        }
    }
}

/// Compute SHA-256 hash of a match log.
/// This hash binds a replay outcome to the exact recorded events.
pub fn compute_log_hash(game_id: u32, events: &[u32]) -> [u8; 32] {
    let mut h = Sha256::new();

    // Version prefix: 10 bytes
    // Game ID: 4 bytes LE
    // Events: 4 bytes LE per tick count
    let mut buf = Vec::with_capacity(10 + 4 + events.len() * 4);
    buf.extend_from_slice(b"SWINGLOGv1");
    buf.extend_from_slice(&game_id.to_le_bytes());
    for v in events.iter() {
        buf.extend_from_slice(&v.to_le_bytes());
    }

    h.update(&buf);

    let out = h.finalize();
    let mut arr = [0u8; 32];
    arr.copy_from_slice(&out);
    arr
}
