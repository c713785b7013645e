use alloc::vec::Vec;

use crate::constants::{BULLSEYE_DEG, LOG_VERSION, MAX_SCORE, PLAYER_COUNT};
use crate::oscillator::{angle_after, Oscillator};
use crate::types::{GameState, Player, Scores, Winner};
use crate::{compute_log_hash, MatchLog, ReplayOutcome};

/// Score for stopping the needle at `angle` degrees: one point lost per
/// degree of absolute deviation from the bullseye, floored at zero.
///
/// The tick quantum is a whole number of degrees, so every reachable
/// deviation is integral and the score is exact integer arithmetic.
pub fn calculate_score(angle: i32) -> u32 {
    let deviation = (angle - BULLSEYE_DEG).unsigned_abs();
    MAX_SCORE.saturating_sub(deviation)
}

/// What a landed stop trigger produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TurnResult {
    pub player: Player,
    pub angle: i32,
    pub score: u32,
}

/// The whole match: oscillator, turn order, scores, and the event record.
///
/// Player 1's turn begins at construction. Stop triggers for the wrong
/// player, or while no swing is running, change nothing.
pub struct TurnEngine {
    oscillator: Oscillator,
    state: GameState,
    /// Ticks elapsed in the current turn; recorded into the log at each stop.
    turn_ticks: u32,
    events: Vec<u32>,
}

impl TurnEngine {
    pub fn new() -> Self {
        Self {
            oscillator: Oscillator::start(),
            state: GameState::new(),
            turn_ticks: 0,
            events: Vec::with_capacity(PLAYER_COUNT),
        }
    }

    fn start_turn(&mut self) {
        self.oscillator = Oscillator::start();
        self.turn_ticks = 0;
    }

    /// Advance the running swing by one frame. No-op once the match is over.
    pub fn tick(&mut self) {
        if !self.oscillator.is_running() {
            return;
        }
        self.oscillator.tick();
        self.turn_ticks += 1;
    }

    pub fn angle(&self) -> i32 {
        self.oscillator.angle()
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn current_player(&self) -> Player {
        self.state.current_player
    }

    pub fn is_finished(&self) -> bool {
        self.state.finished
    }

    /// The winner, once both players have played.
    pub fn winner(&self) -> Option<Winner> {
        self.state
            .finished
            .then(|| determine_winner(&self.state.scores))
    }

    /// Stop trigger for `player`. Scores the current angle and records the
    /// stop tick. Player 1's stop restarts the swing for player 2; player 2's
    /// stop finishes the match.
    ///
    /// Returns `None` (and changes nothing) unless it is that player's turn
    /// and the swing is running.
    pub fn stop_turn(&mut self, player: Player) -> Option<TurnResult> {
        if player != self.state.current_player || !self.oscillator.is_running() {
            return None;
        }

        self.oscillator.halt();
        let angle = self.oscillator.angle();
        let score = calculate_score(angle);
        self.state.scores.set(player, score);
        self.events.push(self.turn_ticks);

        match player {
            Player::One => {
                self.state.current_player = Player::Two;
                self.start_turn();
            }
            Player::Two => {
                self.state.finished = true;
            }
        }

        Some(TurnResult {
            player,
            angle,
            score,
        })
    }

    /// Export the recorded stop ticks as a replayable log.
    pub fn into_log(self, game_id: u32) -> MatchLog {
        MatchLog::new(game_id, self.events)
    }
}

impl Default for TurnEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Strict comparison of the final scores; equality is a tie.
pub fn determine_winner(scores: &Scores) -> Winner {
    if scores.player_one > scores.player_two {
        Winner::PlayerOne
    } else if scores.player_two > scores.player_one {
        Winner::PlayerTwo
    } else {
        Winner::Tie
    }
}

/// Recompute a recorded match from its log.
///
/// Logs this version does not understand are reported as invalid outcomes,
/// never panics: unsupported version numbers and event counts other than one
/// stop per player.
pub fn replay_log(log: &MatchLog) -> ReplayOutcome {
    if log.v != LOG_VERSION {
        return ReplayOutcome::invalid("Unsupported log version");
    }
    if log.events.len() != PLAYER_COUNT {
        return ReplayOutcome::invalid("expected exactly one stop event per player");
    }

    let mut scores = Scores::default();
    scores.set(Player::One, calculate_score(angle_after(log.events[0])));
    scores.set(Player::Two, calculate_score(angle_after(log.events[1])));

    let hash = compute_log_hash(log.game_id, &log.events);
    ReplayOutcome::ok(scores, log.events.len() as u32, hash, log.game_id)
}
