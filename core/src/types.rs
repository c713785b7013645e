use alloc::fmt;

use serde::{Deserialize, Serialize};

/// One of the two participants, in fixed play order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Player {
    One,
    Two,
}

impl Player {
    pub fn number(self) -> u32 {
        match self {
            Player::One => 1,
            Player::Two => 2,
        }
    }
}

/// Per-player match scores.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scores {
    pub player_one: u32,
    pub player_two: u32,
}

impl Scores {
    pub fn get(&self, player: Player) -> u32 {
        match player {
            Player::One => self.player_one,
            Player::Two => self.player_two,
        }
    }

    pub fn set(&mut self, player: Player, score: u32) {
        match player {
            Player::One => self.player_one = score,
            Player::Two => self.player_two = score,
        }
    }
}

/// Match-level state that outlives individual turns.
#[derive(Clone, Copy, Debug)]
pub struct GameState {
    pub current_player: Player,
    pub scores: Scores,
    /// Set once both players have played; never cleared.
    pub finished: bool,
}

impl GameState {
    pub fn new() -> Self {
        Self {
            current_player: Player::One,
            scores: Scores::default(),
            finished: false,
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

/// Final verdict of a match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Winner {
    PlayerOne,
    PlayerTwo,
    Tie,
}

impl fmt::Display for Winner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Winner::PlayerOne => write!(f, "Player 1 Wins!"),
            Winner::PlayerTwo => write!(f, "Player 2 Wins!"),
            Winner::Tie => write!(f, "It's a Tie!"),
        }
    }
}
