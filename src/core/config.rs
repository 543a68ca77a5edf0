//! Game and simulation configuration.
//!
//! Both configs are plain serde structs with `with_*` builder methods,
//! so a CLI or a JSON file can produce them equally well.

use serde::{Deserialize, Serialize};

/// Default target score.
pub const DEFAULT_WINNING_SCORE: u32 = 200;

/// Settings for a single game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Game ends after the round in which someone reaches this total.
    pub winning_score: u32,

    /// Seat that deals the first round.
    pub initial_dealer: usize,

    /// Hard stop on rounds played.
    /// When hit, the current leader is reported without reaching the target.
    pub max_rounds: u32,

    /// Seed for shuffles and action-card targeting.
    pub seed: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            winning_score: DEFAULT_WINNING_SCORE,
            initial_dealer: 0,
            max_rounds: 10_000,
            seed: 42,
        }
    }
}

impl GameConfig {
    pub fn with_winning_score(mut self, score: u32) -> Self {
        self.winning_score = score;
        self
    }

    pub fn with_initial_dealer(mut self, seat: usize) -> Self {
        self.initial_dealer = seat;
        self
    }

    pub fn with_max_rounds(mut self, rounds: u32) -> Self {
        self.max_rounds = rounds;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

/// Settings for a batch of quiet games.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Number of games to play.
    pub games: u32,

    pub winning_score: u32,

    /// Master seed; each game forks its own stream from it.
    pub seed: u64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            games: 100,
            winning_score: DEFAULT_WINNING_SCORE,
            seed: 42,
        }
    }
}

impl SimulationConfig {
    pub fn with_games(mut self, games: u32) -> Self {
        self.games = games;
        self
    }

    pub fn with_winning_score(mut self, score: u32) -> Self {
        self.winning_score = score;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}
