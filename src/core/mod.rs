//! Core types: seats and players, RNG, configuration.

pub mod config;
pub mod player;
pub mod rng;

pub use config::{GameConfig, SimulationConfig, DEFAULT_WINNING_SCORE};
pub use player::{Hand, Player, PlayerId};
pub use rng::GameRng;
