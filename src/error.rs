//! Configuration errors.
//!
//! Everything here is raised before a game starts. Once a game is built the
//! round engine cannot fail.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Flip7Error {
    #[error("unknown strategy spec: {0}")]
    UnknownStrategy(String),

    #[error("invalid parameter {value:?} for strategy {strategy}")]
    InvalidParameter { strategy: String, value: String },

    #[error("player specs must be in the form 'Name:strategy', got {0:?}")]
    MalformedPlayerSpec(String),

    #[error("a game needs at least one player")]
    NoPlayers,

    #[error("at most 255 players are supported, got {0}")]
    TooManyPlayers(usize),

    #[error("seat {0} is interactive and cannot be simulated")]
    InteractiveSeat(String),

    #[error("duplicate player name: {0}")]
    DuplicatePlayerName(String),
}

pub type Result<T> = std::result::Result<T, Flip7Error>;
