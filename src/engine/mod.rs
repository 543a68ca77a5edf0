//! Round and game engine.
//!
//! - `events`: what the engine reports and where it goes
//! - `game`: setup, the game loop, and the final outcome
//! - `round`: dealing, turns, action resolution, scoring
//!
//! The engine is single-threaded and never fails once built. Running out of
//! cards is reported as an event and treated as "nothing drawn".

pub mod events;
pub mod game;
pub mod round;

pub use events::{EventSink, GameEvent, NoopSink, TracingSink};
pub use game::{Game, GameBuilder, GameOutcome};
pub use round::{RoundOutcome, RoundSignal, FLIP_THREE_DRAWS};
