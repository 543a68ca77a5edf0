//! # flip7
//!
//! Round engine, decision strategies and batch simulator for the Flip 7
//! press-your-luck card game.
//!
//! Each round every active player is dealt one card, then players take turns
//! choosing to hit or stay. Drawing a number already in hand busts the
//! player unless a Second Chance absorbs it. Seven distinct numbers end the
//! round with a bonus. Action cards (Freeze, Flip Three, Second Chance)
//! target players and can chain.
//!
//! ## Design
//!
//! - **Deterministic**: every shuffle and target pick comes from a seeded
//!   ChaCha stream, so a seed replays a whole game.
//! - **Exactly-once cards**: each physical card is in exactly one place at
//!   any time (draw pile, discard pile, a hand, or a deferred action slot).
//! - **Quiet engine**: the engine reports [`GameEvent`]s to an
//!   [`EventSink`]. It never prints; [`TracingSink`] renders to `tracing`.
//!
//! ## Modules
//!
//! - `core`: seats and players, RNG, configuration
//! - `cards`: card taxonomy and the deck
//! - `scoring`: hand scoring
//! - `strategy`: hit-or-stay policies and seat spec parsing
//! - `engine`: rounds, action resolution, the game loop
//! - `sim`: batch simulation and per-strategy statistics

pub mod cards;
pub mod core;
pub mod engine;
pub mod error;
pub mod scoring;
pub mod sim;
pub mod strategy;

pub use crate::core::{GameConfig, GameRng, Hand, Player, PlayerId, SimulationConfig};

pub use crate::cards::{ActionCard, Card, CardKind, Deck, DrawOutcome, Modifier, STANDARD_DECK_SIZE};

pub use crate::scoring::{score_hand, ScoreBreakdown, FLIP_SEVEN_BONUS, FLIP_SEVEN_COUNT};

pub use crate::strategy::{
    default_roster, Aggressive, Conservative, Decision, Flip7Chaser, Human, Perfect, PlayerSpec,
    Strategy, StrategySpec, TurnContext,
};

pub use crate::engine::{
    EventSink, Game, GameBuilder, GameEvent, GameOutcome, NoopSink, RoundOutcome, RoundSignal,
    TracingSink,
};

pub use crate::sim::{run_simulations, SimulationSummary, StrategyStats};

pub use crate::error::{Flip7Error, Result};
