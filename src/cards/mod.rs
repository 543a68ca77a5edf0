//! Cards and the shared deck.
//!
//! - `card`: the card taxonomy (numbers, actions, modifiers)
//! - `deck`: draw/discard piles and the standard 94-card composition

pub mod card;
pub mod deck;

pub use card::{ActionCard, Card, CardKind, Modifier};
pub use deck::{Deck, DrawOutcome, STANDARD_DECK_SIZE};
