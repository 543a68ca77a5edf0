//! Hit-or-stay decision policies.
//!
//! The engine asks a [`Strategy`] for a [`Decision`] whenever an active
//! player is free to choose. Strategies only read: they get the player, the
//! other active players, and a read-only view of the deck through
//! [`TurnContext`]. Forced draws from a Flip Three never reach the strategy.
//!
//! - `basic`: Aggressive, Conservative, Flip7Chaser
//! - `perfect`: expected-value lookahead over the undrawn cards
//! - `human`: interactive prompt
//! - `spec`: `name[=param]` and `Name:strategy` parsing

mod basic;
mod human;
mod perfect;
mod spec;

pub use basic::{Aggressive, Conservative, Flip7Chaser};
pub use human::Human;
pub use perfect::{Lookahead, Perfect};
pub use spec::{default_roster, PlayerSpec, StrategySpec};

use crate::cards::Deck;
use crate::core::{Player, PlayerId};

/// What a player does on their turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Decision {
    Hit,
    Stay,
}

impl std::fmt::Display for Decision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Decision::Hit => write!(f, "hit"),
            Decision::Stay => write!(f, "stay"),
        }
    }
}

/// Everything a strategy may look at when deciding.
#[derive(Clone, Copy)]
pub struct TurnContext<'a> {
    pub seat: PlayerId,
    pub player: &'a Player,
    /// Other players still active this round.
    pub opponents: &'a [&'a Player],
    /// Live deck. Only card-counting strategies look at it.
    pub deck: &'a Deck,
}

/// Decision policy for one seat.
pub trait Strategy: Send + Sync {
    /// Choose to hit or stay. Must not depend on anything but `ctx` and `self`.
    fn choose_action(&self, ctx: &TurnContext<'_>) -> Decision;

    /// Name used to group results in batch simulations.
    fn label(&self) -> String;
}

impl<S: Strategy + ?Sized> Strategy for Box<S> {
    fn choose_action(&self, ctx: &TurnContext<'_>) -> Decision {
        (**self).choose_action(ctx)
    }

    fn label(&self) -> String {
        (**self).label()
    }
}
