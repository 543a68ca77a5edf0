//! Card taxonomy.
//!
//! Cards are plain `Copy` values. Two copies of "7" are interchangeable;
//! the deck only needs to know how many of each exist.

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Broad category of a card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardKind {
    Number,
    Action,
    Modifier,
}

/// Action cards resolve an effect against a target player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionCard {
    FlipThree,
    Freeze,
    SecondChance,
}

impl ActionCard {
    pub const ALL: [ActionCard; 3] = [ActionCard::FlipThree, ActionCard::Freeze, ActionCard::SecondChance];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            ActionCard::FlipThree => "Flip Three",
            ActionCard::Freeze => "Freeze",
            ActionCard::SecondChance => "Second Chance",
        }
    }
}

/// Modifier cards never bust a hand.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Modifier {
    /// Flat bonus added after the number sum.
    Points(u8),
    /// Doubles the number sum. Bonus points are not doubled.
    TimesTwo,
}

impl Modifier {
    /// Bonus magnitude; the multiplier carries no points of its own.
    #[must_use]
    pub const fn value(self) -> u8 {
        match self {
            Modifier::Points(points) => points,
            Modifier::TimesTwo => 0,
        }
    }
}

/// A single card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Card {
    /// Numbered card, 0 through 12.
    Number(u8),
    Action(ActionCard),
    Modifier(Modifier),
}

impl Card {
    /// Highest number rank in the deck.
    pub const MAX_NUMBER: u8 = 12;

    #[must_use]
    pub const fn kind(self) -> CardKind {
        match self {
            Card::Number(_) => CardKind::Number,
            Card::Action(_) => CardKind::Action,
            Card::Modifier(_) => CardKind::Modifier,
        }
    }

    /// Face value for numbers, bonus magnitude for point modifiers, 0 otherwise.
    #[must_use]
    pub const fn value(self) -> u8 {
        match self {
            Card::Number(n) => n,
            Card::Action(_) => 0,
            Card::Modifier(m) => m.value(),
        }
    }

    /// Printed name, e.g. `"7"`, `"Freeze"`, `"+4 Points"`, `"x2 Multiplier"`.
    #[must_use]
    pub fn name(self) -> Cow<'static, str> {
        match self {
            Card::Number(n) => Cow::Owned(n.to_string()),
            Card::Action(action) => Cow::Borrowed(action.name()),
            Card::Modifier(Modifier::Points(points)) => Cow::Owned(format!("+{points} Points")),
            Card::Modifier(Modifier::TimesTwo) => Cow::Borrowed("x2 Multiplier"),
        }
    }

    /// Number value, if this is a number card.
    #[must_use]
    pub const fn number(self) -> Option<u8> {
        match self {
            Card::Number(n) => Some(n),
            _ => None,
        }
    }

    #[must_use]
    pub const fn action(self) -> Option<ActionCard> {
        match self {
            Card::Action(action) => Some(action),
            _ => None,
        }
    }

    #[must_use]
    pub const fn is_multiplier(self) -> bool {
        matches!(self, Card::Modifier(Modifier::TimesTwo))
    }
}

impl From<ActionCard> for Card {
    fn from(action: ActionCard) -> Self {
        Card::Action(action)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.name())
    }
}
