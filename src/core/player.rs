//! Seats and per-player round state.
//!
//! ## PlayerId
//!
//! Seat index, 0-based, in seating order. Supports up to 255 players.
//!
//! ## Player
//!
//! Name, running game total, and the round-transient state that
//! [`Player::reset_round`] wipes at the start of every round.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::{ActionCard, Card};
use crate::scoring;

/// Seat identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw seat index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all seats for a game with `player_count` players.
    ///
    /// ```
    /// use flip7::core::PlayerId;
    ///
    /// let seats: Vec<_> = PlayerId::all(3).collect();
    /// assert_eq!(seats, vec![PlayerId(0), PlayerId(1), PlayerId(2)]);
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Seat {}", self.0)
    }
}

/// Cards held this round. Rarely more than a dozen.
pub type Hand = SmallVec<[Card; 16]>;

/// A player at the table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    /// Sum of all round scores so far. Never decreases.
    pub total_score: u32,

    /// Cards received this round, in order.
    pub hand: Hand,
    /// Still taking turns this round.
    pub active: bool,
    pub busted: bool,
    pub frozen: bool,
    /// Holding a Second Chance (at most one).
    pub second_chance: bool,
    /// Mandatory draws left from a Flip Three.
    pub forced_flips: u8,
    /// Action cards drawn mid Flip Three, resolved once the three draws finish.
    pub pending_actions: Vec<ActionCard>,
}

impl Player {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            total_score: 0,
            hand: Hand::new(),
            active: true,
            busted: false,
            frozen: false,
            second_chance: false,
            forced_flips: 0,
            pending_actions: Vec::new(),
        }
    }

    /// Clear round state. Only `total_score` survives.
    ///
    /// The caller owns the cards and must have moved the hand out first.
    pub fn reset_round(&mut self) {
        debug_assert!(self.hand.is_empty(), "hand must be discarded before reset");
        debug_assert!(self.pending_actions.is_empty(), "pending actions must be discarded before reset");
        self.hand.clear();
        self.active = true;
        self.busted = false;
        self.frozen = false;
        self.second_chance = false;
        self.forced_flips = 0;
        self.pending_actions.clear();
    }

    /// Score of the current hand.
    #[must_use]
    pub fn round_score(&self) -> u32 {
        scoring::score_hand(&self.hand, self.busted)
    }

    #[must_use]
    pub fn distinct_numbers(&self) -> u32 {
        scoring::distinct_numbers(&self.hand)
    }

    #[must_use]
    pub fn has_flip_seven(&self) -> bool {
        scoring::has_flip_seven(&self.hand)
    }

    /// Whether `value` is already among this hand's number cards.
    #[must_use]
    pub fn holds_number(&self, value: u8) -> bool {
        scoring::duplicates(&self.hand, value)
    }

    /// Remove the first copy of `card` from the hand.
    pub fn take_from_hand(&mut self, card: Card) -> Option<Card> {
        let idx = self.hand.iter().position(|&c| c == card)?;
        Some(self.hand.remove(idx))
    }
}
