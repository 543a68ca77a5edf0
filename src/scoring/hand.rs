//! Round score of a hand.
//!
//! Scoring is a pure function of the cards and the bust flag, which lets the
//! lookahead strategy score hypothetical hands without touching real state.

use serde::{Deserialize, Serialize};

use crate::cards::Card;

/// Distinct number values needed for a Flip 7.
pub const FLIP_SEVEN_COUNT: u32 = 7;

/// Flat bonus for a Flip 7. Never multiplied.
pub const FLIP_SEVEN_BONUS: u32 = 15;

/// Itemized round score.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    /// Sum of number cards, before the multiplier.
    pub number_sum: u32,
    pub multiplied: bool,
    /// Point modifiers, excluding the multiplier.
    pub modifier_sum: u32,
    /// 0 or [`FLIP_SEVEN_BONUS`].
    pub flip_seven_bonus: u32,
    pub total: u32,
}

impl ScoreBreakdown {
    /// Itemize `hand`. A busted hand is all zeros.
    #[must_use]
    pub fn of(hand: &[Card], busted: bool) -> Self {
        if busted {
            return Self::default();
        }

        let number_sum: u32 = hand.iter().filter_map(|c| c.number()).map(u32::from).sum();
        let multiplied = hand.iter().any(|c| c.is_multiplier());
        let modifier_sum: u32 = hand
            .iter()
            .filter(|c| matches!(c, Card::Modifier(_)) && !c.is_multiplier())
            .map(|c| u32::from(c.value()))
            .sum();
        let flip_seven_bonus = if has_flip_seven(hand) { FLIP_SEVEN_BONUS } else { 0 };

        let factor = if multiplied { 2 } else { 1 };
        Self {
            number_sum,
            multiplied,
            modifier_sum,
            flip_seven_bonus,
            total: number_sum * factor + modifier_sum + flip_seven_bonus,
        }
    }
}

/// Round score of `hand`: 0 if busted, otherwise
/// `numbers (x2 with multiplier) + point modifiers (+15 on a Flip 7)`.
#[must_use]
pub fn score_hand(hand: &[Card], busted: bool) -> u32 {
    ScoreBreakdown::of(hand, busted).total
}

/// Bit for number value `n`. Values past bit 15 cannot occur in a real deck
/// and map to no bit.
fn number_bit(n: u8) -> u16 {
    1u16.checked_shl(u32::from(n)).unwrap_or(0)
}

/// Bitmask of number values present in `hand`; bit `n` is set for value `n`.
#[must_use]
pub fn number_mask(hand: &[Card]) -> u16 {
    hand.iter()
        .filter_map(|c| c.number())
        .fold(0u16, |mask, n| mask | number_bit(n))
}

/// Count of distinct number values in `hand`.
#[must_use]
pub fn distinct_numbers(hand: &[Card]) -> u32 {
    number_mask(hand).count_ones()
}

#[must_use]
pub fn has_flip_seven(hand: &[Card]) -> bool {
    distinct_numbers(hand) >= FLIP_SEVEN_COUNT
}

/// Whether a number card of `value` would duplicate one already in `hand`.
#[must_use]
pub fn duplicates(hand: &[Card], value: u8) -> bool {
    number_mask(hand) & number_bit(value) != 0
}
