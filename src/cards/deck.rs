//! Draw and discard piles.
//!
//! The top of the draw pile is the *end* of the vector, so drawing is a
//! `pop`. When the draw pile runs dry the discard pile is shuffled back in.
//! The deck never logs; callers learn about reshuffles from [`DrawOutcome`].

use serde::{Deserialize, Serialize};

use super::card::{ActionCard, Card, Modifier};
use crate::core::GameRng;

/// Number of cards in the standard deck.
pub const STANDARD_DECK_SIZE: usize = 94;

/// Copies of each action card.
const ACTION_COPIES: usize = 3;

/// Point modifiers, one copy each.
const POINT_MODIFIERS: [u8; 5] = [2, 4, 6, 8, 10];

/// A card that came off the draw pile.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DrawOutcome {
    pub card: Card,
    /// Number of discards shuffled back in before this draw, if a reshuffle happened.
    pub reshuffled: Option<usize>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    draw_pile: Vec<Card>,
    discard_pile: Vec<Card>,
}

impl Deck {
    /// Full 94-card deck, unshuffled.
    ///
    /// One 0, then `n` copies of each rank `n` in 1..=12 (79 numbers),
    /// three of each action (9), five point modifiers and the multiplier (6).
    #[must_use]
    pub fn standard_cards() -> Vec<Card> {
        let mut cards = Vec::with_capacity(STANDARD_DECK_SIZE);

        cards.push(Card::Number(0));
        for rank in 1..=Card::MAX_NUMBER {
            cards.extend(std::iter::repeat(Card::Number(rank)).take(rank as usize));
        }

        for action in ActionCard::ALL {
            cards.extend(std::iter::repeat(Card::Action(action)).take(ACTION_COPIES));
        }

        cards.extend(POINT_MODIFIERS.iter().map(|&points| Card::Modifier(Modifier::Points(points))));
        cards.push(Card::Modifier(Modifier::TimesTwo));

        debug_assert_eq!(cards.len(), STANDARD_DECK_SIZE);
        cards
    }

    /// Standard deck, shuffled.
    #[must_use]
    pub fn standard(rng: &mut GameRng) -> Self {
        let mut deck = Self::from_draw_pile(Self::standard_cards());
        deck.shuffle(rng);
        deck
    }

    /// Deck with an exact draw pile; the last card is drawn first.
    #[must_use]
    pub fn from_draw_pile(draw_pile: Vec<Card>) -> Self {
        Self {
            draw_pile,
            discard_pile: Vec::new(),
        }
    }

    /// Uniformly random permutation of the draw pile.
    pub fn shuffle(&mut self, rng: &mut GameRng) {
        rng.shuffle(&mut self.draw_pile);
    }

    /// Take the top card.
    ///
    /// An empty draw pile is refilled from the discard pile and shuffled first.
    /// Returns `None` only when both piles are empty.
    pub fn draw(&mut self, rng: &mut GameRng) -> Option<DrawOutcome> {
        let mut reshuffled = None;

        if self.draw_pile.is_empty() {
            if self.discard_pile.is_empty() {
                return None;
            }
            std::mem::swap(&mut self.draw_pile, &mut self.discard_pile);
            reshuffled = Some(self.draw_pile.len());
            self.shuffle(rng);
        }

        self.draw_pile.pop().map(|card| DrawOutcome { card, reshuffled })
    }

    pub fn discard(&mut self, card: Card) {
        self.discard_pile.push(card);
    }

    pub fn discard_all(&mut self, cards: impl IntoIterator<Item = Card>) {
        self.discard_pile.extend(cards);
    }

    /// Undrawn cards, top of the pile last.
    #[must_use]
    pub fn draw_pile(&self) -> &[Card] {
        &self.draw_pile
    }

    #[must_use]
    pub fn discard_pile(&self) -> &[Card] {
        &self.discard_pile
    }

    /// Cards held by the deck across both piles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.draw_pile.len() + self.discard_pile.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.draw_pile.is_empty() && self.discard_pile.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::CardKind;

    #[test]
    fn test_standard_composition() {
        let cards = Deck::standard_cards();
        assert_eq!(cards.len(), STANDARD_DECK_SIZE);

        let count = |card: Card| cards.iter().filter(|&&c| c == card).count();
        assert_eq!(count(Card::Number(0)), 1);
        assert_eq!(count(Card::Number(1)), 1);
        assert_eq!(count(Card::Number(2)), 2);
        assert_eq!(count(Card::Number(12)), 12);
        assert_eq!(count(Card::Action(ActionCard::Freeze)), 3);
        assert_eq!(count(Card::Modifier(Modifier::Points(6))), 1);
        assert_eq!(count(Card::Modifier(Modifier::TimesTwo)), 1);

        let numbers = cards.iter().filter(|c| c.kind() == CardKind::Number).count();
        let actions = cards.iter().filter(|c| c.kind() == CardKind::Action).count();
        let modifiers = cards.iter().filter(|c| c.kind() == CardKind::Modifier).count();
        assert_eq!((numbers, actions, modifiers), (79, 9, 6));
    }

    #[test]
    fn test_draw_from_top() {
        let mut rng = GameRng::new(1);
        let mut deck = Deck::from_draw_pile(vec![Card::Number(1), Card::Number(2)]);

        let first = deck.draw(&mut rng).unwrap();
        assert_eq!(first.card, Card::Number(2));
        assert_eq!(first.reshuffled, None);
        assert_eq!(deck.draw(&mut rng).unwrap().card, Card::Number(1));
    }

    #[test]
    fn test_reshuffles_discards_when_empty() {
        let mut rng = GameRng::new(1);
        let mut deck = Deck::from_draw_pile(Vec::new());
        deck.discard_all([Card::Number(5), Card::Number(6), Card::Number(7)]);

        let outcome = deck.draw(&mut rng).unwrap();
        assert_eq!(outcome.reshuffled, Some(3));
        assert!(deck.discard_pile().is_empty());
        assert_eq!(deck.draw_pile().len(), 2);
        assert_eq!(deck.len(), 2);
    }

    #[test]
    fn test_exhausted_deck_yields_nothing() {
        let mut rng = GameRng::new(1);
        let mut deck = Deck::from_draw_pile(Vec::new());
        assert!(deck.is_empty());
        assert!(deck.draw(&mut rng).is_none());
        assert!(deck.draw(&mut rng).is_none());
    }

    #[test]
    fn test_standard_is_shuffled() {
        let mut rng = GameRng::new(3);
        let deck = Deck::standard(&mut rng);
        assert_eq!(deck.len(), STANDARD_DECK_SIZE);
        assert_ne!(deck.draw_pile(), Deck::standard_cards().as_slice());
    }
}
