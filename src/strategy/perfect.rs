//! Card-counting lookahead.
//!
//! Perfect looks at the undrawn cards and, for each one, scores the hand it
//! would produce. If the mean of those scores beats the current score (and a
//! bust is not certain) it hits.

use serde::{Deserialize, Serialize};

use super::{Decision, Strategy, TurnContext};
use crate::cards::Deck;
use crate::core::{Hand, Player};
use crate::scoring;

/// One-card lookahead over the remaining deck.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Lookahead {
    pub current_score: u32,
    /// Mean round score after drawing each remaining card once.
    pub expected_score: f64,
    /// Share of remaining cards that would bust the hand.
    pub bust_probability: f64,
    pub cards_considered: usize,
}

/// Expected-value strategy with full knowledge of the undrawn cards.
#[derive(Clone, Copy, Debug, Default)]
pub struct Perfect;

impl Perfect {
    /// Evaluate drawing one more card.
    ///
    /// An empty draw pile means the next draw reshuffles the discards, so
    /// those are evaluated instead. `None` when both piles are empty.
    #[must_use]
    pub fn evaluate(player: &Player, deck: &Deck) -> Option<Lookahead> {
        let pool = if deck.draw_pile().is_empty() {
            deck.discard_pile()
        } else {
            deck.draw_pile()
        };
        if pool.is_empty() {
            return None;
        }

        let current_score = player.round_score();
        let mut scratch: Hand = player.hand.clone();
        let mut total: u64 = 0;
        let mut busting = 0usize;

        for &card in pool {
            if let Some(value) = card.number() {
                if player.holds_number(value) {
                    if player.second_chance {
                        // Duplicate and Second Chance both go; the numbers stay put.
                        total += u64::from(current_score);
                    } else {
                        busting += 1;
                    }
                    continue;
                }
            }

            scratch.push(card);
            total += u64::from(scoring::score_hand(&scratch, false));
            scratch.pop();
        }

        let cards_considered = pool.len();
        let bust_probability = if player.second_chance {
            0.0
        } else {
            busting as f64 / cards_considered as f64
        };

        Some(Lookahead {
            current_score,
            expected_score: total as f64 / cards_considered as f64,
            bust_probability,
            cards_considered,
        })
    }
}

impl Strategy for Perfect {
    fn choose_action(&self, ctx: &TurnContext<'_>) -> Decision {
        match Self::evaluate(ctx.player, ctx.deck) {
            Some(look) if look.expected_score > f64::from(look.current_score) && look.bust_probability < 1.0 => {
                Decision::Hit
            }
            _ => Decision::Stay,
        }
    }

    fn label(&self) -> String {
        "Perfect".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{ActionCard, Card, Modifier};
    use crate::core::PlayerId;

    fn decide(player: &Player, deck: &Deck) -> Decision {
        let ctx = TurnContext {
            seat: PlayerId::new(0),
            player,
            opponents: &[],
            deck,
        };
        Perfect.choose_action(&ctx)
    }

    fn player_with(values: &[u8]) -> Player {
        let mut player = Player::new("Pat");
        player.hand.extend(values.iter().map(|&v| Card::Number(v)));
        player
    }

    #[test]
    fn test_expected_score_and_bust_probability() {
        let player = player_with(&[5]);
        let deck = Deck::from_draw_pile(vec![Card::Number(5), Card::Number(3)]);

        let look = Perfect::evaluate(&player, &deck).unwrap();
        assert_eq!(look.current_score, 5);
        assert_eq!(look.cards_considered, 2);
        assert!((look.expected_score - 4.0).abs() < 1e-9);
        assert!((look.bust_probability - 0.5).abs() < 1e-9);
        assert_eq!(decide(&player, &deck), Decision::Stay);
    }

    #[test]
    fn test_hits_when_gain_expected() {
        let player = player_with(&[5]);
        let deck = Deck::from_draw_pile(vec![Card::Number(5), Card::Number(12), Card::Modifier(Modifier::Points(10))]);
        // (0 + 17 + 15) / 3 > 5
        assert_eq!(decide(&player, &deck), Decision::Hit);
    }

    #[test]
    fn test_certain_bust_stays() {
        let player = player_with(&[5, 7]);
        let deck = Deck::from_draw_pile(vec![Card::Number(5), Card::Number(7)]);
        let look = Perfect::evaluate(&player, &deck).unwrap();
        assert_eq!(look.bust_probability, 1.0);
        assert_eq!(decide(&player, &deck), Decision::Stay);
    }

    #[test]
    fn test_second_chance_removes_bust_risk() {
        let mut player = player_with(&[5]);
        player.second_chance = true;
        player.hand.push(Card::Action(ActionCard::SecondChance));
        let deck = Deck::from_draw_pile(vec![Card::Number(5), Card::Number(6)]);

        let look = Perfect::evaluate(&player, &deck).unwrap();
        assert_eq!(look.bust_probability, 0.0);
        // (5 + 11) / 2
        assert!((look.expected_score - 8.0).abs() < 1e-9);
        assert_eq!(decide(&player, &deck), Decision::Hit);
    }

    #[test]
    fn test_action_cards_keep_current_score() {
        let player = player_with(&[9]);
        let deck = Deck::from_draw_pile(vec![Card::Action(ActionCard::Freeze)]);
        let look = Perfect::evaluate(&player, &deck).unwrap();
        assert!((look.expected_score - 9.0).abs() < 1e-9);
        assert_eq!(decide(&player, &deck), Decision::Stay);
    }

    #[test]
    fn test_flip_seven_bonus_counted() {
        let player = player_with(&[0, 1, 2, 3, 4, 5]);
        let deck = Deck::from_draw_pile(vec![Card::Number(6)]);
        let look = Perfect::evaluate(&player, &deck).unwrap();
        assert!((look.expected_score - 36.0).abs() < 1e-9);
    }

    #[test]
    fn test_uses_discards_when_draw_pile_empty() {
        let player = player_with(&[2]);
        let mut deck = Deck::from_draw_pile(Vec::new());
        assert!(Perfect::evaluate(&player, &deck).is_none());
        assert_eq!(decide(&player, &deck), Decision::Stay);

        deck.discard(Card::Number(10));
        let look = Perfect::evaluate(&player, &deck).unwrap();
        assert_eq!(look.cards_considered, 1);
        assert_eq!(decide(&player, &deck), Decision::Hit);
    }
}
