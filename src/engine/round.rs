//! The round engine.
//!
//! A round runs `deal -> turns -> scoring`. Dealing gives each active seat
//! one card starting at the dealer; turns loop over active seats until all
//! have stayed, busted or been frozen; a Flip 7 anywhere ends the round at
//! once. Scoring banks every hand and returns the cards to the discard pile.
//!
//! Every drawn card ends up in exactly one place: a hand, a player's deferred
//! actions, or the discard pile.

use serde::{Deserialize, Serialize};

use super::events::{EventSink, GameEvent};
use super::game::Game;
use crate::cards::{ActionCard, Card};
use crate::core::PlayerId;
use crate::scoring::ScoreBreakdown;
use crate::strategy::{Decision, TurnContext};

/// Mandatory draws imposed by a Flip Three.
pub const FLIP_THREE_DRAWS: u8 = 3;

/// Whether a round continues after a card is resolved.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[must_use]
pub enum RoundSignal {
    Continue,
    /// This player reached seven distinct numbers; the round is over.
    FlipSeven(PlayerId),
}

/// Result of one round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundOutcome {
    pub round: u32,
    pub flip_seven: Option<PlayerId>,
    /// Round score by seat.
    pub scores: Vec<u32>,
}

fn seat(index: usize) -> PlayerId {
    PlayerId::new(index as u8)
}

impl<S: EventSink> Game<S> {
    /// Play one full round and rotate the dealer.
    pub fn play_round(&mut self) -> RoundOutcome {
        self.begin_round();

        let mut flip_seven = self.deal();
        if flip_seven.is_none() {
            flip_seven = self.take_turns();
        }

        self.finish_round(flip_seven)
    }

    /// Reset every player's round state.
    pub fn begin_round(&mut self) {
        for player in &mut self.players {
            player.reset_round();
        }
        self.sink.emit(&GameEvent::RoundStarted {
            round: self.rounds_played + 1,
            dealer: seat(self.dealer),
        });
    }

    /// Deal one card to every seat, starting with the dealer.
    ///
    /// A seat frozen earlier in the deal still gets its card and plays it
    /// normally. A seat already busted just holds it.
    ///
    /// Returns the Flip 7 winner if an action chain produced one.
    pub fn deal(&mut self) -> Option<PlayerId> {
        let count = self.players.len();

        for offset in 0..count {
            let index = (self.dealer + offset) % count;

            let Some(card) = self.draw_card(index) else {
                continue;
            };
            self.sink.emit(&GameEvent::CardDealt { player: seat(index), card });

            if self.players[index].busted {
                self.players[index].hand.push(card);
                continue;
            }
            if let RoundSignal::FlipSeven(winner) = self.accept_card(index, card, false) {
                return Some(winner);
            }
        }

        None
    }

    /// Ask active seats to hit or stay until nobody is left.
    ///
    /// Returns the Flip 7 winner if the round ended early.
    pub fn take_turns(&mut self) -> Option<PlayerId> {
        loop {
            let order: Vec<usize> = (0..self.players.len()).filter(|&i| self.players[i].active).collect();
            if order.is_empty() {
                return None;
            }

            for index in order {
                // Frozen or busted earlier in this pass.
                if !self.players[index].active {
                    continue;
                }

                let forced = self.players[index].forced_flips > 0;
                let decision = if forced {
                    self.players[index].forced_flips -= 1;
                    Decision::Hit
                } else {
                    self.ask_strategy(index)
                };

                match decision {
                    Decision::Stay => self.stay(index),
                    Decision::Hit => {
                        if let RoundSignal::FlipSeven(winner) = self.hit_seat(index, forced) {
                            return Some(winner);
                        }
                    }
                }
            }
        }
    }

    /// Score every hand, bank the totals, discard all cards and pass the deal.
    pub fn finish_round(&mut self, flip_seven: Option<PlayerId>) -> RoundOutcome {
        let mut scores = Vec::with_capacity(self.players.len());

        for (index, player) in self.players.iter_mut().enumerate() {
            let score = ScoreBreakdown::of(&player.hand, player.busted);
            player.total_score += score.total;

            self.deck.discard_all(player.hand.drain(..));
            self.deck.discard_all(player.pending_actions.drain(..).map(Card::Action));

            self.sink.emit(&GameEvent::RoundScored {
                player: seat(index),
                score,
                total: player.total_score,
            });
            scores.push(score.total);
        }

        self.rounds_played += 1;
        self.dealer = (self.dealer + 1) % self.players.len();
        self.sink.emit(&GameEvent::RoundEnded {
            round: self.rounds_played,
            flip_seven,
        });

        RoundOutcome {
            round: self.rounds_played,
            flip_seven,
            scores,
        }
    }

    /// Voluntary (unforced) hit for `player`.
    pub fn hit(&mut self, player: PlayerId) -> RoundSignal {
        self.hit_seat(player.index(), false)
    }

    /// Resolve an action card drawn by `drawer` outside a forced sequence.
    ///
    /// Targets are the other active players, chosen uniformly; with none
    /// left the drawer targets themselves. Second Chance always goes to the
    /// drawer first.
    pub fn resolve_action(&mut self, action: ActionCard, drawer: PlayerId) -> RoundSignal {
        let drawer = drawer.index();

        match action {
            ActionCard::Freeze => {
                let target = self.pick_target(drawer);
                let player = &mut self.players[target];
                player.frozen = true;
                player.active = false;
                player.hand.push(Card::Action(ActionCard::Freeze));
                self.sink.emit(&GameEvent::Frozen {
                    target: seat(target),
                    by: seat(drawer),
                });
                RoundSignal::Continue
            }
            ActionCard::FlipThree => {
                let target = self.pick_target(drawer);
                self.players[drawer].hand.push(Card::Action(ActionCard::FlipThree));
                self.sink.emit(&GameEvent::FlipThree {
                    target: seat(target),
                    by: seat(drawer),
                });
                self.flip_three(target)
            }
            ActionCard::SecondChance => {
                self.grant_second_chance(drawer);
                RoundSignal::Continue
            }
        }
    }

    fn ask_strategy(&self, index: usize) -> Decision {
        let opponents: Vec<_> = self
            .players
            .iter()
            .enumerate()
            .filter(|&(i, p)| i != index && p.active)
            .map(|(_, p)| p)
            .collect();

        let ctx = TurnContext {
            seat: seat(index),
            player: &self.players[index],
            opponents: &opponents,
            deck: &self.deck,
        };
        self.strategies[index].choose_action(&ctx)
    }

    fn stay(&mut self, index: usize) {
        let player = &mut self.players[index];
        player.active = false;
        let score = player.round_score();
        self.sink.emit(&GameEvent::Stayed { player: seat(index), score });
    }

    fn hit_seat(&mut self, index: usize, forced: bool) -> RoundSignal {
        let Some(card) = self.draw_card(index) else {
            // Nothing left to draw anywhere: the hand stands as it is.
            self.players[index].forced_flips = 0;
            self.stay(index);
            if forced {
                return self.resolve_pending(index);
            }
            return RoundSignal::Continue;
        };
        self.sink.emit(&GameEvent::CardDrawn {
            player: seat(index),
            card,
            forced,
        });

        let signal = self.accept_card(index, card, forced);
        let player = &self.players[index];
        if forced && signal == RoundSignal::Continue && player.forced_flips == 0 && !player.busted {
            return self.resolve_pending(index);
        }
        signal
    }

    fn draw_card(&mut self, index: usize) -> Option<Card> {
        match self.deck.draw(&mut self.deck_rng) {
            Some(outcome) => {
                if let Some(cards) = outcome.reshuffled {
                    self.sink.emit(&GameEvent::DeckReshuffled { cards });
                }
                Some(outcome.card)
            }
            None => {
                self.sink.emit(&GameEvent::DeckExhausted { player: seat(index) });
                None
            }
        }
    }

    /// Put a freshly drawn card into play for `index`.
    ///
    /// With `deferring`, action cards are queued rather than resolved.
    fn accept_card(&mut self, index: usize, card: Card, deferring: bool) -> RoundSignal {
        match card {
            Card::Action(action) if deferring => {
                self.players[index].pending_actions.push(action);
                self.sink.emit(&GameEvent::ActionDeferred {
                    player: seat(index),
                    action,
                });
                RoundSignal::Continue
            }
            Card::Action(action) => self.resolve_action(action, seat(index)),
            Card::Modifier(_) => {
                self.players[index].hand.push(card);
                RoundSignal::Continue
            }
            Card::Number(value) => self.accept_number(index, value),
        }
    }

    fn accept_number(&mut self, index: usize, value: u8) -> RoundSignal {
        let player = &mut self.players[index];

        if !player.holds_number(value) {
            player.hand.push(Card::Number(value));
            if player.has_flip_seven() {
                self.sink.emit(&GameEvent::FlipSeven { player: seat(index) });
                return RoundSignal::FlipSeven(seat(index));
            }
            return RoundSignal::Continue;
        }

        if player.second_chance {
            player.second_chance = false;
            let spent = player.take_from_hand(Card::Action(ActionCard::SecondChance));
            self.deck.discard(Card::Number(value));
            self.deck.discard_all(spent);
            self.sink.emit(&GameEvent::SecondChanceUsed {
                player: seat(index),
                duplicate: value,
            });
            return RoundSignal::Continue;
        }

        // The busting card stays on the table with the rest of the hand.
        player.hand.push(Card::Number(value));
        player.busted = true;
        player.active = false;
        player.forced_flips = 0;
        self.sink.emit(&GameEvent::Busted {
            player: seat(index),
            duplicate: value,
        });
        self.discard_pending(index);
        RoundSignal::Continue
    }

    /// Other active players, uniformly; the drawer when nobody else is left.
    fn pick_target(&mut self, drawer: usize) -> usize {
        let targets: Vec<usize> = (0..self.players.len())
            .filter(|&i| i != drawer && self.players[i].active)
            .collect();

        match targets.len() {
            0 => drawer,
            1 => targets[0],
            n => targets[self.target_rng.index(n)],
        }
    }

    /// Three forced draws for `target`, then any actions they turned up.
    fn flip_three(&mut self, target: usize) -> RoundSignal {
        self.players[target].forced_flips = FLIP_THREE_DRAWS;

        while self.players[target].forced_flips > 0 && !self.players[target].busted {
            self.players[target].forced_flips -= 1;

            let Some(card) = self.draw_card(target) else {
                break;
            };
            self.sink.emit(&GameEvent::CardDrawn {
                player: seat(target),
                card,
                forced: true,
            });

            if let RoundSignal::FlipSeven(winner) = self.accept_card(target, card, true) {
                self.players[target].forced_flips = 0;
                self.discard_pending(target);
                return RoundSignal::FlipSeven(winner);
            }
        }

        self.players[target].forced_flips = 0;
        if self.players[target].busted {
            return RoundSignal::Continue;
        }
        self.resolve_pending(target)
    }

    /// Resolve deferred actions in the order they were drawn.
    fn resolve_pending(&mut self, index: usize) -> RoundSignal {
        let pending = std::mem::take(&mut self.players[index].pending_actions);
        let mut queue = pending.into_iter();

        while let Some(action) = queue.next() {
            if let RoundSignal::FlipSeven(winner) = self.resolve_action(action, seat(index)) {
                let rest: Vec<Card> = queue.map(Card::Action).collect();
                if !rest.is_empty() {
                    self.sink.emit(&GameEvent::DeferredDiscarded {
                        player: seat(index),
                        count: rest.len(),
                    });
                    self.deck.discard_all(rest);
                }
                return RoundSignal::FlipSeven(winner);
            }
        }

        RoundSignal::Continue
    }

    fn discard_pending(&mut self, index: usize) {
        let pending = std::mem::take(&mut self.players[index].pending_actions);
        if pending.is_empty() {
            return;
        }
        self.sink.emit(&GameEvent::DeferredDiscarded {
            player: seat(index),
            count: pending.len(),
        });
        self.deck.discard_all(pending.into_iter().map(Card::Action));
    }

    /// Keep it, pass it to the first active seat without one, or discard it.
    ///
    /// Seats that stayed, froze or busted never receive a passed card.
    fn grant_second_chance(&mut self, drawer: usize) {
        let card = Card::Action(ActionCard::SecondChance);

        if !self.players[drawer].second_chance {
            let player = &mut self.players[drawer];
            player.second_chance = true;
            player.hand.push(card);
            self.sink.emit(&GameEvent::SecondChanceGained { player: seat(drawer) });
            return;
        }

        let recipient = (0..self.players.len())
            .find(|&i| i != drawer && self.players[i].active && !self.players[i].second_chance);

        match recipient {
            Some(to) => {
                let player = &mut self.players[to];
                player.second_chance = true;
                player.hand.push(card);
                self.sink.emit(&GameEvent::SecondChancePassed {
                    from: seat(drawer),
                    to: seat(to),
                });
            }
            None => {
                self.deck.discard(card);
                self.sink.emit(&GameEvent::SecondChanceDiscarded { player: seat(drawer) });
            }
        }
    }
}
