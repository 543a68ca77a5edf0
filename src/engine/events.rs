//! Observable game events.
//!
//! The engine reports what happens through an [`EventSink`] instead of
//! printing. Control flow never depends on the sink, so quiet simulations use
//! [`NoopSink`], tests record into a `Vec<GameEvent>`, and the CLI renders
//! through `tracing` with [`TracingSink`].

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::cards::{ActionCard, Card};
use crate::core::PlayerId;
use crate::scoring::ScoreBreakdown;

/// Something that happened during a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    GameStarted { players: usize, winning_score: u32 },
    RoundStarted { round: u32, dealer: PlayerId },
    /// Initial one-card deal.
    CardDealt { player: PlayerId, card: Card },
    /// Hit or forced flip.
    CardDrawn { player: PlayerId, card: Card, forced: bool },
    /// Discards were shuffled back into the empty draw pile.
    DeckReshuffled { cards: usize },
    /// Both piles were empty; nothing was drawn.
    DeckExhausted { player: PlayerId },
    Stayed { player: PlayerId, score: u32 },
    Frozen { target: PlayerId, by: PlayerId },
    FlipThree { target: PlayerId, by: PlayerId },
    /// Action drawn mid Flip Three, held until the sequence finishes.
    ActionDeferred { player: PlayerId, action: ActionCard },
    /// Deferred actions thrown away because the sequence ended early.
    DeferredDiscarded { player: PlayerId, count: usize },
    SecondChanceGained { player: PlayerId },
    SecondChancePassed { from: PlayerId, to: PlayerId },
    /// Nobody could take the card.
    SecondChanceDiscarded { player: PlayerId },
    /// A duplicate was drawn and the Second Chance absorbed it.
    SecondChanceUsed { player: PlayerId, duplicate: u8 },
    Busted { player: PlayerId, duplicate: u8 },
    FlipSeven { player: PlayerId },
    RoundScored { player: PlayerId, score: ScoreBreakdown, total: u32 },
    RoundEnded { round: u32, flip_seven: Option<PlayerId> },
    GameOver { winner: PlayerId, score: u32, rounds: u32, reached_target: bool },
}

/// Receives engine events.
pub trait EventSink {
    fn emit(&mut self, event: &GameEvent);
}

/// Discards every event.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopSink;

impl EventSink for NoopSink {
    #[inline]
    fn emit(&mut self, _event: &GameEvent) {}
}

impl EventSink for Vec<GameEvent> {
    fn emit(&mut self, event: &GameEvent) {
        self.push(*event);
    }
}

impl<T: EventSink + ?Sized> EventSink for &mut T {
    fn emit(&mut self, event: &GameEvent) {
        (**self).emit(event);
    }
}

/// Renders events as `tracing` records.
///
/// Milestones (rounds, scores, busts, Flip 7) are `info`; individual cards
/// and reshuffles are `debug`.
#[derive(Clone, Debug, Default)]
pub struct TracingSink {
    names: Vec<String>,
}

impl TracingSink {
    /// `names[seat]` is used in place of the seat number.
    pub fn new(names: Vec<String>) -> Self {
        Self { names }
    }

    fn name(&self, player: PlayerId) -> String {
        self.names
            .get(player.index())
            .cloned()
            .unwrap_or_else(|| player.to_string())
    }
}

impl EventSink for TracingSink {
    fn emit(&mut self, event: &GameEvent) {
        match *event {
            GameEvent::GameStarted { players, winning_score } => {
                info!(players, winning_score, "starting Flip 7");
            }
            GameEvent::RoundStarted { round, dealer } => {
                info!(round, dealer = %self.name(dealer), "--- round {round} ---");
            }
            GameEvent::CardDealt { player, card } => {
                debug!("{} starts with {card}", self.name(player));
            }
            GameEvent::CardDrawn { player, card, forced } => {
                if forced {
                    debug!("{} flips {card} (forced)", self.name(player));
                } else {
                    debug!("{} hits and draws {card}", self.name(player));
                }
            }
            GameEvent::DeckReshuffled { cards } => debug!(cards, "deck reshuffled"),
            GameEvent::DeckExhausted { player } => {
                info!("deck exhausted, {} receives nothing", self.name(player));
            }
            GameEvent::Stayed { player, score } => info!("{} stays on {score}", self.name(player)),
            GameEvent::Frozen { target, by } => {
                info!("{} freezes {}", self.name(by), self.name(target));
            }
            GameEvent::FlipThree { target, by } => {
                info!("{} makes {} flip three", self.name(by), self.name(target));
            }
            GameEvent::ActionDeferred { player, action } => {
                debug!("{} holds {} until the flips finish", self.name(player), action.name());
            }
            GameEvent::DeferredDiscarded { player, count } => {
                debug!(count, "{} loses deferred actions", self.name(player));
            }
            GameEvent::SecondChanceGained { player } => {
                info!("{} gains a Second Chance", self.name(player));
            }
            GameEvent::SecondChancePassed { from, to } => {
                info!("{} passes a Second Chance to {}", self.name(from), self.name(to));
            }
            GameEvent::SecondChanceDiscarded { player } => {
                debug!("nobody can take {}'s Second Chance", self.name(player));
            }
            GameEvent::SecondChanceUsed { player, duplicate } => {
                info!("{} is saved by Second Chance from a second {duplicate}", self.name(player));
            }
            GameEvent::Busted { player, duplicate } => {
                info!("{} busts on a second {duplicate}", self.name(player));
            }
            GameEvent::FlipSeven { player } => info!("{} achieves FLIP 7", self.name(player)),
            GameEvent::RoundScored { player, score, total } => {
                info!(total, "{} scores {}", self.name(player), score.total);
            }
            GameEvent::RoundEnded { round, flip_seven } => {
                debug!(round, flip_seven = flip_seven.is_some(), "round over");
            }
            GameEvent::GameOver { winner, score, rounds, reached_target } => {
                info!(rounds, reached_target, "{} wins with {score} points", self.name(winner));
            }
        }
    }
}
