//! Game setup and the game loop.
//!
//! A [`Game`] owns the players, their strategies, the deck and the RNG
//! streams. Rounds are played until someone reaches the winning score.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::events::{EventSink, GameEvent, NoopSink, TracingSink};
use crate::cards::Deck;
use crate::core::{GameConfig, GameRng, Player, PlayerId};
use crate::error::{Flip7Error, Result};
use crate::strategy::{PlayerSpec, Strategy};

/// How a finished game turned out.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameOutcome {
    pub winner: PlayerId,
    pub winner_name: String,
    /// Totals by seat.
    pub final_scores: Vec<u32>,
    pub rounds: u32,
    /// False only when `max_rounds` stopped the game first.
    pub reached_target: bool,
}

/// A game in progress.
pub struct Game<S = NoopSink> {
    pub(super) config: GameConfig,
    pub(super) players: Vec<Player>,
    pub(super) strategies: Vec<Box<dyn Strategy>>,
    pub(super) deck: Deck,
    /// Shuffles, including reshuffles of the discard pile.
    pub(super) deck_rng: GameRng,
    /// Action-card target selection.
    pub(super) target_rng: GameRng,
    pub(super) dealer: usize,
    pub(super) rounds_played: u32,
    pub(super) sink: S,
}

impl Game<NoopSink> {
    /// Quiet game from parsed seat specs.
    pub fn new(config: GameConfig, seats: &[PlayerSpec]) -> Result<Self> {
        seats
            .iter()
            .fold(GameBuilder::new(config), |builder, seat| builder.player_spec(seat))
            .build()
    }

    #[must_use]
    pub fn builder(config: GameConfig) -> GameBuilder<NoopSink> {
        GameBuilder::new(config)
    }
}

impl<S: EventSink> Game<S> {
    /// Play rounds until a player reaches `winning_score`.
    ///
    /// The highest total wins; ties go to the earliest seat.
    pub fn play_game(&mut self) -> GameOutcome {
        self.sink.emit(&GameEvent::GameStarted {
            players: self.players.len(),
            winning_score: self.config.winning_score,
        });

        while self.players.iter().all(|p| p.total_score < self.config.winning_score)
            && self.rounds_played < self.config.max_rounds
        {
            self.play_round();
        }

        let winner = self.leader();
        let score = self.players[winner.index()].total_score;
        let reached_target = score >= self.config.winning_score;
        self.sink.emit(&GameEvent::GameOver {
            winner,
            score,
            rounds: self.rounds_played,
            reached_target,
        });

        GameOutcome {
            winner,
            winner_name: self.players[winner.index()].name.clone(),
            final_scores: self.players.iter().map(|p| p.total_score).collect(),
            rounds: self.rounds_played,
            reached_target,
        }
    }

    /// Seat with the highest total, earliest seat on ties.
    #[must_use]
    pub fn leader(&self) -> PlayerId {
        let mut best = 0;
        for (seat, player) in self.players.iter().enumerate() {
            if player.total_score > self.players[best].total_score {
                best = seat;
            }
        }
        PlayerId::new(best as u8)
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    #[must_use]
    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id.index()]
    }

    /// Direct access for scripted setups. The engine trusts whatever is written here.
    pub fn player_mut(&mut self, id: PlayerId) -> &mut Player {
        &mut self.players[id.index()]
    }

    /// Strategy label by seat.
    #[must_use]
    pub fn strategy_labels(&self) -> Vec<String> {
        self.strategies.iter().map(|s| s.label()).collect()
    }

    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Seat that deals the next round.
    #[must_use]
    pub fn dealer_index(&self) -> usize {
        self.dealer
    }

    #[must_use]
    pub fn rounds_played(&self) -> u32 {
        self.rounds_played
    }

    /// Every card the game holds: both piles, all hands, all deferred actions.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.deck.len()
            + self
                .players
                .iter()
                .map(|p| p.hand.len() + p.pending_actions.len())
                .sum::<usize>()
    }

    #[must_use]
    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }
}

/// Seats, deck and event sink for a new [`Game`].
pub struct GameBuilder<S = NoopSink> {
    config: GameConfig,
    seats: Vec<(String, Box<dyn Strategy>)>,
    deck: Option<Deck>,
    sink: S,
}

impl GameBuilder<NoopSink> {
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            seats: Vec::new(),
            deck: None,
            sink: NoopSink,
        }
    }
}

impl<S: EventSink> GameBuilder<S> {
    /// Add a seat. Seating order is the order of calls.
    #[must_use]
    pub fn player(mut self, name: impl Into<String>, strategy: impl Strategy + 'static) -> Self {
        self.seats.push((name.into(), Box::new(strategy)));
        self
    }

    #[must_use]
    pub fn player_spec(self, seat: &PlayerSpec) -> Self {
        self.player(seat.name.clone(), seat.strategy.build())
    }

    /// Use this deck as-is instead of a freshly shuffled standard deck.
    #[must_use]
    pub fn deck(mut self, deck: Deck) -> Self {
        self.deck = Some(deck);
        self
    }

    #[must_use]
    pub fn sink<T: EventSink>(self, sink: T) -> GameBuilder<T> {
        GameBuilder {
            config: self.config,
            seats: self.seats,
            deck: self.deck,
            sink,
        }
    }

    /// Log through `tracing`, naming players by their seat names.
    #[must_use]
    pub fn traced(self) -> GameBuilder<TracingSink> {
        let names = self.seats.iter().map(|(name, _)| name.clone()).collect();
        self.sink(TracingSink::new(names))
    }

    pub fn build(self) -> Result<Game<S>> {
        if self.seats.is_empty() {
            return Err(Flip7Error::NoPlayers);
        }
        if self.seats.len() > usize::from(u8::MAX) {
            return Err(Flip7Error::TooManyPlayers(self.seats.len()));
        }

        let mut seen = FxHashSet::default();
        for (name, _) in &self.seats {
            if !seen.insert(name.as_str()) {
                return Err(Flip7Error::DuplicatePlayerName(name.clone()));
            }
        }

        let rng = GameRng::new(self.config.seed);
        let mut deck_rng = rng.for_context("deck");
        let target_rng = rng.for_context("targets");
        let deck = match self.deck {
            Some(deck) => deck,
            None => Deck::standard(&mut deck_rng),
        };

        let dealer = self.config.initial_dealer % self.seats.len();
        let (players, strategies) = self
            .seats
            .into_iter()
            .map(|(name, strategy)| (Player::new(name), strategy))
            .unzip();

        Ok(Game {
            config: self.config,
            players,
            strategies,
            deck,
            deck_rng,
            target_rng,
            dealer,
            rounds_played: 0,
            sink: self.sink,
        })
    }
}
