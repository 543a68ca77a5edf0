//! Strategies driving real rounds.

use std::sync::{Arc, Mutex};

use flip7::cards::{Card, Deck};
use flip7::core::{GameConfig, PlayerId};
use flip7::engine::{Game, GameEvent};
use flip7::strategy::{
    default_roster, Aggressive, Conservative, Decision, Flip7Chaser, Human, Perfect, PlayerSpec, Strategy,
    StrategySpec, TurnContext,
};

fn stacked(values: &[u8]) -> Deck {
    Deck::from_draw_pile(values.iter().rev().map(|&v| Card::Number(v)).collect())
}

/// What a strategy saw on one turn.
#[derive(Clone, Debug, PartialEq)]
struct Seen {
    seat: PlayerId,
    hand_size: usize,
    opponents: Vec<String>,
    draw_pile: usize,
}

/// Records every context it is shown, then defers to `inner`.
struct Recorder<S> {
    inner: S,
    seen: Arc<Mutex<Vec<Seen>>>,
}

impl<S: Strategy> Strategy for Recorder<S> {
    fn choose_action(&self, ctx: &TurnContext<'_>) -> Decision {
        self.seen.lock().unwrap().push(Seen {
            seat: ctx.seat,
            hand_size: ctx.player.hand.len(),
            opponents: ctx.opponents.iter().map(|p| p.name.clone()).collect(),
            draw_pile: ctx.deck.draw_pile().len(),
        });
        self.inner.choose_action(ctx)
    }

    fn label(&self) -> String {
        self.inner.label()
    }
}

#[test]
fn test_context_shows_active_opponents_and_deck() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let recorder = Recorder {
        inner: Conservative::new(8),
        seen: Arc::clone(&seen),
    };
    let mut game = Game::builder(GameConfig::default())
        .player("Ann", recorder)
        .player("Ben", Conservative::new(0))
        .player("Cat", Conservative::new(0))
        .deck(stacked(&[4, 2, 3, 6, 9]))
        .build()
        .unwrap();

    let outcome = game.play_round();

    let seen = seen.lock().unwrap();
    assert_eq!(seen.len(), 2);
    assert_eq!(
        seen[0],
        Seen {
            seat: PlayerId::new(0),
            hand_size: 1,
            opponents: vec!["Ben".to_string(), "Cat".to_string()],
            draw_pile: 2,
        }
    );
    // Ben and Cat stayed during the first pass.
    assert_eq!(seen[1].hand_size, 2);
    assert!(seen[1].opponents.is_empty());
    assert_eq!(outcome.scores, vec![10, 2, 3]);
}

#[test]
fn test_perfect_stays_on_certain_bust() {
    let mut game = Game::builder(GameConfig::default())
        .player("Pat", Perfect)
        .player("Ben", Conservative::new(0))
        .deck(stacked(&[5, 3, 5]))
        .build()
        .unwrap();

    let outcome = game.play_round();

    assert_eq!(outcome.scores, vec![5, 3]);
    assert_eq!(game.deck().draw_pile(), &[Card::Number(5)]);
}

#[test]
fn test_perfect_hits_when_draw_is_safe() {
    let mut game = Game::builder(GameConfig::default())
        .player("Pat", Perfect)
        .player("Ben", Conservative::new(0))
        .deck(stacked(&[5, 3, 9]))
        .build()
        .unwrap();

    let outcome = game.play_round();

    // One safe hit, then both piles are empty and Perfect stays.
    assert_eq!(outcome.scores, vec![14, 3]);
    assert!(game.deck().draw_pile().is_empty());
}

#[test]
fn test_chaser_presses_near_flip_seven() {
    // Five distinct numbers worth 50: a threshold player stays, the chaser hits.
    let mut game = Game::builder(GameConfig::default())
        .player("Ann", Flip7Chaser::new(50))
        .deck(stacked(&[]))
        .build()
        .unwrap();
    game.begin_round();
    game.player_mut(PlayerId::new(0)).hand.extend([8, 9, 10, 11, 12].map(Card::Number));

    let ctx = TurnContext {
        seat: PlayerId::new(0),
        player: game.player(PlayerId::new(0)),
        opponents: &[],
        deck: game.deck(),
    };
    assert_eq!(Flip7Chaser::new(50).choose_action(&ctx), Decision::Hit);
    assert_eq!(Conservative::new(50).choose_action(&ctx), Decision::Stay);
}

#[test]
fn test_human_plays_a_round() {
    let human = Human::new("h\nhit\ns\n".as_bytes(), Vec::new());
    let mut game = Game::builder(GameConfig::default())
        .player("Hana", human)
        .player("Ben", Conservative::new(0))
        .deck(stacked(&[1, 2, 3, 4, 9]))
        .sink(Vec::<GameEvent>::new())
        .build()
        .unwrap();

    let outcome = game.play_round();

    assert_eq!(outcome.scores, vec![1 + 3 + 4, 2]);
    assert!(game
        .sink()
        .contains(&GameEvent::Stayed { player: PlayerId::new(0), score: 8 }));
}

#[test]
fn test_spec_strategies_match_direct_construction() {
    let cases: [(&str, Box<dyn Strategy>); 4] = [
        ("agg", Box::new(Aggressive)),
        ("cons", Box::new(Conservative::default())),
        ("chaser=45", Box::new(Flip7Chaser::new(45))),
        ("perf", Box::new(Perfect)),
    ];
    for (text, direct) in cases {
        let spec: StrategySpec = text.parse().unwrap();
        assert_eq!(spec.build().label(), direct.label());
    }
}

#[test]
fn test_default_roster_plays_a_game() {
    let seats: Vec<PlayerSpec> = default_roster();
    let mut game = Game::new(GameConfig::default().with_seed(7), &seats).unwrap();

    let outcome = game.play_game();

    assert!(outcome.reached_target);
    assert_eq!(outcome.final_scores.len(), 8);
    assert!(outcome.final_scores[outcome.winner.index()] >= 200);
    assert_eq!(game.card_count(), flip7::STANDARD_DECK_SIZE);
}
