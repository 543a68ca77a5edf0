//! Batch runner: many quiet games, one summary.

use tracing::{debug, info};

use super::stats::SimulationSummary;
use crate::core::{GameConfig, GameRng, SimulationConfig};
use crate::engine::Game;
use crate::error::{Flip7Error, Result};
use crate::strategy::PlayerSpec;

/// Play `config.games` games with the same seats and aggregate by strategy label.
///
/// Each game gets its own seed forked from `config.seed`, so a batch is
/// reproducible game by game. Interactive seats are rejected up front.
pub fn run_simulations(config: &SimulationConfig, seats: &[PlayerSpec]) -> Result<SimulationSummary> {
    if let Some(seat) = seats.iter().find(|s| s.strategy.is_interactive()) {
        return Err(Flip7Error::InteractiveSeat(seat.name.clone()));
    }

    let mut master = GameRng::new(config.seed);
    let mut summary = SimulationSummary::new();

    info!(games = config.games, seats = seats.len(), seed = config.seed, "running simulations");

    for game_index in 0..config.games {
        let game_config = GameConfig::default()
            .with_winning_score(config.winning_score)
            .with_seed(master.fork().seed());
        let mut game = Game::new(game_config, seats)?;
        let outcome = game.play_game();

        debug!(
            game = game_index,
            winner = %outcome.winner_name,
            rounds = outcome.rounds,
            "game finished"
        );

        let labels: Vec<String> = game.strategy_labels();
        for (label, player) in labels.iter().zip(game.players()) {
            let row = summary.entry(label);
            row.games_played += 1;
            row.total_score += u64::from(player.total_score);
            row.total_rounds += u64::from(outcome.rounds);
        }
        summary.entry(&labels[outcome.winner.index()]).wins += 1;
        summary.games += 1;
    }

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategy::StrategySpec;

    fn seats() -> Vec<PlayerSpec> {
        vec![
            PlayerSpec::new("Ann", StrategySpec::Aggressive),
            PlayerSpec::new("Ben", StrategySpec::Conservative { stay_threshold: 25 }),
            PlayerSpec::new("Cat", StrategySpec::Conservative { stay_threshold: 25 }),
        ]
    }

    #[test]
    fn test_counts_add_up() {
        let config = SimulationConfig::default().with_games(10).with_winning_score(60);
        let summary = run_simulations(&config, &seats()).unwrap();

        assert_eq!(summary.games, 10);
        assert_eq!(summary.strategies.len(), 2);
        assert_eq!(summary.get("Aggressive").unwrap().games_played, 10);
        assert_eq!(summary.get("Conservative(stay>=25)").unwrap().games_played, 20);

        let wins: u32 = summary.strategies.iter().map(|s| s.wins).sum();
        assert_eq!(wins, 10);
    }

    #[test]
    fn test_reproducible() {
        let config = SimulationConfig::default().with_games(5).with_winning_score(80).with_seed(3);
        assert_eq!(
            run_simulations(&config, &seats()).unwrap(),
            run_simulations(&config, &seats()).unwrap()
        );
    }

    #[test]
    fn test_rejects_interactive_and_empty() {
        let config = SimulationConfig::default().with_games(1);
        let human = vec![PlayerSpec::new("Me", StrategySpec::Human)];
        assert_eq!(run_simulations(&config, &human), Err(Flip7Error::InteractiveSeat("Me".to_string())));
        assert_eq!(run_simulations(&config, &[]), Err(Flip7Error::NoPlayers));
    }
}
