//! Flip 7 CLI: play one narrated game or run a quiet batch and print a
//! per-strategy summary.

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use flip7::{default_roster, run_simulations, Game, GameConfig, PlayerSpec, SimulationConfig};

#[derive(Parser)]
#[command(name = "flip7")]
#[command(about = "Flip 7 game and simulation runner")]
struct Args {
    /// Number of games to run
    #[arg(short, long, default_value = "1")]
    games: u32,

    /// Player specs as Name:strategy (aggressive, conservative[=stay], flip7[=safe], perfect, human)
    #[arg(long, num_args = 1..)]
    players: Vec<String>,

    /// Target score to win the game
    #[arg(long, default_value = "200")]
    winning_score: u32,

    /// Run quiet simulations and print the strategy summary
    #[arg(long)]
    simulate: bool,

    /// Seed for deterministic runs (random if omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Log every draw
    #[arg(short, long)]
    verbose: bool,

    /// Print the simulation summary as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let batch = args.simulate || args.games > 1;

    // RUST_LOG wins over the flags.
    let default_filter = if args.verbose {
        "debug"
    } else if batch {
        "warn"
    } else {
        "info"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt().with_env_filter(filter).with_target(false).init();

    let seats = if args.players.is_empty() {
        default_roster()
    } else {
        args.players
            .iter()
            .map(|spec| spec.parse::<PlayerSpec>())
            .collect::<Result<Vec<_>, _>>()?
    };
    let seed = args.seed.unwrap_or_else(rand::random);

    if batch {
        let config = SimulationConfig::default()
            .with_games(args.games)
            .with_winning_score(args.winning_score)
            .with_seed(seed);
        let summary = run_simulations(&config, &seats)?;

        if args.json {
            println!("{}", serde_json::to_string_pretty(&summary.to_json())?);
        } else {
            print!("{summary}");
        }
    } else {
        info!(seed, players = seats.len(), "starting game");
        let config = GameConfig::default()
            .with_winning_score(args.winning_score)
            .with_seed(seed);
        let mut game = seats
            .iter()
            .fold(Game::builder(config), |builder, seat| builder.player_spec(seat))
            .traced()
            .build()?;
        let outcome = game.play_game();

        if args.json {
            println!("{}", serde_json::to_string_pretty(&outcome)?);
        } else {
            println!(
                "{} wins with {} points after {} rounds",
                outcome.winner_name,
                game.player(outcome.winner).total_score,
                outcome.rounds
            );
        }
    }

    Ok(())
}
