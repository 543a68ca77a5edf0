//! Batch simulation.
//!
//! - `batch`: run many games and aggregate results per strategy
//! - `stats`: the aggregate rows and their rendering

mod batch;
mod stats;

pub use batch::run_simulations;
pub use stats::{SimulationSummary, StrategyStats};
