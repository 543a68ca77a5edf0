//! Per-strategy results aggregated over many games.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Totals for every seat that played one strategy.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StrategyStats {
    pub label: String,
    /// Seat-games played (two seats with one strategy count twice per game).
    pub games_played: u32,
    pub wins: u32,
    pub total_score: u64,
    pub total_rounds: u64,
}

impl StrategyStats {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.games_played == 0 {
            0.0
        } else {
            f64::from(self.wins) / f64::from(self.games_played)
        }
    }

    #[must_use]
    pub fn avg_score(&self) -> f64 {
        if self.games_played == 0 {
            0.0
        } else {
            self.total_score as f64 / f64::from(self.games_played)
        }
    }

    #[must_use]
    pub fn avg_rounds(&self) -> f64 {
        if self.games_played == 0 {
            0.0
        } else {
            self.total_rounds as f64 / f64::from(self.games_played)
        }
    }
}

/// Results of a batch, one row per strategy label in first-seen order.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SimulationSummary {
    pub games: u32,
    pub strategies: Vec<StrategyStats>,
}

impl SimulationSummary {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Row for `label`, created on first use.
    pub fn entry(&mut self, label: &str) -> &mut StrategyStats {
        let idx = match self.strategies.iter().position(|s| s.label == label) {
            Some(idx) => idx,
            None => {
                self.strategies.push(StrategyStats::new(label));
                self.strategies.len() - 1
            }
        };
        &mut self.strategies[idx]
    }

    #[must_use]
    pub fn get(&self, label: &str) -> Option<&StrategyStats> {
        self.strategies.iter().find(|s| s.label == label)
    }

    /// JSON rendering with the derived rates included.
    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        let rows: Vec<_> = self
            .strategies
            .iter()
            .map(|s| {
                serde_json::json!({
                    "label": s.label,
                    "games_played": s.games_played,
                    "wins": s.wins,
                    "win_rate": s.win_rate(),
                    "avg_score": s.avg_score(),
                    "avg_rounds": s.avg_rounds(),
                })
            })
            .collect();
        serde_json::json!({ "games": self.games, "strategies": rows })
    }
}

impl fmt::Display for SimulationSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== Simulation Summary ({} games) ===", self.games)?;
        for s in &self.strategies {
            writeln!(
                f,
                "{:30} | Win Rate: {:>6.2}% | Avg Score: {:>6.1} | Avg Rounds: {:>5.2}",
                s.label,
                s.win_rate() * 100.0,
                s.avg_score(),
                s.avg_rounds()
            )?;
        }
        Ok(())
    }
}
