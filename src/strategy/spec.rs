//! Text specs for strategies and seats.
//!
//! Strategy specs are `name[=param]`:
//!
//! | name | param |
//! |---|---|
//! | `aggressive`, `agg` | none |
//! | `conservative`, `cons` | stay threshold, default 40 |
//! | `flip7`, `flip7chaser`, `chaser` | safe score, default 50 |
//! | `perfect`, `perf` | none |
//! | `human` | none |
//!
//! Player specs are `Name:strategy`.
//!
//! ```
//! use flip7::strategy::{PlayerSpec, StrategySpec};
//!
//! let seat: PlayerSpec = "Bob:cons=35".parse().unwrap();
//! assert_eq!(seat.name, "Bob");
//! assert_eq!(seat.strategy, StrategySpec::Conservative { stay_threshold: 35 });
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::basic::{DEFAULT_SAFE_SCORE, DEFAULT_STAY_THRESHOLD};
use super::{Aggressive, Conservative, Flip7Chaser, Human, Perfect, Strategy};
use crate::error::{Flip7Error, Result};

/// Parsed strategy spec.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrategySpec {
    Aggressive,
    Conservative { stay_threshold: u32 },
    Flip7Chaser { safe_score: u32 },
    Perfect,
    Human,
}

impl StrategySpec {
    /// Instantiate the strategy.
    #[must_use]
    pub fn build(self) -> Box<dyn Strategy> {
        match self {
            StrategySpec::Aggressive => Box::new(Aggressive),
            StrategySpec::Conservative { stay_threshold } => Box::new(Conservative::new(stay_threshold)),
            StrategySpec::Flip7Chaser { safe_score } => Box::new(Flip7Chaser::new(safe_score)),
            StrategySpec::Perfect => Box::new(Perfect),
            StrategySpec::Human => Box::new(Human::stdio()),
        }
    }

    /// Whether the strategy blocks on a person.
    #[must_use]
    pub fn is_interactive(self) -> bool {
        matches!(self, StrategySpec::Human)
    }
}

fn parse_param(strategy: &str, param: Option<&str>, default: u32) -> Result<u32> {
    match param {
        None | Some("") => Ok(default),
        Some(raw) => raw.trim().parse().map_err(|_| Flip7Error::InvalidParameter {
            strategy: strategy.to_string(),
            value: raw.to_string(),
        }),
    }
}

impl FromStr for StrategySpec {
    type Err = Flip7Error;

    fn from_str(s: &str) -> Result<Self> {
        let spec = s.trim().to_ascii_lowercase();
        let (base, param) = match spec.split_once('=') {
            Some((base, param)) => (base, Some(param)),
            None => (spec.as_str(), None),
        };

        match base {
            "aggressive" | "agg" => Ok(StrategySpec::Aggressive),
            "conservative" | "cons" => Ok(StrategySpec::Conservative {
                stay_threshold: parse_param(base, param, DEFAULT_STAY_THRESHOLD)?,
            }),
            "flip7" | "flip7chaser" | "chaser" => Ok(StrategySpec::Flip7Chaser {
                safe_score: parse_param(base, param, DEFAULT_SAFE_SCORE)?,
            }),
            "perfect" | "perf" => Ok(StrategySpec::Perfect),
            "human" => Ok(StrategySpec::Human),
            _ => Err(Flip7Error::UnknownStrategy(s.to_string())),
        }
    }
}

impl fmt::Display for StrategySpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StrategySpec::Aggressive => write!(f, "aggressive"),
            StrategySpec::Conservative { stay_threshold } => write!(f, "conservative={stay_threshold}"),
            StrategySpec::Flip7Chaser { safe_score } => write!(f, "flip7={safe_score}"),
            StrategySpec::Perfect => write!(f, "perfect"),
            StrategySpec::Human => write!(f, "human"),
        }
    }
}

/// One seat: a unique name and its strategy.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSpec {
    pub name: String,
    pub strategy: StrategySpec,
}

impl PlayerSpec {
    pub fn new(name: impl Into<String>, strategy: StrategySpec) -> Self {
        Self {
            name: name.into(),
            strategy,
        }
    }
}

impl FromStr for PlayerSpec {
    type Err = Flip7Error;

    fn from_str(s: &str) -> Result<Self> {
        let (name, strategy) = s
            .split_once(':')
            .ok_or_else(|| Flip7Error::MalformedPlayerSpec(s.to_string()))?;

        let name = name.trim();
        if name.is_empty() {
            return Err(Flip7Error::MalformedPlayerSpec(s.to_string()));
        }

        Ok(Self::new(name, strategy.parse()?))
    }
}

impl fmt::Display for PlayerSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.name, self.strategy)
    }
}

/// Eight-seat table used when no players are given.
#[must_use]
pub fn default_roster() -> Vec<PlayerSpec> {
    let chaser = |safe_score| StrategySpec::Flip7Chaser { safe_score };
    let cons = |stay_threshold| StrategySpec::Conservative { stay_threshold };

    vec![
        PlayerSpec::new("Alice", chaser(DEFAULT_SAFE_SCORE)),
        PlayerSpec::new("Bob", cons(35)),
        PlayerSpec::new("Charlie", StrategySpec::Aggressive),
        PlayerSpec::new("Diana", chaser(45)),
        PlayerSpec::new("Eugene", cons(30)),
        PlayerSpec::new("Frank", cons(27)),
        PlayerSpec::new("Georgina", StrategySpec::Aggressive),
        PlayerSpec::new("Pat", StrategySpec::Perfect),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_aliases() {
        assert_eq!("agg".parse::<StrategySpec>().unwrap(), StrategySpec::Aggressive);
        assert_eq!("Aggressive".parse::<StrategySpec>().unwrap(), StrategySpec::Aggressive);
        assert_eq!("perf".parse::<StrategySpec>().unwrap(), StrategySpec::Perfect);
        assert_eq!("chaser".parse::<StrategySpec>().unwrap(), StrategySpec::Flip7Chaser { safe_score: 50 });
        assert_eq!(
            "flip7chaser=60".parse::<StrategySpec>().unwrap(),
            StrategySpec::Flip7Chaser { safe_score: 60 }
        );
    }

    #[test]
    fn test_parse_defaults() {
        assert_eq!(
            "conservative".parse::<StrategySpec>().unwrap(),
            StrategySpec::Conservative { stay_threshold: 40 }
        );
        assert_eq!("cons=".parse::<StrategySpec>().unwrap(), StrategySpec::Conservative { stay_threshold: 40 });
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            "bogus".parse::<StrategySpec>(),
            Err(Flip7Error::UnknownStrategy("bogus".to_string()))
        );
        assert!(matches!(
            "cons=abc".parse::<StrategySpec>(),
            Err(Flip7Error::InvalidParameter { .. })
        ));
        assert!(matches!("cons=-5".parse::<StrategySpec>(), Err(Flip7Error::InvalidParameter { .. })));
    }

    #[test]
    fn test_display_round_trips() {
        for spec in ["agg", "cons=35", "flip7=45", "perfect", "human"] {
            let parsed: StrategySpec = spec.parse().unwrap();
            assert_eq!(parsed.to_string().parse::<StrategySpec>().unwrap(), parsed);
        }
    }

    #[test]
    fn test_player_spec() {
        let seat: PlayerSpec = "Diana:flip7=45".parse().unwrap();
        assert_eq!(seat, PlayerSpec::new("Diana", StrategySpec::Flip7Chaser { safe_score: 45 }));
        assert_eq!(seat.to_string(), "Diana:flip7=45");

        assert_eq!(
            "Diana".parse::<PlayerSpec>(),
            Err(Flip7Error::MalformedPlayerSpec("Diana".to_string()))
        );
        assert!(matches!(":agg".parse::<PlayerSpec>(), Err(Flip7Error::MalformedPlayerSpec(_))));
        assert!(matches!("Eve:nope".parse::<PlayerSpec>(), Err(Flip7Error::UnknownStrategy(_))));
    }

    #[test]
    fn test_build_labels() {
        assert_eq!(StrategySpec::Aggressive.build().label(), "Aggressive");
        assert_eq!(
            StrategySpec::Conservative { stay_threshold: 27 }.build().label(),
            "Conservative(stay>=27)"
        );
        assert_eq!(StrategySpec::Perfect.build().label(), "Perfect");
    }

    #[test]
    fn test_default_roster() {
        let roster = default_roster();
        assert_eq!(roster.len(), 8);
        assert_eq!(roster[7].strategy, StrategySpec::Perfect);
        assert!(roster.iter().all(|seat| !seat.strategy.is_interactive()));
    }
}
