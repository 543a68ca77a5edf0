//! Threshold strategies that look only at their own hand.

use super::{Decision, Strategy, TurnContext};

/// Default `stay_threshold` for [`Conservative`].
pub const DEFAULT_STAY_THRESHOLD: u32 = 40;

/// Default `safe_score` for [`Flip7Chaser`].
pub const DEFAULT_SAFE_SCORE: u32 = 50;

/// Distinct numbers at which [`Flip7Chaser`] stops caring about its score.
const CHASE_FROM: u32 = 5;

/// Always hits.
#[derive(Clone, Copy, Debug, Default)]
pub struct Aggressive;

impl Strategy for Aggressive {
    fn choose_action(&self, _ctx: &TurnContext<'_>) -> Decision {
        Decision::Hit
    }

    fn label(&self) -> String {
        "Aggressive".to_string()
    }
}

/// Stays once the round score reaches `stay_threshold`.
#[derive(Clone, Copy, Debug)]
pub struct Conservative {
    pub stay_threshold: u32,
}

impl Conservative {
    pub fn new(stay_threshold: u32) -> Self {
        Self { stay_threshold }
    }
}

impl Default for Conservative {
    fn default() -> Self {
        Self::new(DEFAULT_STAY_THRESHOLD)
    }
}

impl Strategy for Conservative {
    fn choose_action(&self, ctx: &TurnContext<'_>) -> Decision {
        if ctx.player.forced_flips > 0 {
            return Decision::Hit;
        }

        if ctx.player.round_score() >= self.stay_threshold {
            Decision::Stay
        } else {
            Decision::Hit
        }
    }

    fn label(&self) -> String {
        format!("Conservative(stay>={})", self.stay_threshold)
    }
}

/// Chases the Flip 7 bonus once five distinct numbers are showing,
/// otherwise stays at `safe_score`.
#[derive(Clone, Copy, Debug)]
pub struct Flip7Chaser {
    pub safe_score: u32,
}

impl Flip7Chaser {
    pub fn new(safe_score: u32) -> Self {
        Self { safe_score }
    }
}

impl Default for Flip7Chaser {
    fn default() -> Self {
        Self::new(DEFAULT_SAFE_SCORE)
    }
}

impl Strategy for Flip7Chaser {
    fn choose_action(&self, ctx: &TurnContext<'_>) -> Decision {
        let player = ctx.player;
        if player.forced_flips > 0 {
            return Decision::Hit;
        }

        if player.has_flip_seven() {
            return Decision::Stay;
        }
        if player.distinct_numbers() >= CHASE_FROM {
            return Decision::Hit;
        }
        if player.round_score() >= self.safe_score {
            return Decision::Stay;
        }
        Decision::Hit
    }

    fn label(&self) -> String {
        format!("Flip7Chaser(safe>={})", self.safe_score)
    }
}
