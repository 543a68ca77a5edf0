//! Hand scoring.

mod hand;

pub use hand::{
    distinct_numbers, duplicates, has_flip_seven, number_mask, score_hand, ScoreBreakdown,
    FLIP_SEVEN_BONUS, FLIP_SEVEN_COUNT,
};
