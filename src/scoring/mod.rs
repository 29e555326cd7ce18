//! Weighted-sum score formulas for lifestyle and career readiness

pub mod lifestyle;
pub mod career;

pub use career::{compute_career_readiness, CareerInputs, ReadinessBand};
pub use lifestyle::{compute_lifestyle_score, LifestyleInputs};

/// Every formula divides its raw weighted sum by this before clamping.
pub const SCORE_DIVISOR: f64 = 1.5;

pub(crate) fn clamp_percent(raw: f64) -> f64 {
    (raw / SCORE_DIVISOR).clamp(0.0, 100.0)
}

/// Rounded percentage shown for lifestyle and career scores.
///
/// Uses ordinary rounding, unlike skill match percentages which are floored.
pub fn display_percent(score: f64) -> u8 {
    score.clamp(0.0, 100.0).round() as u8
}
