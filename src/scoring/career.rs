//! Career readiness score and banding

use super::clamp_percent;
use serde::{Deserialize, Serialize};
use std::fmt;

const DEDICATION_WEIGHT: f64 = 12.0;
const CURRENT_SKILL_WEIGHT: f64 = 15.0;
const CONSISTENCY_WEIGHT: f64 = 10.0;

const STRONG_THRESHOLD: f64 = 75.0;
const MODERATE_THRESHOLD: f64 = 45.0;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CareerInputs {
    pub dream_profession: String,
    pub dedication: u8,
    pub current_skill: u8,
    pub consistency: u8,
}

impl Default for CareerInputs {
    fn default() -> Self {
        Self {
            dream_profession: String::new(),
            dedication: 6,
            current_skill: 5,
            consistency: 6,
        }
    }
}

/// Career achievement probability in [0, 100].
pub fn compute_career_readiness(dedication: u8, current_skill: u8, consistency: u8) -> f64 {
    let raw = f64::from(dedication) * DEDICATION_WEIGHT
        + f64::from(current_skill) * CURRENT_SKILL_WEIGHT
        + f64::from(consistency) * CONSISTENCY_WEIGHT;
    clamp_percent(raw)
}

impl CareerInputs {
    pub fn has_goal(&self) -> bool {
        !self.dream_profession.trim().is_empty()
    }

    /// Readiness toward the dream profession, absent when no profession was named.
    pub fn readiness(&self) -> Option<f64> {
        self.has_goal().then(|| {
            compute_career_readiness(self.dedication, self.current_skill, self.consistency)
        })
    }
}

/// Coarse label derived from a readiness percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReadinessBand {
    Strong,
    Moderate,
    GapDetected,
}

impl ReadinessBand {
    /// Strict thresholds: exactly 75 is moderate, exactly 45 is a gap.
    pub fn from_score(score: f64) -> Self {
        if score > STRONG_THRESHOLD {
            ReadinessBand::Strong
        } else if score > MODERATE_THRESHOLD {
            ReadinessBand::Moderate
        } else {
            ReadinessBand::GapDetected
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ReadinessBand::Strong => "strong",
            ReadinessBand::Moderate => "moderate",
            ReadinessBand::GapDetected => "gap detected",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            ReadinessBand::Strong => "Strong alignment toward goal.",
            ReadinessBand::Moderate => "Moderate readiness. Increase expertise depth.",
            ReadinessBand::GapDetected => "Major capability gap detected.",
        }
    }
}

impl fmt::Display for ReadinessBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_readiness_clamped() {
        // raw = 72 + 75 + 60 = 207, 207 / 1.5 = 138
        assert_eq!(compute_career_readiness(6, 5, 6), 100.0);
    }

    #[test]
    fn test_unclamped_readiness() {
        // raw = 24 + 30 + 20 = 74
        let score = compute_career_readiness(2, 2, 2);
        assert!((score - 49.3333).abs() < 0.001);
        assert_eq!(compute_career_readiness(0, 0, 0), 0.0);
    }

    #[test]
    fn test_readiness_absent_without_goal() {
        let inputs = CareerInputs::default();
        assert!(inputs.readiness().is_none());

        let blank = CareerInputs {
            dream_profession: "   ".to_string(),
            ..CareerInputs::default()
        };
        assert!(blank.readiness().is_none());

        let with_goal = CareerInputs {
            dream_profession: "Data Scientist".to_string(),
            ..CareerInputs::default()
        };
        assert_eq!(with_goal.readiness(), Some(100.0));
    }

    #[test]
    fn test_band_boundaries() {
        assert_eq!(ReadinessBand::from_score(75.1), ReadinessBand::Strong);
        assert_eq!(ReadinessBand::from_score(75.0), ReadinessBand::Moderate);
        assert_eq!(ReadinessBand::from_score(45.1), ReadinessBand::Moderate);
        assert_eq!(ReadinessBand::from_score(45.0), ReadinessBand::GapDetected);
        assert_eq!(ReadinessBand::from_score(0.0), ReadinessBand::GapDetected);
    }

    #[test]
    fn test_band_text() {
        assert_eq!(ReadinessBand::GapDetected.to_string(), "gap detected");
        assert_eq!(ReadinessBand::Strong.message(), "Strong alignment toward goal.");
    }
}
