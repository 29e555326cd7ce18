//! Lifestyle growth score

use super::clamp_percent;
use serde::{Deserialize, Serialize};

const STUDY_WEIGHT: f64 = 10.0;
const SKILL_WEIGHT: f64 = 15.0;
const SLEEP_WEIGHT: f64 = 5.0;
const DISTRACTION_WEIGHT: f64 = 8.0;

/// Four 0-10 slider values describing a typical day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LifestyleInputs {
    pub study_hours: u8,
    pub skill_hours: u8,
    pub sleep_hours: u8,
    pub distraction_level: u8,
}

impl Default for LifestyleInputs {
    fn default() -> Self {
        Self {
            study_hours: 5,
            skill_hours: 4,
            sleep_hours: 7,
            distraction_level: 3,
        }
    }
}

/// Lifestyle growth probability in [0, 100].
///
/// `raw = study*10 + skill*15 + sleep*5 - distraction*8`, then `raw / 1.5`
/// clamped. The raw sum may be negative or exceed 150.
pub fn compute_lifestyle_score(study: u8, skill: u8, sleep: u8, distraction: u8) -> f64 {
    let raw = f64::from(study) * STUDY_WEIGHT
        + f64::from(skill) * SKILL_WEIGHT
        + f64::from(sleep) * SLEEP_WEIGHT
        - f64::from(distraction) * DISTRACTION_WEIGHT;
    clamp_percent(raw)
}

impl LifestyleInputs {
    pub fn new(study_hours: u8, skill_hours: u8, sleep_hours: u8, distraction_level: u8) -> Self {
        Self {
            study_hours,
            skill_hours,
            sleep_hours,
            distraction_level,
        }
    }

    pub fn score(&self) -> f64 {
        compute_lifestyle_score(
            self.study_hours,
            self.skill_hours,
            self.sleep_hours,
            self.distraction_level,
        )
    }

    /// Radar axes for the balance overview. Distraction is inverted into
    /// focus so that a larger area always means a healthier balance.
    pub fn balance_profile(&self) -> [(&'static str, u8); 4] {
        [
            ("Study", self.study_hours),
            ("Skill", self.skill_hours),
            ("Sleep", self.sleep_hours),
            ("Focus", 10u8.saturating_sub(self.distraction_level)),
        ]
    }

    /// Donut slices as shares of the slider total, in percent.
    pub fn distribution(&self) -> [(&'static str, f64); 4] {
        let values = [
            ("Study", self.study_hours),
            ("Skill", self.skill_hours),
            ("Sleep", self.sleep_hours),
            ("Distraction", self.distraction_level),
        ];
        let total: u32 = values.iter().map(|(_, v)| u32::from(*v)).sum();

        values.map(|(label, value)| {
            let share = if total == 0 {
                0.0
            } else {
                f64::from(value) / f64::from(total) * 100.0
            };
            (label, share)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_score() {
        let score = compute_lifestyle_score(5, 4, 7, 3);
        assert!((score - 80.6667).abs() < 0.001);
        assert_eq!(crate::scoring::display_percent(score), 81);
    }

    #[test]
    fn test_full_distraction_clamps_to_zero() {
        assert_eq!(compute_lifestyle_score(0, 0, 0, 10), 0.0);
    }

    #[test]
    fn test_maximum_clamps_to_hundred() {
        assert_eq!(compute_lifestyle_score(10, 10, 10, 0), 100.0);
    }

    #[test]
    fn test_score_always_in_range() {
        for study in 0..=10 {
            for skill in 0..=10 {
                for sleep in 0..=10 {
                    for distraction in 0..=10 {
                        let score = compute_lifestyle_score(study, skill, sleep, distraction);
                        assert!((0.0..=100.0).contains(&score));
                    }
                }
            }
        }
    }

    #[test]
    fn test_score_is_deterministic() {
        let inputs = LifestyleInputs::new(3, 8, 6, 2);
        assert_eq!(inputs.score(), inputs.score());
    }

    #[test]
    fn test_balance_profile_inverts_distraction() {
        let inputs = LifestyleInputs::new(5, 4, 7, 3);
        let profile = inputs.balance_profile();
        assert_eq!(profile[3], ("Focus", 7));
        assert_eq!(profile[0], ("Study", 5));
    }

    #[test]
    fn test_distribution_shares() {
        let inputs = LifestyleInputs::new(5, 5, 5, 5);
        for (_, share) in inputs.distribution() {
            assert!((share - 25.0).abs() < f64::EPSILON);
        }

        let empty = LifestyleInputs::new(0, 0, 0, 0);
        assert!(empty.distribution().iter().all(|(_, share)| *share == 0.0));
    }
}
