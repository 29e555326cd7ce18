//! Assessment engine: runs one full evaluation pass over a request

use crate::config::DefaultsConfig;
use crate::error::Result;
use crate::output::report::{build_report, Report};
use crate::scoring::{display_percent, CareerInputs, LifestyleInputs, ReadinessBand};
use crate::skills::{evaluate_skill_gap, rank_profile, ProfessionMatch, SkillMatch, SkillProfile};
use chrono::{DateTime, Local};
use log::debug;
use serde::{Deserialize, Serialize};

/// Everything a user entered for one evaluation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssessmentRequest {
    pub user_id: String,
    pub lifestyle: LifestyleInputs,
    pub career: CareerInputs,
    pub skills: SkillProfile,
}

impl AssessmentRequest {
    /// Request seeded with the configured slider defaults.
    pub fn from_defaults(defaults: &DefaultsConfig) -> Result<Self> {
        Ok(Self {
            user_id: String::new(),
            lifestyle: LifestyleInputs::new(
                defaults.study_hours,
                defaults.skill_hours,
                defaults.sleep_hours,
                defaults.distraction_level,
            ),
            career: CareerInputs {
                dream_profession: String::new(),
                dedication: defaults.dedication,
                current_skill: defaults.current_skill,
                consistency: defaults.consistency,
            },
            skills: SkillProfile {
                known_skills: String::new(),
                target_profession: defaults.target_profession.parse()?,
            },
        })
    }

    pub fn sliders(&self) -> [(&'static str, u8); 7] {
        [
            ("study_hours", self.lifestyle.study_hours),
            ("skill_hours", self.lifestyle.skill_hours),
            ("sleep_hours", self.lifestyle.sleep_hours),
            ("distraction_level", self.lifestyle.distraction_level),
            ("dedication", self.career.dedication),
            ("current_skill", self.career.current_skill),
            ("consistency", self.career.consistency),
        ]
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LifestyleResult {
    pub inputs: LifestyleInputs,
    pub score: f64,
    pub percent: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CareerResult {
    pub dream_profession: String,
    pub readiness: f64,
    pub percent: u8,
    pub band: ReadinessBand,
}

/// Outcome of one pass. Optional sections are `None` when their input was
/// left empty, which is different from a computed zero.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Evaluation {
    pub user_id: String,
    pub lifestyle: LifestyleResult,
    pub career: Option<CareerResult>,
    pub skill_gap: Option<SkillMatch>,
    pub ranking: Option<Vec<ProfessionMatch>>,
}

impl Evaluation {
    pub fn to_report(&self, generated_at: DateTime<Local>) -> Report {
        build_report(
            &self.user_id,
            generated_at,
            self.lifestyle.percent,
            self.career.as_ref().map(|c| c.percent),
            self.skill_gap.as_ref().map(|s| s.match_percent),
        )
    }
}

pub struct AssessmentEngine;

impl AssessmentEngine {
    pub fn evaluate(request: &AssessmentRequest) -> Evaluation {
        let score = request.lifestyle.score();
        debug!("Lifestyle score {:.2} for {:?}", score, request.lifestyle);

        let lifestyle = LifestyleResult {
            inputs: request.lifestyle,
            score,
            percent: display_percent(score),
        };

        let career = request.career.readiness().map(|readiness| CareerResult {
            dream_profession: request.career.dream_profession.trim().to_string(),
            readiness,
            percent: display_percent(readiness),
            band: ReadinessBand::from_score(readiness),
        });
        match &career {
            Some(c) => debug!("Career readiness {:.2} ({})", c.readiness, c.band),
            None => debug!("No dream profession given, career readiness skipped"),
        }

        let skill_gap = evaluate_skill_gap(&request.skills);
        let ranking = rank_profile(&request.skills);
        match &skill_gap {
            Some(gap) => debug!(
                "Skill match {}% for {}, {} missing",
                gap.match_percent,
                gap.profession,
                gap.missing.len()
            ),
            None => debug!("No skills given, skill gap and ranking skipped"),
        }

        Evaluation {
            user_id: request.user_id.trim().to_string(),
            lifestyle,
            career,
            skill_gap,
            ranking,
        }
    }
}
