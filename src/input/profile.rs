//! Partial assessment inputs layered on top of the configured defaults

use crate::engine::AssessmentRequest;
use crate::skills::Profession;
use serde::Deserialize;

/// Values read from a profile file or given as flags. Anything left `None`
/// keeps whatever the request already holds.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AssessmentProfile {
    pub user_id: Option<String>,
    pub lifestyle: LifestyleProfile,
    pub career: CareerProfile,
    pub skills: SkillsProfile,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LifestyleProfile {
    pub study_hours: Option<u8>,
    pub skill_hours: Option<u8>,
    pub sleep_hours: Option<u8>,
    pub distraction_level: Option<u8>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CareerProfile {
    pub dream_profession: Option<String>,
    pub dedication: Option<u8>,
    pub current_skill: Option<u8>,
    pub consistency: Option<u8>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SkillsProfile {
    pub known_skills: Option<String>,
    pub target_profession: Option<Profession>,
}

fn set<T: Clone>(target: &mut T, value: &Option<T>) {
    if let Some(value) = value {
        *target = value.clone();
    }
}

impl AssessmentProfile {
    pub fn apply_to(&self, request: &mut AssessmentRequest) {
        set(&mut request.user_id, &self.user_id);

        let lifestyle = &mut request.lifestyle;
        set(&mut lifestyle.study_hours, &self.lifestyle.study_hours);
        set(&mut lifestyle.skill_hours, &self.lifestyle.skill_hours);
        set(&mut lifestyle.sleep_hours, &self.lifestyle.sleep_hours);
        set(&mut lifestyle.distraction_level, &self.lifestyle.distraction_level);

        let career = &mut request.career;
        set(&mut career.dream_profession, &self.career.dream_profession);
        set(&mut career.dedication, &self.career.dedication);
        set(&mut career.current_skill, &self.career.current_skill);
        set(&mut career.consistency, &self.career.consistency);

        set(&mut request.skills.known_skills, &self.skills.known_skills);
        set(&mut request.skills.target_profession, &self.skills.target_profession);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::LifestyleInputs;

    #[test]
    fn test_empty_profile_changes_nothing() {
        let mut request = AssessmentRequest {
            user_id: "kim".to_string(),
            lifestyle: LifestyleInputs::new(0, 0, 0, 10),
            ..AssessmentRequest::default()
        };
        let before = request.clone();

        AssessmentProfile::default().apply_to(&mut request);
        assert_eq!(request, before);
    }

    #[test]
    fn test_profile_overrides_only_given_fields() {
        let mut request = AssessmentRequest {
            lifestyle: LifestyleInputs::new(0, 0, 0, 10),
            ..AssessmentRequest::default()
        };
        let profile = AssessmentProfile {
            lifestyle: LifestyleProfile {
                study_hours: Some(9),
                ..LifestyleProfile::default()
            },
            skills: SkillsProfile {
                target_profession: Some(Profession::Management),
                ..SkillsProfile::default()
            },
            ..AssessmentProfile::default()
        };

        profile.apply_to(&mut request);
        assert_eq!(request.lifestyle, LifestyleInputs::new(9, 0, 0, 10));
        assert_eq!(request.skills.target_profession, Profession::Management);
        assert_eq!(request.user_id, "");
    }
}
