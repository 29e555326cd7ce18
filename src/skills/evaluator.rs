//! Skill set normalization, gap detection and profession ranking

use crate::skills::catalog::{Profession, ProfessionCatalog};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Lowercased, trimmed skill keywords declared by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillSet(BTreeSet<String>);

impl SkillSet {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn contains(&self, skill: &str) -> bool {
        self.0.contains(skill)
    }
}

impl<S: AsRef<str>> FromIterator<S> for SkillSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        SkillSet(
            iter.into_iter()
                .map(|s| s.as_ref().trim().to_lowercase())
                .filter(|s| !s.is_empty())
                .collect(),
        )
    }
}

/// Comma separated skills text plus the profession it is measured against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SkillProfile {
    pub known_skills: String,
    pub target_profession: Profession,
}

impl Default for SkillProfile {
    fn default() -> Self {
        Self {
            known_skills: String::new(),
            target_profession: Profession::AiEngineer,
        }
    }
}

impl SkillProfile {
    pub fn skills(&self) -> SkillSet {
        normalize_skills(&self.known_skills)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillMatch {
    pub profession: Profession,
    pub match_percent: u8,
    pub matched: Vec<String>,
    /// Required skills not declared by the user, in catalog order.
    pub missing: Vec<String>,
}

impl SkillMatch {
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }

    pub fn feedback(&self) -> String {
        if self.is_complete() {
            "You meet all core skill requirements.".to_string()
        } else {
            format!("Missing Skills: {}", self.missing.join(", "))
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfessionMatch {
    pub profession: Profession,
    pub percent: u8,
}

/// Split on commas, trim and lowercase each token. Blank tokens are dropped,
/// so empty or whitespace-only text yields an empty set.
pub fn normalize_skills(raw_text: &str) -> SkillSet {
    raw_text.split(',').collect()
}

/// Floor of `matched / required * 100`.
fn floor_percent(matched: usize, required: usize) -> u8 {
    if required == 0 {
        return 0;
    }
    (matched * 100 / required) as u8
}

pub fn evaluate_match(user_skills: &SkillSet, profession: Profession) -> SkillMatch {
    let required = ProfessionCatalog::required_skills(profession);

    let (matched, missing): (Vec<&str>, Vec<&str>) =
        required.iter().copied().partition(|skill| user_skills.contains(skill));

    SkillMatch {
        profession,
        match_percent: floor_percent(matched.len(), required.len()),
        matched: matched.into_iter().map(str::to_string).collect(),
        missing: missing.into_iter().map(str::to_string).collect(),
    }
}

/// Match percentage for every profession, highest first. `sort_by` is stable,
/// so equal percentages stay in catalog order.
pub fn rank_all_professions(user_skills: &SkillSet) -> Vec<ProfessionMatch> {
    let mut ranking: Vec<ProfessionMatch> = ProfessionCatalog::entries()
        .map(|(profession, required)| {
            let present = required.iter().filter(|s| user_skills.contains(s)).count();
            ProfessionMatch {
                profession,
                percent: floor_percent(present, required.len()),
            }
        })
        .collect();

    ranking.sort_by(|a, b| b.percent.cmp(&a.percent));
    ranking
}

/// Gap analysis for the profile's target, skipped when no skills were given.
pub fn evaluate_skill_gap(profile: &SkillProfile) -> Option<SkillMatch> {
    let skills = profile.skills();
    if skills.is_empty() {
        return None;
    }
    Some(evaluate_match(&skills, profile.target_profession))
}

pub fn rank_profile(profile: &SkillProfile) -> Option<Vec<ProfessionMatch>> {
    let skills = profile.skills();
    if skills.is_empty() {
        return None;
    }
    Some(rank_all_professions(&skills))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_skills() {
        let skills = normalize_skills(" Python ,GIT,  machine Learning ,, ");
        assert_eq!(skills.len(), 3);
        assert!(skills.contains("python"));
        assert!(skills.contains("git"));
        assert!(skills.contains("machine learning"));

        assert!(normalize_skills("").is_empty());
        assert!(normalize_skills("  ,  ").is_empty());
    }

    #[test]
    fn test_evaluate_match_ai_engineer() {
        let skills = normalize_skills("python, git");
        let result = evaluate_match(&skills, Profession::AiEngineer);

        assert_eq!(result.match_percent, 40);
        assert_eq!(result.missing, vec!["machine learning", "data structures", "math"]);
        assert_eq!(result.matched, vec!["python", "git"]);
        assert_eq!(
            result.feedback(),
            "Missing Skills: machine learning, data structures, math"
        );
    }

    #[test]
    fn test_evaluate_match_complete() {
        let skills =
            normalize_skills("design, figma, creativity, user research, prototyping, rust");
        let result = evaluate_match(&skills, Profession::UiUxDesigner);

        assert_eq!(result.match_percent, 100);
        assert!(result.is_complete());
        assert_eq!(result.feedback(), "You meet all core skill requirements.");
    }

    #[test]
    fn test_floor_percent_truncates() {
        assert_eq!(floor_percent(3, 5), 60);
        assert_eq!(floor_percent(1, 3), 33);
        assert_eq!(floor_percent(2, 3), 66);
        assert_eq!(floor_percent(0, 0), 0);
    }

    #[test]
    fn test_ranking_order_and_ties() {
        let skills = normalize_skills("python, git, java, problem solving");
        let ranking = rank_all_professions(&skills);

        let order: Vec<(Profession, u8)> =
            ranking.iter().map(|m| (m.profession, m.percent)).collect();
        assert_eq!(
            order,
            vec![
                (Profession::SoftwareDeveloper, 80),
                (Profession::AiEngineer, 40),
                (Profession::DataAnalyst, 20),
                (Profession::UiUxDesigner, 0),
                (Profession::Management, 0),
            ]
        );
    }

    #[test]
    fn test_ranking_all_zero_keeps_catalog_order() {
        let skills = normalize_skills("cooking");
        let ranking = rank_all_professions(&skills);
        let order: Vec<Profession> = ranking.iter().map(|m| m.profession).collect();
        assert_eq!(order, Profession::ALL.to_vec());
        assert!(ranking.iter().all(|m| m.percent == 0));
    }

    #[test]
    fn test_empty_profile_is_skipped() {
        let profile = SkillProfile {
            known_skills: "   ".to_string(),
            target_profession: Profession::Management,
        };
        assert!(evaluate_skill_gap(&profile).is_none());
        assert!(rank_profile(&profile).is_none());
    }

    #[test]
    fn test_profile_evaluation() {
        let profile = SkillProfile {
            known_skills: "SQL, Excel, python".to_string(),
            target_profession: Profession::DataAnalyst,
        };
        let result = evaluate_skill_gap(&profile).unwrap();
        assert_eq!(result.match_percent, 60);
        assert_eq!(result.missing, vec!["statistics", "visualization"]);
        assert_eq!(rank_profile(&profile).unwrap()[0].profession, Profession::DataAnalyst);
    }
}
