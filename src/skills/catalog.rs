//! Profession catalog: five job titles and their required skill keywords

use crate::error::{GrowthIntelError, Result};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use strsim::jaro_winkler;

/// Minimum Jaro-Winkler similarity before an unknown name gets a suggestion.
const SUGGESTION_THRESHOLD: f64 = 0.8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(try_from = "String")]
pub enum Profession {
    AiEngineer,
    SoftwareDeveloper,
    DataAnalyst,
    UiUxDesigner,
    Management,
}

impl Profession {
    /// Catalog declaration order. Ranking ties keep this order.
    pub const ALL: [Profession; 5] = [
        Profession::AiEngineer,
        Profession::SoftwareDeveloper,
        Profession::DataAnalyst,
        Profession::UiUxDesigner,
        Profession::Management,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Profession::AiEngineer => "AI Engineer",
            Profession::SoftwareDeveloper => "Software Developer",
            Profession::DataAnalyst => "Data Analyst",
            Profession::UiUxDesigner => "UI/UX Designer",
            Profession::Management => "Management",
        }
    }
}

impl fmt::Display for Profession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

impl Serialize for Profession {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.title())
    }
}

impl FromStr for Profession {
    type Err = GrowthIntelError;

    fn from_str(s: &str) -> Result<Self> {
        ProfessionCatalog::lookup(s)
    }
}

impl TryFrom<String> for Profession {
    type Error = GrowthIntelError;

    fn try_from(value: String) -> Result<Self> {
        ProfessionCatalog::lookup(&value)
    }
}

/// Read-only table mapping each profession to its five required skills.
pub struct ProfessionCatalog;

impl ProfessionCatalog {
    pub fn required_skills(profession: Profession) -> &'static [&'static str; 5] {
        match profession {
            Profession::AiEngineer => {
                &["python", "machine learning", "data structures", "math", "git"]
            }
            Profession::SoftwareDeveloper => {
                &["python", "java", "data structures", "git", "problem solving"]
            }
            Profession::DataAnalyst => &["python", "sql", "statistics", "excel", "visualization"],
            Profession::UiUxDesigner => {
                &["design", "figma", "creativity", "user research", "prototyping"]
            }
            Profession::Management => {
                &["communication", "leadership", "strategy", "planning", "decision making"]
            }
        }
    }

    pub fn entries() -> impl Iterator<Item = (Profession, &'static [&'static str; 5])> {
        Profession::ALL.into_iter().map(|p| (p, Self::required_skills(p)))
    }

    /// Resolve a user-supplied title. Case, `-`, `_` and `/` are ignored,
    /// so `ai-engineer` and `ui_ux_designer` resolve as well.
    pub fn lookup(name: &str) -> Result<Profession> {
        let key = Self::normalize_key(name);

        if let Some(profession) = Profession::ALL
            .into_iter()
            .find(|p| Self::normalize_key(p.title()) == key)
        {
            return Ok(profession);
        }

        let suggestion = Profession::ALL
            .into_iter()
            .map(|p| (p, jaro_winkler(&key, &Self::normalize_key(p.title()))))
            .filter(|(_, similarity)| *similarity >= SUGGESTION_THRESHOLD)
            .max_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(p, _)| p.title().to_string());

        Err(GrowthIntelError::UnknownProfession {
            name: name.trim().to_string(),
            suggestion,
        })
    }

    fn normalize_key(name: &str) -> String {
        name.to_lowercase()
            .replace(['-', '_', '/'], " ")
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_has_five_skills_each() {
        for (profession, skills) in ProfessionCatalog::entries() {
            assert_eq!(skills.len(), 5, "{}", profession);
            assert!(skills.iter().all(|s| *s == s.to_lowercase()));
        }
    }

    #[test]
    fn test_catalog_order() {
        let titles: Vec<&str> = Profession::ALL.iter().map(|p| p.title()).collect();
        assert_eq!(
            titles,
            vec![
                "AI Engineer",
                "Software Developer",
                "Data Analyst",
                "UI/UX Designer",
                "Management"
            ]
        );
    }

    #[test]
    fn test_lookup_exact_and_aliases() {
        assert_eq!(ProfessionCatalog::lookup("AI Engineer").unwrap(), Profession::AiEngineer);
        assert_eq!(ProfessionCatalog::lookup("ai-engineer").unwrap(), Profession::AiEngineer);
        assert_eq!(ProfessionCatalog::lookup("UI/UX Designer").unwrap(), Profession::UiUxDesigner);
        assert_eq!(ProfessionCatalog::lookup("ui_ux_designer").unwrap(), Profession::UiUxDesigner);
        assert_eq!("  management ".parse::<Profession>().unwrap(), Profession::Management);
    }

    #[test]
    fn test_lookup_unknown_with_suggestion() {
        match ProfessionCatalog::lookup("Data Analyts") {
            Err(GrowthIntelError::UnknownProfession { suggestion, .. }) => {
                assert_eq!(suggestion.as_deref(), Some("Data Analyst"));
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_lookup_unknown_without_suggestion() {
        match ProfessionCatalog::lookup("Astronaut") {
            Err(GrowthIntelError::UnknownProfession { name, suggestion }) => {
                assert_eq!(name, "Astronaut");
                assert!(suggestion.is_none());
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_serde_uses_titles() {
        let json = serde_json::to_string(&Profession::UiUxDesigner).unwrap();
        assert_eq!(json, "\"UI/UX Designer\"");

        let parsed: Profession = serde_json::from_str("\"software developer\"").unwrap();
        assert_eq!(parsed, Profession::SoftwareDeveloper);

        assert!(serde_json::from_str::<Profession>("\"Pilot\"").is_err());
    }
}
