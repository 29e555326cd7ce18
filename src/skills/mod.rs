//! Skill gap evaluation against the static profession catalog

pub mod catalog;
pub mod evaluator;

pub use catalog::{Profession, ProfessionCatalog};
pub use evaluator::{
    evaluate_match, evaluate_skill_gap, normalize_skills, rank_all_professions, rank_profile,
    ProfessionMatch, SkillMatch, SkillProfile, SkillSet,
};
