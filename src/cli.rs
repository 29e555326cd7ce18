//! CLI interface for the growth intelligence tool

use crate::config::{Config, OutputFormat};
use crate::engine::AssessmentRequest;
use crate::error::{GrowthIntelError, Result};
use crate::input::manager::{validate_request, InputManager};
use crate::input::profile::{AssessmentProfile, CareerProfile, LifestyleProfile, SkillsProfile};
use crate::skills::{Profession, ProfessionCatalog};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "growth-intel")]
#[command(about = "Lifestyle, career readiness and skill gap intelligence")]
#[command(
    long_about = "Score lifestyle balance and career readiness, compare your skills against \
                  five professions, and export a PDF summary"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run a full evaluation
    Evaluate(EvaluateArgs),

    /// Rank all professions against a skills list
    Rank {
        /// Comma separated skills, e.g. "python, git, sql"
        #[arg(short, long)]
        skills: String,
    },

    /// List the profession catalog
    Professions,

    /// Show configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(clap::Args, Debug, Default)]
pub struct EvaluateArgs {
    /// Load inputs from a TOML or JSON profile; flags override its values
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// User ID, required for --pdf
    #[arg(short, long)]
    pub user_id: Option<String>,

    /// Study hours (0-10)
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=10))]
    pub study: Option<u8>,

    /// Skill development hours (0-10)
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=10))]
    pub skill_hours: Option<u8>,

    /// Sleep quality hours (0-10)
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=10))]
    pub sleep: Option<u8>,

    /// Distraction level (0-10)
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=10))]
    pub distraction: Option<u8>,

    /// Dream profession; career readiness is skipped when empty
    #[arg(long)]
    pub dream: Option<String>,

    /// Dedication level (0-10)
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=10))]
    pub dedication: Option<u8>,

    /// Current skill level (0-10)
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=10))]
    pub current_skill: Option<u8>,

    /// Consistency (0-10)
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=10))]
    pub consistency: Option<u8>,

    /// Comma separated skills; skill gap and ranking are skipped when empty
    #[arg(short, long)]
    pub skills: Option<String>,

    /// Target field for the skill gap
    #[arg(short, long, value_parser = parse_profession)]
    pub target: Option<Profession>,

    /// Output format: console, json, markdown, html
    #[arg(short, long)]
    pub output: Option<String>,

    /// Include balance and distribution breakdowns
    #[arg(short, long)]
    pub detailed: bool,

    /// Save formatted output to file
    #[arg(long)]
    pub save: Option<PathBuf>,

    /// Generate "{user_id}_Final_Report.pdf"
    #[arg(long)]
    pub pdf: bool,

    /// Directory for the PDF report
    #[arg(long)]
    pub out_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Print the configuration file location
    Path,

    /// Reset configuration to defaults
    Reset,
}

impl EvaluateArgs {
    /// Flag values as a partial profile, so they layer the same way a file does.
    pub fn to_profile(&self) -> AssessmentProfile {
        AssessmentProfile {
            user_id: self.user_id.clone(),
            lifestyle: LifestyleProfile {
                study_hours: self.study,
                skill_hours: self.skill_hours,
                sleep_hours: self.sleep,
                distraction_level: self.distraction,
            },
            career: CareerProfile {
                dream_profession: self.dream.clone(),
                dedication: self.dedication,
                current_skill: self.current_skill,
                consistency: self.consistency,
            },
            skills: SkillsProfile {
                known_skills: self.skills.clone(),
                target_profession: self.target,
            },
        }
    }

    /// Configured defaults, then the `--input` profile, then flags.
    ///
    /// `--pdf` without a non-empty user ID is rejected here, before any
    /// evaluation or file write happens.
    pub fn build_request(&self, config: &Config) -> Result<AssessmentRequest> {
        let mut request = match &self.input {
            Some(path) => InputManager::new().load_request(path, &config.defaults)?,
            None => AssessmentRequest::from_defaults(&config.defaults)?,
        };
        self.to_profile().apply_to(&mut request);
        validate_request(&request)?;

        if self.pdf && request.user_id.trim().is_empty() {
            return Err(GrowthIntelError::InvalidInput(
                "--pdf requires a non-empty --user-id".to_string(),
            ));
        }

        Ok(request)
    }

    pub fn output_format(&self, config: &Config) -> Result<OutputFormat> {
        match &self.output {
            Some(output) => parse_output_format(output).map_err(GrowthIntelError::InvalidInput),
            None => Ok(config.output.format),
        }
    }
}

/// Parse and validate output format
pub fn parse_output_format(format: &str) -> std::result::Result<OutputFormat, String> {
    match format.to_lowercase().as_str() {
        "console" => Ok(OutputFormat::Console),
        "json" => Ok(OutputFormat::Json),
        "markdown" | "md" => Ok(OutputFormat::Markdown),
        "html" => Ok(OutputFormat::Html),
        _ => Err(format!(
            "Invalid output format: {}. Supported: console, json, markdown, html",
            format
        )),
    }
}

/// Restrict the target to the enumerated catalog at parse time.
pub fn parse_profession(value: &str) -> std::result::Result<Profession, String> {
    ProfessionCatalog::lookup(value).map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use std::fs;
    use tempfile::tempdir;

    fn evaluate_args(args: &[&str]) -> EvaluateArgs {
        let mut argv = vec!["growth-intel", "evaluate"];
        argv.extend_from_slice(args);
        match Cli::try_parse_from(argv).unwrap().command {
            Commands::Evaluate(args) => args,
            _ => panic!("expected evaluate"),
        }
    }

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_output_format() {
        assert_eq!(parse_output_format("MD").unwrap(), OutputFormat::Markdown);
        assert!(parse_output_format("pdf").is_err());
    }

    #[test]
    fn test_slider_range_enforced() {
        let parsed = Cli::try_parse_from(["growth-intel", "evaluate", "--study", "11"]);
        assert!(parsed.is_err());

        let args = evaluate_args(&["--study", "10", "--target", "ui-ux-designer"]);
        assert_eq!(args.study, Some(10));
        assert_eq!(args.target, Some(Profession::UiUxDesigner));
    }

    #[test]
    fn test_unknown_target_rejected() {
        let parsed = Cli::try_parse_from(["growth-intel", "evaluate", "--target", "Astronaut"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_flags_override_profile_values() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("profile.toml");
        fs::write(
            &path,
            "user_id = \"from-file\"\n\n[lifestyle]\nstudy_hours = 2\nsleep_hours = 3\n\n\
             [skills]\nknown_skills = \"python\"\ntarget_profession = \"Data Analyst\"\n",
        )
        .unwrap();

        let input = path.to_str().unwrap();
        let args = evaluate_args(&["-i", input, "--study", "8", "--skills", "figma, design"]);
        let request = args.build_request(&Config::default()).unwrap();

        assert_eq!(request.user_id, "from-file");
        assert_eq!(request.lifestyle.study_hours, 8);
        assert_eq!(request.lifestyle.sleep_hours, 3);
        assert_eq!(request.lifestyle.distraction_level, 3);
        assert_eq!(request.skills.known_skills, "figma, design");
        assert_eq!(request.skills.target_profession, Profession::DataAnalyst);
    }

    #[test]
    fn test_flag_zero_overrides_configured_default() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("profile.json");
        fs::write(&path, r#"{"career": {"consistency": 4}}"#).unwrap();

        let mut config = Config::default();
        config.defaults.dedication = 10;
        let args = evaluate_args(&["-i", path.to_str().unwrap(), "--dedication", "0"]);
        let request = args.build_request(&config).unwrap();

        assert_eq!(request.career.dedication, 0);
        assert_eq!(request.career.consistency, 4);
    }

    #[test]
    fn test_pdf_requires_user_id_before_writing() {
        let dir = tempdir().unwrap();
        let out_dir = dir.path().to_str().unwrap();

        let args = evaluate_args(&["--pdf", "--user-id", "   ", "--out-dir", out_dir]);
        let result = args.build_request(&Config::default());

        assert!(matches!(
            result,
            Err(GrowthIntelError::InvalidInput(msg)) if msg.contains("--pdf")
        ));
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);

        let args = evaluate_args(&["--pdf", "--user-id", "sam"]);
        assert_eq!(args.build_request(&Config::default()).unwrap().user_id, "sam");
    }

    #[test]
    fn test_output_format_falls_back_to_config() {
        let mut config = Config::default();
        config.output.format = OutputFormat::Html;

        assert_eq!(evaluate_args(&[]).output_format(&config).unwrap(), OutputFormat::Html);
        let args = evaluate_args(&["-o", "json"]);
        assert_eq!(args.output_format(&config).unwrap(), OutputFormat::Json);
        let args = evaluate_args(&["-o", "pdf"]);
        assert!(matches!(args.output_format(&config), Err(GrowthIntelError::InvalidInput(_))));
    }
}
