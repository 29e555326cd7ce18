//! Growth intel: lifestyle, career readiness and skill gap scoring

use chrono::Local;
use clap::Parser;
use growth_intel::cli::{Cli, Commands, ConfigAction, EvaluateArgs};
use growth_intel::config::Config;
use growth_intel::engine::AssessmentEngine;
use growth_intel::error::{GrowthIntelError, Result};
use growth_intel::output::formatter::{save_report_to_file, suggest_filename, ReportGenerator};
use growth_intel::output::pdf::write_report_pdf;
use growth_intel::skills::{normalize_skills, rank_all_professions, ProfessionCatalog};
use log::{error, info};
use std::process;

fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    };
    let config = match config {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run_command(cli.command, config) {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

fn run_command(command: Commands, config: Config) -> Result<()> {
    match command {
        Commands::Evaluate(args) => run_evaluate(args, &config)?,

        Commands::Rank { skills } => {
            let skill_set = normalize_skills(&skills);
            if skill_set.is_empty() {
                return Err(GrowthIntelError::InvalidInput(
                    "At least one skill is required for ranking".to_string(),
                ));
            }

            println!("Intelligent Profession Ranking\n");
            for (i, entry) in rank_all_professions(&skill_set).iter().enumerate() {
                println!("  {}. {} : {}% match", i + 1, entry.profession, entry.percent);
            }
        }

        Commands::Professions => {
            println!("Profession Catalog\n");
            for (profession, skills) in ProfessionCatalog::entries() {
                println!("  • {}", profession);
                println!("    {}", skills.join(", "));
            }
        }

        Commands::Config { action } => match action {
            Some(ConfigAction::Show) | None => {
                println!("Current Configuration\n");
                let d = &config.defaults;
                println!(
                    "Lifestyle defaults: study {}, skill {}, sleep {}, distraction {}",
                    d.study_hours, d.skill_hours, d.sleep_hours, d.distraction_level
                );
                println!(
                    "Career defaults: dedication {}, current skill {}, consistency {}",
                    d.dedication, d.current_skill, d.consistency
                );
                println!("Default target: {}", d.target_profession);
                println!("\nOutput format: {:?}", config.output.format);
                println!("Color output: {}", config.output.color_output);
                println!("Report directory: {}", config.output.report_dir.display());
            }

            Some(ConfigAction::Path) => {
                println!("{}", Config::config_path().display());
            }

            Some(ConfigAction::Reset) => {
                Config::default().save()?;
                println!("Configuration reset to defaults: {}", Config::config_path().display());
            }
        },
    }

    Ok(())
}

fn run_evaluate(args: EvaluateArgs, config: &Config) -> Result<()> {
    let request = args.build_request(config)?;
    let output_format = args.output_format(config)?;

    info!("Evaluating inputs for '{}'", request.user_id);
    let evaluation = AssessmentEngine::evaluate(&request);
    let report = evaluation.to_report(Local::now());

    let generator = ReportGenerator::with_options(
        config.output.color_output && args.save.is_none(),
        args.detailed || config.output.detailed,
        true,
        true,
    );
    let content = generator.generate(&evaluation, &report, output_format)?;

    match &args.save {
        Some(path) => {
            let path = if path.is_dir() {
                path.join(suggest_filename(output_format, &report.user_id))
            } else {
                path.clone()
            };
            save_report_to_file(&content, &path)?;
            println!("Saved output to {}", path.display());
        }
        None => println!("{}", content),
    }

    if args.pdf {
        let dir = args.out_dir.as_ref().unwrap_or(&config.output.report_dir);
        let path = write_report_pdf(&report, dir)?;
        println!("PDF report written to {}", path.display());
    }

    Ok(())
}
