//! Configuration management for the growth intelligence tool

use crate::error::{GrowthIntelError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub defaults: DefaultsConfig,
    pub output: OutputConfig,
}

/// Starting values used when a slider is not given on the command line
/// or in a profile file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultsConfig {
    pub study_hours: u8,
    pub skill_hours: u8,
    pub sleep_hours: u8,
    pub distraction_level: u8,
    pub dedication: u8,
    pub current_skill: u8,
    pub consistency: u8,
    pub target_profession: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub detailed: bool,
    pub color_output: bool,
    pub report_dir: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    Console,
    Json,
    Markdown,
    Html,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            defaults: DefaultsConfig {
                study_hours: 5,
                skill_hours: 4,
                sleep_hours: 7,
                distraction_level: 3,
                dedication: 6,
                current_skill: 5,
                consistency: 6,
                target_profession: "AI Engineer".to_string(),
            },
            output: OutputConfig {
                format: OutputFormat::Console,
                detailed: false,
                color_output: true,
                report_dir: PathBuf::from("."),
            },
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            let config = Self::default();
            config.save()?;
            Ok(config)
        }
    }

    /// Load an explicit configuration file without falling back to defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content).map_err(|e| {
            GrowthIntelError::Configuration(format!("Failed to parse config: {}", e))
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self).map_err(|e| {
            GrowthIntelError::Configuration(format!("Failed to serialize config: {}", e))
        })?;

        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("growth-intel")
            .join("config.toml")
    }

    pub fn validate(&self) -> Result<()> {
        let d = &self.defaults;
        let sliders = [
            ("defaults.study_hours", d.study_hours),
            ("defaults.skill_hours", d.skill_hours),
            ("defaults.sleep_hours", d.sleep_hours),
            ("defaults.distraction_level", d.distraction_level),
            ("defaults.dedication", d.dedication),
            ("defaults.current_skill", d.current_skill),
            ("defaults.consistency", d.consistency),
        ];

        for (key, value) in sliders {
            if value > 10 {
                return Err(GrowthIntelError::Configuration(format!(
                    "{} must be between 0 and 10, got {}",
                    key, value
                )));
            }
        }

        Ok(())
    }
}
