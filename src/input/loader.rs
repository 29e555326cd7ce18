//! Profile parsers for the supported file formats

use crate::error::{GrowthIntelError, Result};
use crate::input::profile::AssessmentProfile;
use std::fs;
use std::path::Path;

pub trait ProfileLoader {
    fn parse(&self, content: &str) -> Result<AssessmentProfile>;

    fn load(&self, path: &Path) -> Result<AssessmentProfile> {
        let content = fs::read_to_string(path)?;
        self.parse(&content)
    }
}

pub struct TomlProfileLoader;

impl ProfileLoader for TomlProfileLoader {
    fn parse(&self, content: &str) -> Result<AssessmentProfile> {
        toml::from_str(content).map_err(|e| {
            GrowthIntelError::InvalidInput(format!("Failed to parse TOML profile: {}", e))
        })
    }
}

pub struct JsonProfileLoader;

impl ProfileLoader for JsonProfileLoader {
    fn parse(&self, content: &str) -> Result<AssessmentProfile> {
        Ok(serde_json::from_str(content)?)
    }
}
