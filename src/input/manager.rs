//! Input manager for assessment profile files

use crate::config::DefaultsConfig;
use crate::engine::AssessmentRequest;
use crate::error::{GrowthIntelError, Result};
use crate::input::file_detector::InputFormat;
use crate::input::loader::{JsonProfileLoader, ProfileLoader, TomlProfileLoader};
use crate::input::profile::AssessmentProfile;
use log::info;
use std::path::Path;

/// Highest value any slider accepts.
pub const SLIDER_MAX: u8 = 10;

pub struct InputManager;

impl InputManager {
    pub fn new() -> Self {
        Self
    }

    pub fn load_profile(&self, path: &Path) -> Result<AssessmentProfile> {
        if !path.exists() {
            return Err(GrowthIntelError::InvalidInput(format!(
                "File does not exist: {}",
                path.display()
            )));
        }

        match self.detect_format(path)? {
            InputFormat::Toml => {
                info!("Reading TOML profile: {}", path.display());
                TomlProfileLoader.load(path)
            }
            InputFormat::Json => {
                info!("Reading JSON profile: {}", path.display());
                JsonProfileLoader.load(path)
            }
            InputFormat::Unknown => Err(GrowthIntelError::UnsupportedFormat(format!(
                "Unsupported profile type for: {}",
                path.display()
            ))),
        }
    }

    /// Configured defaults with the profile's values layered on top.
    pub fn load_request(
        &self,
        path: &Path,
        defaults: &DefaultsConfig,
    ) -> Result<AssessmentRequest> {
        let mut request = AssessmentRequest::from_defaults(defaults)?;
        self.load_profile(path)?.apply_to(&mut request);
        validate_request(&request)?;
        Ok(request)
    }

    fn detect_format(&self, path: &Path) -> Result<InputFormat> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .ok_or_else(|| {
                GrowthIntelError::InvalidInput(format!("File has no extension: {}", path.display()))
            })?;

        Ok(InputFormat::from_extension(extension))
    }
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Every slider must stay within `0..=10`.
pub fn validate_request(request: &AssessmentRequest) -> Result<()> {
    for (name, value) in request.sliders() {
        if value > SLIDER_MAX {
            return Err(GrowthIntelError::InvalidInput(format!(
                "{} must be between 0 and {}, got {}",
                name, SLIDER_MAX, value
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::scoring::LifestyleInputs;
    use crate::skills::Profession;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_validate_request_bounds() {
        let mut request = AssessmentRequest::default();
        assert!(validate_request(&request).is_ok());

        request.lifestyle = LifestyleInputs::new(11, 0, 0, 0);
        assert!(matches!(
            validate_request(&request),
            Err(GrowthIntelError::InvalidInput(msg)) if msg.contains("study_hours")
        ));
    }

    #[test]
    fn test_partial_profile_keeps_configured_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("profile.toml");
        fs::write(&path, "user_id = \"x\"\n").unwrap();

        let mut defaults = Config::default().defaults;
        defaults.study_hours = 0;
        defaults.skill_hours = 0;
        defaults.sleep_hours = 0;
        defaults.distraction_level = 10;
        defaults.dedication = 1;
        defaults.target_profession = "Management".to_string();

        let request = InputManager::new().load_request(&path, &defaults).unwrap();
        assert_eq!(request.user_id, "x");
        assert_eq!(request.lifestyle, LifestyleInputs::new(0, 0, 0, 10));
        assert_eq!(request.lifestyle.score(), 0.0);
        assert_eq!(request.career.dedication, 1);
        assert_eq!(request.skills.target_profession, Profession::Management);
    }

    #[test]
    fn test_profile_values_win_over_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("profile.json");
        fs::write(&path, r#"{"lifestyle": {"study_hours": 4}}"#).unwrap();

        let mut defaults = Config::default().defaults;
        defaults.study_hours = 9;
        defaults.sleep_hours = 2;

        let request = InputManager::new().load_request(&path, &defaults).unwrap();
        assert_eq!(request.lifestyle.study_hours, 4);
        assert_eq!(request.lifestyle.sleep_hours, 2);
    }
}
