//! Input processing module
//! Loads assessment profiles from TOML or JSON files

pub mod file_detector;
pub mod loader;
pub mod manager;
pub mod profile;
