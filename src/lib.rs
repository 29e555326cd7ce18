//! Future growth intelligence library

pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod input;
pub mod output;
pub mod scoring;
pub mod skills;

pub use config::Config;
pub use engine::{AssessmentEngine, AssessmentRequest, Evaluation};
pub use error::{GrowthIntelError, Result};
