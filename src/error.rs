//! Error handling for the growth intelligence tool

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GrowthIntelError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("File format not supported: {0}")]
    UnsupportedFormat(String),

    #[error("Unknown profession: {name}{}", suggestion_hint(.suggestion))]
    UnknownProfession {
        name: String,
        suggestion: Option<String>,
    },

    #[error("A user ID is required to generate a report document")]
    MissingUserId,

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("PDF rendering error: {0}")]
    PdfRendering(String),

    #[error("Output formatting error: {0}")]
    OutputFormatting(String),
}

pub type Result<T> = std::result::Result<T, GrowthIntelError>;

fn suggestion_hint(suggestion: &Option<String>) -> String {
    match suggestion {
        Some(s) => format!(" (did you mean '{}'?)", s),
        None => String::new(),
    }
}
