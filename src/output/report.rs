//! Flat report handed to the document renderer

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

pub const REPORT_TITLE: &str = "FUTURE GROWTH INTELLIGENCE REPORT";

/// Rendered in place of a metric that was never computed.
pub const NOT_AVAILABLE: &str = "N/A";

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub user_id: String,
    pub generated_at: DateTime<Local>,
    pub lifestyle_score: u8,
    pub career_readiness: Option<u8>,
    pub skill_match: Option<u8>,
}

pub fn build_report(
    user_id: &str,
    generated_at: DateTime<Local>,
    lifestyle_score: u8,
    career_readiness: Option<u8>,
    skill_match: Option<u8>,
) -> Report {
    Report {
        user_id: user_id.trim().to_string(),
        generated_at,
        lifestyle_score,
        career_readiness,
        skill_match,
    }
}

/// `"{userId}_Final_Report.pdf"`
pub fn report_file_name(user_id: &str) -> String {
    format!("{}_Final_Report.pdf", user_id.trim())
}

fn metric_value(value: Option<u8>) -> String {
    value
        .map(|v| format!("{}%", v))
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

impl Report {
    pub fn timestamp(&self) -> String {
        self.generated_at.format(TIMESTAMP_FORMAT).to_string()
    }

    pub fn user_line(&self) -> String {
        format!("User ID: {}", self.user_id)
    }

    pub fn date_line(&self) -> String {
        format!("Date: {}", self.timestamp())
    }

    pub fn metric_lines(&self) -> Vec<String> {
        vec![
            format!("Lifestyle Score: {}", metric_value(Some(self.lifestyle_score))),
            format!("Career Readiness: {}", metric_value(self.career_readiness)),
            format!("Skill Match: {}", metric_value(self.skill_match)),
        ]
    }

    pub fn file_name(&self) -> String {
        report_file_name(&self.user_id)
    }
}
