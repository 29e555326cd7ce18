//! Report assembly and output formatting

pub mod report;
pub mod formatter;
pub mod pdf;
