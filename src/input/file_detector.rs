//! Profile file format detection

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputFormat {
    Toml,
    Json,
    Unknown,
}

impl InputFormat {
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_lowercase().as_str() {
            "toml" => InputFormat::Toml,
            "json" => InputFormat::Json,
            _ => InputFormat::Unknown,
        }
    }
}
