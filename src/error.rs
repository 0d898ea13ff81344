use thiserror::Error;

/// Report generation error types
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Malformed council turn: {0}")]
    MalformedTurn(String),

    #[error("Render failure: {0}")]
    Render(String),

    #[error("A report is already being generated")]
    GenerationInProgress,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Transcript error: {0}")]
    Transcript(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Archive error: {0}")]
    Archive(#[from] zip::result::ZipError),
}

/// Result type for report operations
pub type Result<T> = std::result::Result<T, ReportError>;
