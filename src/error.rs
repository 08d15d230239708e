use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading editor settings
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read settings file {path}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse settings: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("Invalid setting `{field}`: {reason}")]
    InvalidValue {
        field: &'static str,
        reason: String,
    },
}

/// Top-level errors that abort the application
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The native window or its rendering context could not be created
    #[error("Failed to start display: {0}")]
    Display(#[from] eframe::Error),
}

/// Result type for application startup
pub type AppResult<T> = Result<T, AppError>;
