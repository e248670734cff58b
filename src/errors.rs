//! Centralized error handling.
//!
//! Provides a unified error type for configuration loading and the
//! startup report.

use std::path::PathBuf;

use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    // Configuration
    #[error("Missing required configuration: {key}")]
    MissingRequiredConfiguration { key: String },

    #[error("Failed to read config file {}: {source}", .path.display())]
    ConfigFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // Input
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl AppError {
    /// Get error code for logs and exit reporting
    pub fn code(&self) -> &'static str {
        match self {
            AppError::MissingRequiredConfiguration { .. } => "MISSING_REQUIRED_CONFIGURATION",
            AppError::ConfigFile { .. } => "CONFIG_FILE_ERROR",
            AppError::InvalidArgument(_) => "INVALID_ARGUMENT",
        }
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Extension trait for Option -> AppError conversion
pub trait OptionExt<T> {
    fn ok_or_missing(self, key: &str) -> AppResult<T>;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_missing(self, key: &str) -> AppResult<T> {
        self.ok_or_else(|| AppError::missing(key))
    }
}

/// Convenience constructors
impl AppError {
    pub fn missing(key: impl Into<String>) -> Self {
        AppError::MissingRequiredConfiguration { key: key.into() }
    }

    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        AppError::InvalidArgument(msg.into())
    }

    pub fn config_file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        AppError::ConfigFile {
            path: path.into(),
            source,
        }
    }
}
