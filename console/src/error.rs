//! Error handling for the SITTA console

use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Configuration(#[from] config::ConfigError),

    #[error("Cannot read seed file {path}: {source}")]
    SeedIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    View(#[from] shared::Error),

    /// Input line could not be understood
    #[error("{0}")]
    Command(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    pub fn command(message: impl Into<String>) -> Self {
        AppError::Command(message.into())
    }
}

/// Result type alias for the console
pub type AppResult<T> = Result<T, AppError>;
