use std::io;
use thiserror::Error;

/// Application-wide error type, consolidating all possible errors into a single enum.
///
/// Only startup can fail: once the server is running, every failure mode is
/// rendered as plain response text instead of an error.
#[derive(Debug, Error)]
pub enum AppError {
    /// Represents standard input/output errors (e.g., an unreadable intent table file).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Represents data validation errors (e.g., malformed intent table JSON).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Represents configuration-related errors (e.g., an unparsable bind address).
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Validation(format!("JSON error: {}", err))
    }
}
