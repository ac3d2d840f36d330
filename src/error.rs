//! Error types for Music Hub.

use thiserror::Error;

/// Common error type for Music Hub.
#[derive(Error, Debug)]
pub enum MusicHubError {
    /// Database error.
    ///
    /// Errors from sqlx are converted into this variant.
    #[error("database error: {0}")]
    Database(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Validation error for user input.
    #[error("{0}")]
    Validation(String),

    /// Resource not found.
    #[error("{0} not found")]
    NotFound(String),

    /// Access to a path outside the managed upload directory.
    #[error("forbidden: {0}")]
    Forbidden(String),

    /// The uploaded file could not be stored.
    #[error("storage error: {0}")]
    Storage(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

impl From<sqlx::Error> for MusicHubError {
    fn from(e: sqlx::Error) -> Self {
        MusicHubError::Database(e.to_string())
    }
}

/// Result type alias for Music Hub operations.
pub type Result<T> = std::result::Result<T, MusicHubError>;
