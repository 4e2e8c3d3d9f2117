//! Error types for versedial-reader
//!
//! Defines module-specific error types using thiserror for clear error
//! propagation. Only server-side failures are retryable; client errors and
//! malformed input surface immediately.

use thiserror::Error;

/// Main error type for the reader crate
#[derive(Error, Debug)]
pub enum Error {
    /// Network-level failure (connect, timeout, body read)
    #[error("Network error: {0}")]
    Network(String),

    /// Remote API returned a non-success status
    #[error("API returned status {status}")]
    Api { status: u16 },

    /// Response or input could not be parsed
    #[error("Parse error: {0}")]
    Parse(String),

    /// Malformed lookup query
    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    /// Local override file failed validation
    #[error("Invalid override file: {0}")]
    Override(String),

    /// File I/O errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Whether a retry with backoff may succeed.
    ///
    /// Network failures and 5xx responses are transient; 4xx responses and
    /// parse failures are not.
    pub fn is_retryable(&self) -> bool {
        match self {
            Error::Network(_) => true,
            Error::Api { status } => (500..600).contains(status),
            _ => false,
        }
    }
}

/// Convenience Result type using the reader Error
pub type Result<T> = std::result::Result<T, Error>;
