//! Error types for Lightbox
//!
//! Centralized error handling using thiserror.

use thiserror::Error;

/// Main error type for Lightbox
#[derive(Error, Debug)]
pub enum LightboxError {
    /// The persistence layer could not complete a read or write
    #[error("Storage error: {0}")]
    Storage(String),

    /// Persisted favorites data exists but could not be decoded
    #[error("Malformed favorites data: {0}")]
    Malformed(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for Lightbox
pub type Result<T> = std::result::Result<T, LightboxError>;
