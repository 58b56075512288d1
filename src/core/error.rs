//! Error types and error handling for the search index loader.
//!
//! This module defines the error types used throughout the
//! library. Integer parsing errors live with the `strconv` module.

use thiserror::Error;

/// Result type alias for search index operations
pub type Result<T> = std::result::Result<T, IndexError>;

/// Main error type for loading and handling the search index
#[derive(Error, Debug)]
pub enum IndexError {
    #[error("Malformed search index: {0}")]
    MalformedIndex(String),

    #[error("Crate not found in search index: {0}")]
    CrateNotFound(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),
}

impl IndexError {
    /// Check if the index text itself was rejected
    pub fn is_malformed(&self) -> bool {
        matches!(self, IndexError::MalformedIndex(_))
    }

    /// Check if this is a "not found" type error
    pub fn is_not_found(&self) -> bool {
        matches!(self, IndexError::CrateNotFound(_))
    }
}
