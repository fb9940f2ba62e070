//! Error types for cocktail-search
//!
//! Cache lookups, stores and query parsing are total and never produce these.
//! Errors only come from configuration validation and from the external
//! loaders plugged into read-through lookups.

use thiserror::Error;

/// Main error type for cocktail-search
#[derive(Error, Debug, Clone)]
pub enum CacheError {
    /// Configuration rejected at construction
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// An external loader (the remote API client) failed
    #[error("loader error: {0}")]
    Loader(String),

    /// Serialization failed
    #[error("serialization error: {0}")]
    Serialization(String),
}

impl CacheError {
    /// Wrap any displayable loader failure
    pub fn loader(err: impl std::fmt::Display) -> Self {
        CacheError::Loader(err.to_string())
    }
}

impl From<serde_json::Error> for CacheError {
    fn from(err: serde_json::Error) -> Self {
        CacheError::Serialization(err.to_string())
    }
}

/// Result type alias for cocktail-search operations
pub type Result<T> = std::result::Result<T, CacheError>;
