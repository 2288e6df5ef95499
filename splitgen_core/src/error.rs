//! Error types for the splitgen_core library.

use std::io;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for splitgen_core operations
///
/// Plan generation itself never fails; these cover config and catalog
/// loading, validation, parsing and substitution lookups.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Catalog validation error
    #[error("Catalog validation error: {0}")]
    CatalogValidation(String),

    /// Unrecognized value for a taxonomy enum
    #[error("Parse error: {0}")]
    Parse(String),

    /// Session or exercise to substitute was not found
    #[error("Substitution error: {0}")]
    Substitution(String),

    /// Generic error
    #[error("{0}")]
    Other(String),
}
