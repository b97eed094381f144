//! Error types for Cliptag.
//!
//! Startup errors (configuration, catalog) are fatal and collect under
//! [`CliptagError`]. Classification errors are per-request and surface to the
//! caller as rejected requests.

use std::path::PathBuf;
use thiserror::Error;

/// Startup error type for Cliptag.
#[derive(Error, Debug)]
pub enum CliptagError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Tag catalog errors
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the config file from disk
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    /// Failed to parse TOML configuration
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    /// Configuration values are invalid
    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

/// Errors raised while loading the tag catalog.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Tag file missing or unreadable
    #[error("Failed to read tag file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Tag file is not valid JSON of the expected shape
    #[error("Failed to parse tag file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The same English label appears more than once
    #[error("Duplicate tag label: {0:?}")]
    DuplicateLabel(String),

    /// No tags defined
    #[error("Tag catalog is empty")]
    Empty,
}

/// Per-request classification errors.
#[derive(Error, Debug)]
pub enum ClassifyError {
    /// `top_k` is zero or larger than the catalog
    #[error("top_k must be between 1 and {available}, got {requested}")]
    InvalidTopK { requested: usize, available: usize },

    /// The scorer backend failed
    #[error("Scoring failed: {0}")]
    Scoring(String),
}

/// Convenience type alias for Cliptag results.
pub type Result<T> = std::result::Result<T, CliptagError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_top_k_message() {
        let err = ClassifyError::InvalidTopK {
            requested: 5,
            available: 3,
        };
        assert_eq!(err.to_string(), "top_k must be between 1 and 3, got 5");
    }

    #[test]
    fn test_catalog_error_wraps_into_top_level() {
        let err: CliptagError = CatalogError::DuplicateLabel("cat".into()).into();
        assert!(err.to_string().contains("Duplicate tag label"));
        assert!(err.to_string().contains("cat"));
    }
}
