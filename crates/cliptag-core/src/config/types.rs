//! Sub-configuration structs with defaults matching the demo server.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// HTTP listener settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Interface to bind
    pub host: String,

    /// TCP port to bind
    pub port: u16,

    /// Largest accepted request body. Base64 photos run to several megabytes.
    pub max_body_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8001,
            max_body_bytes: 64 * 1024 * 1024,
        }
    }
}

/// Tag catalog settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Tag file path. Relative paths are looked up next to the executable
    /// first, then in the working directory.
    pub path: PathBuf,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("tags.json"),
        }
    }
}

/// Which scorer backend answers classification requests.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScorerKind {
    /// Random sampling with uniform random scores
    #[default]
    Mock,
}

impl std::fmt::Display for ScorerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Mock => write!(f, "mock"),
        }
    }
}


/// Classification settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifyConfig {
    /// Scorer backend
    pub scorer: ScorerKind,

    /// Number of tags returned when a request omits `top_k`
    pub default_top_k: usize,

    /// Lower bound (inclusive) of mock scores
    pub min_score: f32,

    /// Upper bound (exclusive) of mock scores
    pub max_score: f32,

    /// Fixed RNG seed for reproducible mock scores
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for ClassifyConfig {
    fn default() -> Self {
        Self {
            scorer: ScorerKind::Mock,
            default_top_k: 3,
            min_score: 0.3,
            max_score: 0.9,
            seed: None,
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level: error, warn, info, debug, trace
    pub level: String,

    /// Log format: "pretty" or "json"
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}
