//! Wire types for the classification API.

use serde::{Deserialize, Serialize};

/// Body of `POST /classify`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifyRequest {
    /// Base64-encoded image. Accepted but never inspected.
    pub image_b64: String,

    /// Number of tags to return; the configured default applies when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_k: Option<usize>,
}

/// A single classification result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TagResult {
    /// English tag label
    pub tag: String,

    /// Localized (Japanese) tag label
    pub tag_ja: String,

    /// Confidence score
    pub score: f32,
}

/// Response of `POST /classify`, sorted by descending score.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifyResponse {
    pub top_k: Vec<TagResult>,
}

/// Response of `GET /`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusMessage {
    pub message: String,
}
