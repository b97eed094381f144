//! Cliptag Core - mock CLIP-style image tagging.
//!
//! Returns randomly sampled tags with fake confidence scores for an image,
//! standing in for a real zero-shot classifier until one is wired in.
//!
//! ```text
//! tags.json → TagCatalog ─┐
//!                         ├→ Classifier → sorted, localized tags
//!          Scorer (mock) ─┘
//! ```
//!
//! # Usage
//!
//! ```rust,ignore
//! use cliptag_core::{Classifier, ClassifyRequest, Config};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::load()?;
//!     let classifier = Classifier::from_config(&config)?;
//!
//!     let request = ClassifyRequest { image_b64: String::new(), top_k: Some(3) };
//!     let response = classifier.classify(&request).await?;
//!     println!("Tags: {:?}", response.top_k);
//!     Ok(())
//! }
//! ```

pub mod classify;
pub mod config;
pub mod error;
pub mod tagging;
pub mod types;

pub use classify::Classifier;
pub use config::Config;
pub use error::{CatalogError, ClassifyError, CliptagError, ConfigError, Result};
pub use tagging::{MockScorer, Scorer, TagCatalog, TagEntry};
pub use types::{ClassifyRequest, ClassifyResponse, StatusMessage, TagResult};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
