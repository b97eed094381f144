//! Classification: validates a request, asks the scorer for tags, then sorts
//! and localizes the result.

use std::sync::Arc;

use crate::config::Config;
use crate::error::{ClassifyError, Result};
use crate::tagging::{create_scorer, ImageInput, ScoredTag, Scorer, TagCatalog};
use crate::types::{ClassifyRequest, ClassifyResponse, TagResult};

/// Answers classification requests against a fixed catalog.
///
/// Holds no mutable state; share it behind an `Arc` across requests.
pub struct Classifier {
    catalog: Arc<TagCatalog>,
    scorer: Box<dyn Scorer>,
    default_top_k: usize,
}

impl Classifier {
    pub fn new(catalog: Arc<TagCatalog>, scorer: Box<dyn Scorer>, default_top_k: usize) -> Self {
        Self {
            catalog,
            scorer,
            default_top_k,
        }
    }

    /// Load the catalog and build the configured scorer.
    ///
    /// Fails on invalid settings, or if the tag file is missing, malformed,
    /// empty, or has duplicates.
    pub fn from_config(config: &Config) -> Result<Self> {
        config.validate()?;
        let catalog = TagCatalog::load(&config.catalog_path())?;
        let scorer = create_scorer(&config.classify);
        Ok(Self::new(
            Arc::new(catalog),
            scorer,
            config.classify.default_top_k,
        ))
    }

    pub fn catalog(&self) -> &TagCatalog {
        &self.catalog
    }

    pub fn scorer_name(&self) -> &str {
        self.scorer.name()
    }

    /// Classify an image.
    ///
    /// `top_k` must lie in `1..=catalog.len()`; anything else is rejected
    /// rather than clamped.
    pub async fn classify(
        &self,
        request: &ClassifyRequest,
    ) -> std::result::Result<ClassifyResponse, ClassifyError> {
        let top_k = request.top_k.unwrap_or(self.default_top_k);
        let available = self.catalog.len();
        if top_k == 0 || top_k > available {
            return Err(ClassifyError::InvalidTopK {
                requested: top_k,
                available,
            });
        }

        tracing::debug!(top_k, scorer = self.scorer.name(), "Classifying image");

        let image = ImageInput::new(request.image_b64.as_str());
        let mut scored = self.scorer.score(&self.catalog, &image, top_k).await?;

        // Stable sort, highest first.
        scored.sort_by(|a, b| b.score.total_cmp(&a.score));

        let top_k = scored
            .into_iter()
            .map(|ScoredTag { tag, score }| -> std::result::Result<_, ClassifyError> {
                let tag_ja = self
                    .catalog
                    .localized(&tag)
                    .ok_or_else(|| {
                        ClassifyError::Scoring(format!("scorer returned unknown tag {tag:?}"))
                    })?
                    .to_string();
                Ok(TagResult { tag, tag_ja, score })
            })
            .collect::<std::result::Result<Vec<_>, ClassifyError>>()?;

        Ok(ClassifyResponse { top_k })
    }
}
