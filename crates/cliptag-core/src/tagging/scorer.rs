//! Scorer capability: picks tags for an image and assigns confidences.
//!
//! The HTTP surface and the classifier only see the [`Scorer`] trait, so the
//! random placeholder can be swapped for a real model without touching them.

use std::ops::Range;

use async_trait::async_trait;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::{ClassifyConfig, ScorerKind};
use crate::error::ClassifyError;

use super::catalog::TagCatalog;

/// Base64-encoded image as received from the client. Never decoded here.
#[derive(Debug, Clone)]
pub struct ImageInput {
    pub data: String,
}

impl ImageInput {
    pub fn new(data: impl Into<String>) -> Self {
        Self { data: data.into() }
    }
}

/// One tag chosen by a scorer. Not yet sorted or localized.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredTag {
    /// English label from the catalog
    pub tag: String,
    /// Confidence in `[0.0, 1.0)`
    pub score: f32,
}

/// Produces `top_k` distinct catalog tags with scores for an image.
///
/// Callers validate `top_k` against the catalog size before calling.
#[async_trait]
pub trait Scorer: Send + Sync {
    /// Short backend name for logs.
    fn name(&self) -> &str;

    async fn score(
        &self,
        catalog: &TagCatalog,
        image: &ImageInput,
        top_k: usize,
    ) -> Result<Vec<ScoredTag>, ClassifyError>;
}

/// Ignores the image: samples tags uniformly without replacement and draws
/// each score uniformly from a half-open range.
pub struct MockScorer {
    range: Range<f32>,
    seed: Option<u64>,
}

impl MockScorer {
    /// Scorer backed by the thread-local entropy source.
    pub fn new(range: Range<f32>) -> Self {
        Self { range, seed: None }
    }

    /// Scorer that returns the same result for every call with equal inputs.
    pub fn with_seed(range: Range<f32>, seed: u64) -> Self {
        Self {
            range,
            seed: Some(seed),
        }
    }

    fn sample<R: Rng + ?Sized>(
        &self,
        catalog: &TagCatalog,
        top_k: usize,
        rng: &mut R,
    ) -> Vec<ScoredTag> {
        let entries = catalog.entries();
        rand::seq::index::sample(rng, entries.len(), top_k)
            .into_iter()
            .map(|i| ScoredTag {
                tag: entries[i].english.clone(),
                score: rng.gen_range(self.range.clone()),
            })
            .collect()
    }
}

#[async_trait]
impl Scorer for MockScorer {
    fn name(&self) -> &str {
        "mock"
    }

    async fn score(
        &self,
        catalog: &TagCatalog,
        _image: &ImageInput,
        top_k: usize,
    ) -> Result<Vec<ScoredTag>, ClassifyError> {
        if top_k > catalog.len() {
            return Err(ClassifyError::InvalidTopK {
                requested: top_k,
                available: catalog.len(),
            });
        }

        let tags = match self.seed {
            Some(seed) => self.sample(catalog, top_k, &mut StdRng::seed_from_u64(seed)),
            None => self.sample(catalog, top_k, &mut rand::thread_rng()),
        };
        Ok(tags)
    }
}

/// Create the scorer selected by configuration.
pub fn create_scorer(config: &ClassifyConfig) -> Box<dyn Scorer> {
    let range = config.min_score..config.max_score;
    match config.scorer {
        ScorerKind::Mock => {
            tracing::debug!(
                "Using {} scorer (scores in [{}, {}), seed: {:?})",
                config.scorer,
                config.min_score,
                config.max_score,
                config.seed
            );
            match config.seed {
                Some(seed) => Box::new(MockScorer::with_seed(range, seed)),
                None => Box::new(MockScorer::new(range)),
            }
        }
    }
}
