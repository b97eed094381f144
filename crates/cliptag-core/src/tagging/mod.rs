//! Tag catalog and scoring.
//!
//! The catalog lists every tag a classifier may return; scorers pick tags
//! from it for an image.

pub mod catalog;
pub mod scorer;

pub use catalog::{TagCatalog, TagEntry};
pub use scorer::{create_scorer, ImageInput, MockScorer, ScoredTag, Scorer};
