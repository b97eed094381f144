//! Tag catalog loading.
//!
//! Reads the startup tag file (`{"tags": [{"en": ..., "ja": ...}]}`) into an
//! ordered list of tags plus an English-label index. The catalog is never
//! mutated after construction and is shared read-only across requests.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

/// A single tag with its English and localized labels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagEntry {
    /// English label, unique within the catalog
    #[serde(rename = "en")]
    pub english: String,
    /// Localized (Japanese) label
    #[serde(rename = "ja")]
    pub localized: String,
}

impl TagEntry {
    pub fn new(english: impl Into<String>, localized: impl Into<String>) -> Self {
        Self {
            english: english.into(),
            localized: localized.into(),
        }
    }
}

/// On-disk shape of the tag file.
#[derive(Debug, Deserialize)]
struct TagFile {
    tags: Vec<TagEntry>,
}

/// The full set of tags a classifier may return.
#[derive(Debug, Clone)]
pub struct TagCatalog {
    entries: Vec<TagEntry>,
    by_english: HashMap<String, usize>,
}

impl TagCatalog {
    /// Load the catalog from a JSON tag file.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path).map_err(|source| CatalogError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let file: TagFile =
            serde_json::from_str(&content).map_err(|source| CatalogError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        let catalog = Self::from_entries(file.tags)?;
        tracing::info!("Loaded tag catalog: {} tags from {:?}", catalog.len(), path);
        Ok(catalog)
    }

    /// Build a catalog from entries, rejecting duplicates and empty input.
    pub fn from_entries(entries: Vec<TagEntry>) -> Result<Self, CatalogError> {
        if entries.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut by_english = HashMap::with_capacity(entries.len());
        for (i, entry) in entries.iter().enumerate() {
            if by_english.insert(entry.english.clone(), i).is_some() {
                return Err(CatalogError::DuplicateLabel(entry.english.clone()));
            }
        }

        Ok(Self {
            entries,
            by_english,
        })
    }

    /// All entries in file order.
    pub fn entries(&self) -> &[TagEntry] {
        &self.entries
    }

    /// Number of tags in the catalog.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false for a constructed catalog.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up an entry by its English label.
    pub fn get(&self, english: &str) -> Option<&TagEntry> {
        self.by_english.get(english).map(|&i| &self.entries[i])
    }

    /// Localized label for an English label.
    pub fn localized(&self, english: &str) -> Option<&str> {
        self.get(english).map(|e| e.localized.as_str())
    }
}
