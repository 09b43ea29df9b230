//! Species identity and the deduplicated species index
//!
//! A species is identified by its (common name, Latin name) pair, compared
//! case-insensitively — "Red Maple"/"Acer rubrum" and "red maple"/
//! "ACER RUBRUM" are the same species however the surveyor typed them. The
//! index holds one key per distinct pair regardless of how many records share
//! it, and answers substring searches over either name.

use std::hash::{Hash, Hasher};

use rustc_hash::FxHashSet;

use crate::utils::text;

/// Case-insensitive (common name, Latin name) species identity.
#[derive(Debug, Clone)]
pub struct SpeciesKey {
    common_name: String,
    latin_name: String,
}

impl SpeciesKey {
    pub fn new(common_name: impl Into<String>, latin_name: impl Into<String>) -> Self {
        SpeciesKey {
            common_name: common_name.into(),
            latin_name: latin_name.into(),
        }
    }

    /// Common (English) name as first seen in the source data.
    pub fn common_name(&self) -> &str {
        &self.common_name
    }

    /// Scientific (Latin) name as first seen in the source data.
    pub fn latin_name(&self) -> &str {
        &self.latin_name
    }
}

impl PartialEq for SpeciesKey {
    fn eq(&self, other: &Self) -> bool {
        text::eq_ignore_case(&self.common_name, &other.common_name)
            && text::eq_ignore_case(&self.latin_name, &other.latin_name)
    }
}

impl Eq for SpeciesKey {}

impl Hash for SpeciesKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        text::hash_ignore_case(&self.common_name, state);
        text::hash_ignore_case(&self.latin_name, state);
    }
}

/// Deduplicated set of every species seen during ingestion.
///
/// Searches build fresh result vectors; the index itself is never mutated by
/// a query. The spelling that survives deduplication is the first one added.
#[derive(Debug, Default)]
pub struct SpeciesIndex {
    items: FxHashSet<SpeciesKey>,
}

impl SpeciesIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a species key. Returns `false` when an equal key (up to
    /// case) is already present, leaving the existing spelling in place.
    pub fn add(&mut self, key: SpeciesKey) -> bool {
        self.items.insert(key)
    }

    pub fn contains(&self, key: &SpeciesKey) -> bool {
        self.items.contains(key)
    }

    /// Number of distinct species.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SpeciesKey> {
        self.items.iter()
    }

    /// Every species whose common name contains `keyword` as a
    /// case-insensitive substring. The empty keyword matches all species.
    pub fn find_by_common_name(&self, keyword: &str) -> Vec<&SpeciesKey> {
        self.items
            .iter()
            .filter(|key| text::contains_ignore_case(&key.common_name, keyword))
            .collect()
    }

    /// Every species whose Latin name contains `keyword` as a
    /// case-insensitive substring. The empty keyword matches all species.
    pub fn find_by_latin_name(&self, keyword: &str) -> Vec<&SpeciesKey> {
        self.items
            .iter()
            .filter(|key| text::contains_ignore_case(&key.latin_name, keyword))
            .collect()
    }
}
