//! Deduplicated record store with counting queries
//!
//! A hash set keyed by record identity (id + names, case-insensitive): adding
//! a record equal to one already present is a no-op, not an error. All
//! counting queries are linear scans over the full set — the census is a few
//! hundred thousand rows at most and queries are interactive-rate, so no
//! secondary indexes are kept.

use rustc_hash::FxHashSet;

use crate::model::{Borough, TreeRecord};
use crate::utils::text;

/// The deduplicated set of every ingested tree record.
#[derive(Debug, Default)]
pub struct TreeStore {
    items: FxHashSet<TreeRecord>,
}

impl TreeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of records.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Adds a record. Returns `false` when an equal record was already
    /// present (set semantics; the existing record stays).
    pub fn add(&mut self, record: TreeRecord) -> bool {
        self.items.insert(record)
    }

    /// Removes the record equal to `record`, if present.
    pub fn remove(&mut self, record: &TreeRecord) -> bool {
        self.items.remove(record)
    }

    pub fn contains(&self, record: &TreeRecord) -> bool {
        self.items.contains(record)
    }

    pub fn iter(&self) -> impl Iterator<Item = &TreeRecord> {
        self.items.iter()
    }

    /// Records whose common name equals `name`, case-insensitively.
    /// Exact match, not substring.
    pub fn count_by_common_name(&self, name: &str) -> usize {
        self.items
            .iter()
            .filter(|tree| text::eq_ignore_case(tree.common_name(), name))
            .count()
    }

    /// Records whose Latin name equals `name`, case-insensitively.
    /// Exact match, not substring.
    pub fn count_by_latin_name(&self, name: &str) -> usize {
        self.items
            .iter()
            .filter(|tree| text::eq_ignore_case(tree.latin_name(), name))
            .count()
    }

    /// Records located in exactly `borough`. `Borough::None` counts the rows
    /// that recorded no borough — it is a literal filter here, not "all".
    pub fn count_by_borough(&self, borough: Borough) -> usize {
        self.items
            .iter()
            .filter(|tree| tree.borough() == borough)
            .count()
    }

    /// Records matching `name` on the common name and located in `borough`.
    pub fn count_by_common_name_in_borough(&self, name: &str, borough: Borough) -> usize {
        self.items
            .iter()
            .filter(|tree| {
                tree.borough() == borough && text::eq_ignore_case(tree.common_name(), name)
            })
            .count()
    }

    /// Records matching `name` on the Latin name and located in `borough`.
    pub fn count_by_latin_name_in_borough(&self, name: &str, borough: Borough) -> usize {
        self.items
            .iter()
            .filter(|tree| {
                tree.borough() == borough && text::eq_ignore_case(tree.latin_name(), name)
            })
            .count()
    }
}

impl FromIterator<TreeRecord> for TreeStore {
    fn from_iter<I: IntoIterator<Item = TreeRecord>>(iter: I) -> Self {
        let mut store = TreeStore::new();
        for record in iter {
            store.add(record);
        }
        store
    }
}
