//! Property filtering.
//!
//! [`PropertyFilter`] expresses the key/value predicate applied to an
//! owner's records, and [`run`] evaluates it in two passes: build the full
//! match set in owner-index order, then hand it to the pagination engine.
//! The page window never changes which records match, only which slice of
//! the match set is returned.

use crate::error::Result;
use crate::model::{OwnerId, Record};
use crate::page::{paginate, Page};
use crate::store::properties::PropertySet;
use crate::store::RecordStore;

/// A key/value predicate over a record's properties.
///
/// Built from raw strings where the empty string means "unset":
///
/// - neither set: every record matches.
/// - key only: the key must exist, any value.
/// - value only: any property must carry that exact value.
/// - both: the key must exist and carry exactly that value.
///
/// Comparisons are case-sensitive and byte-exact.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropertyFilter {
    key: Option<String>,
    value: Option<String>,
}

impl PropertyFilter {
    pub fn new(key: &str, value: &str) -> Self {
        Self {
            key: (!key.is_empty()).then(|| key.to_string()),
            value: (!value.is_empty()).then(|| value.to_string()),
        }
    }

    /// True when the filter constrains nothing.
    pub fn is_match_all(&self) -> bool {
        self.key.is_none() && self.value.is_none()
    }

    pub fn matches(&self, properties: &PropertySet) -> bool {
        match (&self.key, &self.value) {
            (None, None) => true,
            (Some(key), None) => properties.contains(key),
            // First match per record wins; a record never matches twice
            // however many of its properties carry the value.
            (None, Some(value)) => properties.iter().any(|(_, v)| v == value),
            (Some(key), Some(value)) => properties.get(key) == Some(value.as_str()),
        }
    }
}

/// Filter an owner's records and return one page of matches.
pub fn run(
    store: &RecordStore,
    owner: OwnerId,
    filter: &PropertyFilter,
    offset: usize,
    limit: usize,
) -> Result<Page<Record>> {
    let matched: Vec<u64> = store
        .owner_records(owner)
        .iter()
        .copied()
        .filter(|&id| filter.matches(store.property_set(id)))
        .collect();

    let page = paginate(&matched, offset, limit)?;
    Ok(page.map(|id| store.record(id).clone()))
}
