//! Property frequency statistics.
//!
//! Counts how often each distinct (key, value) property pair occurs across
//! an owner's records and ranks the pairs by frequency. The scan order is
//! deterministic — owner-index order, then each record's current key
//! order — and the ranking sort is stable, so pairs with equal counts keep
//! their first-seen order.
//!
//! Statistics are recomputed from a full scan on every call; nothing is
//! stored between calls.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::model::OwnerId;
use crate::store::RecordStore;

/// One distinct (key, value) pair and how many records carry it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PairCount {
    pub key: String,
    pub value: String,
    pub count: u64,
}

/// Rank an owner's property pairs by occurrence count, descending.
///
/// `max_results == 0` means unlimited; otherwise the ranking is truncated
/// to the top `max_results` pairs.
pub fn run(store: &RecordStore, owner: OwnerId, max_results: usize) -> Vec<PairCount> {
    let mut counts: HashMap<(String, String), u64> = HashMap::new();
    let mut first_seen: Vec<(String, String)> = Vec::new();

    for &id in store.owner_records(owner) {
        for (key, value) in store.property_set(id).iter() {
            let pair = (key.to_string(), value.to_string());
            match counts.get_mut(&pair) {
                Some(count) => *count += 1,
                None => {
                    counts.insert(pair.clone(), 1);
                    first_seen.push(pair);
                }
            }
        }
    }

    let mut ranked: Vec<PairCount> = first_seen
        .into_iter()
        .map(|pair| {
            let count = counts.remove(&pair).unwrap_or(0);
            PairCount {
                key: pair.0,
                value: pair.1,
                count,
            }
        })
        .collect();

    // Stable sort: equal counts keep first-seen order.
    ranked.sort_by(|a, b| b.count.cmp(&a.count));
    if max_results > 0 && ranked.len() > max_results {
        ranked.truncate(max_results);
    }
    ranked
}

/// How many distinct (key, value) pairs exist across the owner's records.
/// Derived from a full ranking, not separately stored.
pub fn distinct_pairs(store: &RecordStore, owner: OwnerId) -> u64 {
    run(store, owner, 0).len() as u64
}
