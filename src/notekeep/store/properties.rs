//! # Property Index
//!
//! Each record carries a [`PropertySet`]: a bounded dictionary of key →
//! value annotations with an ordered key list. The set keeps two views of
//! the same data and they must never disagree:
//!
//! - `order`: the key list, in *current* order. Key removal uses
//!   swap-remove, so this order is not stable across deletions.
//! - `slots`: key → (value, position). `position` is the key's current
//!   index in `order`.
//!
//! Invariants: a key is in `slots` iff it is in `order`, and
//! `slots[k].position == order.index_of(k)` at all times. Removal is O(1)
//! regardless of how many keys the set holds: the last key is moved into
//! the vacated slot and only that one moved key has its position rewritten.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::model::MAX_PROPERTIES;

#[derive(Debug, Clone, Serialize, Deserialize)]
struct PropertySlot {
    value: String,
    position: usize,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PropertySet {
    order: Vec<String>,
    slots: HashMap<String, PropertySlot>,
}

impl PropertySet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.slots.contains_key(key)
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.slots.get(key).map(|slot| slot.value.as_str())
    }

    /// Keys in current order. Not insertion order once any key has been
    /// removed.
    pub fn keys(&self) -> &[String] {
        &self.order
    }

    /// (key, value) pairs in current key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.order.iter().map(|key| {
            let value = self
                .slots
                .get(key)
                .map(|slot| slot.value.as_str())
                .unwrap_or_default();
            (key.as_str(), value)
        })
    }

    /// Insert or overwrite a key.
    ///
    /// Overwriting an existing key never changes the key order. Returns
    /// `false` (without mutating) when the key is new and the set is
    /// already at capacity.
    #[must_use]
    pub fn set(&mut self, key: &str, value: String) -> bool {
        if let Some(slot) = self.slots.get_mut(key) {
            slot.value = value;
            return true;
        }
        if self.order.len() >= MAX_PROPERTIES {
            return false;
        }
        let position = self.order.len();
        self.order.push(key.to_string());
        self.slots.insert(key.to_string(), PropertySlot { value, position });
        true
    }

    /// Remove a key via swap-remove. Returns `false` when absent.
    pub fn remove(&mut self, key: &str) -> bool {
        let Some(slot) = self.slots.remove(key) else {
            return false;
        };
        self.order.swap_remove(slot.position);
        // The previously-last key now occupies the vacated slot; its
        // recorded position must follow.
        if let Some(moved_key) = self.order.get(slot.position) {
            if let Some(moved) = self.slots.get_mut(moved_key.as_str()) {
                moved.position = slot.position;
            }
        }
        true
    }

    pub fn clear(&mut self) {
        self.order.clear();
        self.slots.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set_of(pairs: &[(&str, &str)]) -> PropertySet {
        let mut props = PropertySet::new();
        for (key, value) in pairs {
            assert!(props.set(key, value.to_string()));
        }
        props
    }

    /// Every key's recorded position matches its index in the key order.
    fn assert_consistent(props: &PropertySet) {
        assert_eq!(props.order.len(), props.slots.len());
        for (index, key) in props.order.iter().enumerate() {
            assert_eq!(props.slots[key].position, index, "key {key}");
        }
    }

    #[test]
    fn set_and_get_roundtrip() {
        let props = set_of(&[("priority", "high")]);
        assert_eq!(props.get("priority"), Some("high"));
        assert_eq!(props.get("missing"), None);
        assert_consistent(&props);
    }

    #[test]
    fn overwrite_keeps_order_and_length() {
        let mut props = set_of(&[("a", "1"), ("b", "2"), ("c", "3")]);
        assert!(props.set("b", "20".to_string()));
        assert_eq!(props.len(), 3);
        assert_eq!(props.keys(), &["a", "b", "c"]);
        assert_eq!(props.get("b"), Some("20"));
        assert_consistent(&props);
    }

    #[test]
    fn capacity_rejects_33rd_key_but_allows_overwrite() {
        let mut props = PropertySet::new();
        for i in 0..MAX_PROPERTIES {
            assert!(props.set(&format!("k{i}"), "v".to_string()));
        }
        assert!(!props.set("k32", "v".to_string()));
        assert_eq!(props.len(), MAX_PROPERTIES);
        // Re-setting an existing key at capacity still succeeds.
        assert!(props.set("k0", "v2".to_string()));
        assert_eq!(props.get("k0"), Some("v2"));
        assert_consistent(&props);
    }

    #[test]
    fn remove_middle_key_swaps_last_into_slot() {
        let mut props = set_of(&[("a", "1"), ("b", "2"), ("c", "3"), ("d", "4")]);
        assert!(props.remove("b"));
        assert_eq!(props.keys(), &["a", "d", "c"]);
        assert_eq!(props.get("d"), Some("4"));
        assert!(!props.contains("b"));
        assert_consistent(&props);
    }

    #[test]
    fn remove_last_key_needs_no_swap() {
        let mut props = set_of(&[("a", "1"), ("b", "2")]);
        assert!(props.remove("b"));
        assert_eq!(props.keys(), &["a"]);
        assert_consistent(&props);
    }

    #[test]
    fn remove_only_key_empties_the_set() {
        let mut props = set_of(&[("a", "1")]);
        assert!(props.remove("a"));
        assert!(props.is_empty());
        assert_consistent(&props);
    }

    #[test]
    fn remove_absent_key_is_noop() {
        let mut props = set_of(&[("a", "1")]);
        assert!(!props.remove("b"));
        assert_eq!(props.len(), 1);
        assert_consistent(&props);
    }

    #[test]
    fn removed_slot_is_reusable() {
        let mut props = set_of(&[("a", "1"), ("b", "2")]);
        assert!(props.remove("a"));
        assert!(props.set("a", "again".to_string()));
        // Re-added keys go to the end of the current order.
        assert_eq!(props.keys(), &["b", "a"]);
        assert_consistent(&props);
    }

    #[test]
    fn interleaved_set_and_remove_stays_consistent() {
        let mut props = PropertySet::new();
        for i in 0..10 {
            assert!(props.set(&format!("k{i}"), format!("v{i}")));
        }
        for key in ["k0", "k5", "k9", "k2"] {
            assert!(props.remove(key));
            assert_consistent(&props);
        }
        assert_eq!(props.len(), 6);
        for i in [1usize, 3, 4, 6, 7, 8] {
            assert_eq!(props.get(&format!("k{i}")).unwrap(), format!("v{i}"));
        }
    }

    #[test]
    fn iter_follows_current_order() {
        let mut props = set_of(&[("a", "1"), ("b", "2"), ("c", "3")]);
        assert!(props.remove("a"));
        let pairs: Vec<_> = props.iter().collect();
        assert_eq!(pairs, vec![("c", "3"), ("b", "2")]);
    }

    #[test]
    fn clear_drops_everything() {
        let mut props = set_of(&[("a", "1"), ("b", "2")]);
        props.clear();
        assert!(props.is_empty());
        assert!(props.get("a").is_none());
    }

    #[test]
    fn serialization_roundtrip_preserves_order() {
        let mut props = set_of(&[("a", "1"), ("b", "2"), ("c", "3")]);
        assert!(props.remove("a"));
        let json = serde_json::to_string(&props).unwrap();
        let loaded: PropertySet = serde_json::from_str(&json).unwrap();
        assert_eq!(loaded.keys(), props.keys());
        assert_eq!(loaded.get("b"), Some("2"));
        assert_consistent(&loaded);
    }
}
