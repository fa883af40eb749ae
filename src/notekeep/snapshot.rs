//! JSON snapshots of the engine state.
//!
//! Durability lives outside the engine: an external collaborator decides
//! when and where state is persisted. This module is the boundary — the
//! whole store serializes to one JSON document and loads back from it.
//! Event subscribers are not part of the state and must be re-registered
//! after a restore.

use crate::error::Result;
use crate::store::RecordStore;

pub fn to_json(store: &RecordStore) -> Result<String> {
    Ok(serde_json::to_string_pretty(store)?)
}

pub fn from_json(json: &str) -> Result<RecordStore> {
    Ok(serde_json::from_str(json)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::OwnerId;

    #[test]
    fn snapshot_roundtrip_preserves_state() {
        let mut store = RecordStore::new();
        let owner = OwnerId::random();
        let keep = store.create(owner, "Keep".into(), "body".into()).unwrap();
        let gone = store.create(owner, "Gone".into(), String::new()).unwrap();
        store
            .set_property(keep, owner, "priority", "high".into())
            .unwrap();
        store.delete(gone, owner).unwrap();

        let json = to_json(&store).unwrap();
        let loaded = from_json(&json).unwrap();

        assert_eq!(loaded.total_count(), 2);
        assert_eq!(loaded.owner_count(owner), 1);
        assert_eq!(loaded.get(keep).unwrap().title, "Keep");
        assert!(loaded.get(gone).is_err());
        assert_eq!(loaded.property(keep, "priority").unwrap(), "high");
    }

    #[test]
    fn restored_store_keeps_allocating_after_the_last_id() {
        let mut store = RecordStore::new();
        let owner = OwnerId::random();
        store.create(owner, "A".into(), String::new()).unwrap();
        store.create(owner, "B".into(), String::new()).unwrap();

        let mut loaded = from_json(&to_json(&store).unwrap()).unwrap();
        let next = loaded.create(owner, "C".into(), String::new()).unwrap();
        assert_eq!(next, 2);
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(from_json("{not json").is_err());
    }
}
