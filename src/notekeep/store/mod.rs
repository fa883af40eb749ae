//! # Storage Layer
//!
//! [`RecordStore`] is the indexed storage engine: an append-only arena of
//! records keyed by monotonic id, a parallel table of property sets, and a
//! per-owner index of active record ids.
//!
//! ## Shape
//!
//! - `records[id]` is the record's permanent slot. Deletion tombstones the
//!   slot (`is_deleted = true`) but never frees it, so an id stays valid
//!   for the lifetime of the store and is never reassigned.
//! - `property_sets[id]` holds the record's properties. Tombstoning a
//!   record clears its whole set, so no property data is reachable for a
//!   deleted id.
//! - `owner_index[owner]` lists the owner's *active* record ids: append on
//!   create, swap-remove on delete. The listing order is therefore not
//!   stable across deletions.
//!
//! ## Invariants
//!
//! An id appears in `owner_index[owner]` iff the record is valid and owned
//! by `owner`. Every operation validates its inputs fully before mutating
//! anything, so a failed call leaves the store untouched.
//!
//! The store itself is single-writer (`&mut self`), like any plain Rust
//! collection. [`crate::api::Notekeep`] wraps it for shared access.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

use crate::error::{NotekeepError, Result};
use crate::events::{ChangeEvent, EventSink};
use crate::model::{
    validate_content, validate_property_key, validate_property_value, validate_title, OwnerId,
    Record, RecordId,
};

pub mod properties;

use properties::PropertySet;

#[derive(Default, Serialize, Deserialize)]
pub struct RecordStore {
    records: Vec<Record>,
    property_sets: Vec<PropertySet>,
    owner_index: HashMap<OwnerId, Vec<RecordId>>,
    #[serde(skip)]
    sinks: Vec<Arc<dyn EventSink>>,
}

impl std::fmt::Debug for RecordStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecordStore")
            .field("records", &self.records)
            .field("property_sets", &self.property_sets)
            .field("owner_index", &self.owner_index)
            .field("sinks", &self.sinks.len())
            .finish()
    }
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an observer for subsequent mutations.
    pub fn subscribe(&mut self, sink: Arc<dyn EventSink>) {
        self.sinks.push(sink);
    }

    fn emit(&self, event: ChangeEvent) {
        for sink in &self.sinks {
            sink.on_event(&event);
        }
    }

    /// Create a new record and return its id.
    pub fn create(&mut self, owner: OwnerId, title: String, content: String) -> Result<RecordId> {
        validate_title(&title)?;
        validate_content(&content)?;

        let id = self.records.len() as RecordId;
        let record = Record::new(id, owner, title, content);
        let created_at = record.created_at;
        self.records.push(record);
        self.property_sets.push(PropertySet::new());
        self.owner_index.entry(owner).or_default().push(id);

        debug!(id, %owner, "record created");
        self.emit(ChangeEvent::Created {
            id,
            owner,
            at: created_at,
        });
        Ok(id)
    }

    /// Look up a record, rejecting unknown and tombstoned ids.
    pub fn get(&self, id: RecordId) -> Result<&Record> {
        let record = self
            .records
            .get(id as usize)
            .ok_or(NotekeepError::NotFound(id))?;
        if record.is_deleted {
            return Err(NotekeepError::Deleted(id));
        }
        Ok(record)
    }

    fn get_authorized(&self, id: RecordId, owner: OwnerId) -> Result<&Record> {
        let record = self.get(id)?;
        if record.owner != owner {
            return Err(NotekeepError::NotOwner(id));
        }
        Ok(record)
    }

    /// Replace a record's title and content.
    pub fn update(
        &mut self,
        id: RecordId,
        owner: OwnerId,
        title: String,
        content: String,
    ) -> Result<()> {
        self.get_authorized(id, owner)?;
        validate_title(&title)?;
        validate_content(&content)?;

        let record = &mut self.records[id as usize];
        record.title = title;
        record.content = content;
        record.updated_at = Utc::now();
        let at = record.updated_at;

        debug!(id, %owner, "record updated");
        self.emit(ChangeEvent::Updated { id, owner, at });
        Ok(())
    }

    /// Tombstone a record.
    ///
    /// Clears every property the record held and removes its id from the
    /// owner index (swap-remove, so the owner's listing order may change).
    /// The id slot itself is retained forever.
    pub fn delete(&mut self, id: RecordId, owner: OwnerId) -> Result<()> {
        self.get_authorized(id, owner)?;

        self.property_sets[id as usize].clear();
        if let Some(ids) = self.owner_index.get_mut(&owner) {
            if let Some(position) = ids.iter().position(|&active| active == id) {
                ids.swap_remove(position);
            }
        }

        let record = &mut self.records[id as usize];
        let now = Utc::now();
        record.is_deleted = true;
        record.deleted_at = Some(now);
        record.updated_at = now;

        debug!(id, %owner, "record deleted");
        self.emit(ChangeEvent::Deleted {
            id,
            owner,
            at: now,
        });
        Ok(())
    }

    /// Set or overwrite one property on a record.
    pub fn set_property(
        &mut self,
        id: RecordId,
        owner: OwnerId,
        key: &str,
        value: String,
    ) -> Result<()> {
        self.get_authorized(id, owner)?;
        validate_property_key(key)?;
        validate_property_value(&value)?;

        if !self.property_sets[id as usize].set(key, value) {
            return Err(NotekeepError::TooManyProperties(id));
        }
        let record = &mut self.records[id as usize];
        record.updated_at = Utc::now();
        let at = record.updated_at;

        debug!(id, %owner, key, "property set");
        self.emit(ChangeEvent::Updated { id, owner, at });
        Ok(())
    }

    /// Remove one property from a record.
    pub fn delete_property(&mut self, id: RecordId, owner: OwnerId, key: &str) -> Result<()> {
        self.get_authorized(id, owner)?;

        if !self.property_sets[id as usize].remove(key) {
            return Err(NotekeepError::PropertyNotFound {
                id,
                key: key.to_string(),
            });
        }
        let record = &mut self.records[id as usize];
        record.updated_at = Utc::now();
        let at = record.updated_at;

        debug!(id, %owner, key, "property removed");
        self.emit(ChangeEvent::Updated { id, owner, at });
        Ok(())
    }

    /// Read one property value. Absent keys read as the empty string;
    /// reads are not owner-restricted beyond record validity.
    pub fn property(&self, id: RecordId, key: &str) -> Result<String> {
        self.get(id)?;
        Ok(self.property_sets[id as usize]
            .get(key)
            .unwrap_or_default()
            .to_string())
    }

    /// All properties of a record as parallel key/value vectors, in
    /// current key order.
    pub fn properties(&self, id: RecordId) -> Result<(Vec<String>, Vec<String>)> {
        self.get(id)?;
        let set = &self.property_sets[id as usize];
        let mut keys = Vec::with_capacity(set.len());
        let mut values = Vec::with_capacity(set.len());
        for (key, value) in set.iter() {
            keys.push(key.to_string());
            values.push(value.to_string());
        }
        Ok((keys, values))
    }

    /// The owner's active record ids, in owner-index order.
    pub fn owner_records(&self, owner: OwnerId) -> &[RecordId] {
        self.owner_index
            .get(&owner)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Total records ever created, tombstones included.
    pub fn total_count(&self) -> u64 {
        self.records.len() as u64
    }

    /// The owner's active record count.
    pub fn owner_count(&self, owner: OwnerId) -> u64 {
        self.owner_records(owner).len() as u64
    }

    /// Internal access for the filter and statistics engines. Callers pass
    /// ids taken from the owner index, which holds only valid records.
    pub(crate) fn property_set(&self, id: RecordId) -> &PropertySet {
        &self.property_sets[id as usize]
    }

    /// Internal unchecked record access, same contract as
    /// [`Self::property_set`].
    pub(crate) fn record(&self, id: RecordId) -> &Record {
        &self.records[id as usize]
    }
}
