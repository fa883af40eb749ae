//! # API Facade
//!
//! [`Notekeep`] is the single entry point for callers: one method per
//! operation of the external surface, each taking a pre-resolved owner
//! identity where the operation is owner-restricted.
//!
//! The facade wraps the single-writer [`RecordStore`] in a
//! `parking_lot::RwLock`. Mutations hold the write lock for their whole
//! duration, so no reader ever observes a record mid-mutation; reads share
//! the read lock and do not block each other. Every call completes or
//! fails synchronously.
//!
//! The facade adds no business logic of its own: it validates nothing the
//! store would not validate and returns owned copies of the data it reads.

use parking_lot::RwLock;
use std::sync::Arc;

use crate::error::Result;
use crate::events::EventSink;
use crate::filter::{self, PropertyFilter};
use crate::model::{OwnerId, Record, RecordId};
use crate::page::{paginate, Page};
use crate::stats::{self, PairCount};
use crate::store::RecordStore;

#[derive(Debug, Default)]
pub struct Notekeep {
    inner: RwLock<RecordStore>,
}

impl Notekeep {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap an existing store, e.g. one restored from a snapshot.
    pub fn from_store(store: RecordStore) -> Self {
        Self {
            inner: RwLock::new(store),
        }
    }

    /// Register an observer for subsequent mutations.
    pub fn subscribe(&self, sink: Arc<dyn EventSink>) {
        self.inner.write().subscribe(sink);
    }

    pub fn create_record(&self, owner: OwnerId, title: String, content: String) -> Result<RecordId> {
        self.inner.write().create(owner, title, content)
    }

    pub fn get_record(&self, id: RecordId) -> Result<Record> {
        self.inner.read().get(id).cloned()
    }

    pub fn update_record(
        &self,
        id: RecordId,
        owner: OwnerId,
        title: String,
        content: String,
    ) -> Result<()> {
        self.inner.write().update(id, owner, title, content)
    }

    pub fn delete_record(&self, id: RecordId, owner: OwnerId) -> Result<()> {
        self.inner.write().delete(id, owner)
    }

    pub fn set_property(
        &self,
        id: RecordId,
        owner: OwnerId,
        key: &str,
        value: String,
    ) -> Result<()> {
        self.inner.write().set_property(id, owner, key, value)
    }

    pub fn delete_property(&self, id: RecordId, owner: OwnerId, key: &str) -> Result<()> {
        self.inner.write().delete_property(id, owner, key)
    }

    /// Read one property value; absent keys read as the empty string.
    pub fn get_property(&self, id: RecordId, key: &str) -> Result<String> {
        self.inner.read().property(id, key)
    }

    /// All properties of a record as parallel key/value vectors.
    pub fn get_all_properties(&self, id: RecordId) -> Result<(Vec<String>, Vec<String>)> {
        self.inner.read().properties(id)
    }

    /// One page of the owner's records, in owner-index order.
    pub fn list_owner_records(
        &self,
        owner: OwnerId,
        offset: usize,
        limit: usize,
    ) -> Result<Page<Record>> {
        let store = self.inner.read();
        let page = paginate(store.owner_records(owner), offset, limit)?;
        Ok(page.map(|id| store.record(id).clone()))
    }

    /// One page of the owner's records matching a key/value predicate.
    /// Empty `key`/`value` strings leave that half of the predicate unset.
    pub fn filter_records(
        &self,
        owner: OwnerId,
        key: &str,
        value: &str,
        offset: usize,
        limit: usize,
    ) -> Result<Page<Record>> {
        let filter = PropertyFilter::new(key, value);
        filter::run(&self.inner.read(), owner, &filter, offset, limit)
    }

    /// The owner's property pairs ranked by occurrence count, descending.
    /// `max_results == 0` means unlimited.
    pub fn top_property_stats(&self, owner: OwnerId, max_results: usize) -> Vec<PairCount> {
        stats::run(&self.inner.read(), owner, max_results)
    }

    /// How many distinct (key, value) pairs the owner's records carry.
    pub fn property_pairs_count(&self, owner: OwnerId) -> u64 {
        stats::distinct_pairs(&self.inner.read(), owner)
    }

    /// Total records ever created, tombstones included.
    pub fn total_record_count(&self) -> u64 {
        self.inner.read().total_count()
    }

    /// The owner's active record count.
    pub fn owner_record_count(&self, owner: OwnerId) -> u64 {
        self.inner.read().owner_count(owner)
    }

    /// Serialize the full engine state for an external persistence
    /// collaborator.
    pub fn snapshot_json(&self) -> Result<String> {
        crate::snapshot::to_json(&self.inner.read())
    }
}
