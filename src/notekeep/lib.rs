//! # Notekeep Architecture
//!
//! Notekeep is a **UI-agnostic record store**: owner-scoped notes with
//! bounded key-value properties, paginated listing, predicate filtering,
//! and cross-record property statistics. There is no transport, no
//! authentication, and no persistence in here — callers arrive with a
//! pre-resolved owner identity, and durability is an external
//! collaborator's job (see [`snapshot`]).
//!
//! ## Layering
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Facade (api.rs)                                        │
//! │  - One method per operation of the external surface         │
//! │  - RwLock around the store: exclusive writes, shared reads  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Engines (page.rs, filter.rs, stats.rs)                     │
//! │  - Pagination window, filter predicate, pair statistics     │
//! │  - Pure functions over the store, no state of their own     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage (store/)                                           │
//! │  - Record arena (monotonic ids, tombstones, never reused)   │
//! │  - Per-record property sets with O(1) key removal           │
//! │  - Per-owner index of active record ids                     │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key invariants
//!
//! - Record ids are monotonic and permanent: deletion tombstones the arena
//!   slot, it never frees or reuses it.
//! - The owner index holds exactly the valid records of each owner;
//!   deletion swap-removes from it, so listing order is not stable across
//!   deletions (and neither is property key order — same technique).
//! - No partial mutation: every operation validates its inputs completely
//!   before touching any state, and the facade holds the write lock for
//!   the whole mutation, so readers never see a record half-updated.
//!
//! ## Module Overview
//!
//! - [`api`]: The facade — entry point for all operations
//! - [`store`]: Record arena, owner index, and the property index
//! - [`model`]: Core data types, size limits, validation
//! - [`page`]: The offset/limit pagination primitive
//! - [`filter`]: Key/value predicate filtering
//! - [`stats`]: Property pair frequency statistics
//! - [`events`]: Change notifications for external observers
//! - [`snapshot`]: JSON state export/import
//! - [`error`]: Error types

pub mod api;
pub mod error;
pub mod events;
pub mod filter;
pub mod model;
pub mod page;
pub mod snapshot;
pub mod stats;
pub mod store;
