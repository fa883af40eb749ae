//! # Domain Model: Records, Owners, and Limits
//!
//! A [`Record`] is the unit of storage: an owner-scoped note with a title,
//! a free-form content body, and timestamps. Records are soft-deleted —
//! deletion marks the record as a tombstone but its id slot survives
//! forever, so ids are never reused or reassigned.
//!
//! All the size limits the engine enforces live here as named constants.
//! Lengths are counted in characters, and the validation helpers are the
//! single source of truth for them: every mutating operation validates its
//! inputs through these helpers *before* touching any state, so a failed
//! call never leaves a partially-applied mutation behind.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::error::{NotekeepError, Result};

/// Monotonic record identifier. Doubles as the record's slot in the arena.
pub type RecordId = u64;

/// Minimum title length in characters.
pub const TITLE_MIN: usize = 1;
/// Maximum title length in characters.
pub const TITLE_MAX: usize = 256;
/// Maximum content length in characters (empty content is allowed).
pub const CONTENT_MAX: usize = 20_480;
/// Property key length bounds in characters.
pub const PROPERTY_KEY_MIN: usize = 1;
pub const PROPERTY_KEY_MAX: usize = 32;
/// Property value length bounds in characters.
pub const PROPERTY_VALUE_MIN: usize = 1;
pub const PROPERTY_VALUE_MAX: usize = 2_048;
/// Maximum number of distinct properties on one record.
pub const MAX_PROPERTIES: usize = 32;
/// Page size bounds for listing and filtering.
pub const PAGE_LIMIT_MIN: usize = 1;
pub const PAGE_LIMIT_MAX: usize = 20;

/// A pre-resolved caller identity.
///
/// Authentication happens outside the engine; by the time a call reaches
/// the store the caller has already been resolved to an `OwnerId`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OwnerId(pub Uuid);

impl OwnerId {
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for OwnerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Record {
    pub id: RecordId,
    pub owner: OwnerId,
    pub title: String,
    pub content: String,
    pub is_deleted: bool,
    pub deleted_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Record {
    pub fn new(id: RecordId, owner: OwnerId, title: String, content: String) -> Self {
        let now = Utc::now();
        Self {
            id,
            owner,
            title,
            content,
            is_deleted: false,
            deleted_at: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// A record is valid until it is tombstoned.
    pub fn is_valid(&self) -> bool {
        !self.is_deleted
    }
}

pub fn validate_title(title: &str) -> Result<()> {
    let len = title.chars().count();
    if !(TITLE_MIN..=TITLE_MAX).contains(&len) {
        return Err(NotekeepError::InvalidTitle(len));
    }
    Ok(())
}

pub fn validate_content(content: &str) -> Result<()> {
    let len = content.chars().count();
    if len > CONTENT_MAX {
        return Err(NotekeepError::InvalidContent(len));
    }
    Ok(())
}

pub fn validate_property_key(key: &str) -> Result<()> {
    let len = key.chars().count();
    if !(PROPERTY_KEY_MIN..=PROPERTY_KEY_MAX).contains(&len) {
        return Err(NotekeepError::InvalidPropertyKey(len));
    }
    Ok(())
}

pub fn validate_property_value(value: &str) -> Result<()> {
    let len = value.chars().count();
    if !(PROPERTY_VALUE_MIN..=PROPERTY_VALUE_MAX).contains(&len) {
        return Err(NotekeepError::InvalidPropertyValue(len));
    }
    Ok(())
}
