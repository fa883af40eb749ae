use thiserror::Error;

use crate::model::RecordId;

#[derive(Error, Debug)]
pub enum NotekeepError {
    #[error("Record not found: {0}")]
    NotFound(RecordId),

    #[error("Record deleted: {0}")]
    Deleted(RecordId),

    #[error("Caller does not own record {0}")]
    NotOwner(RecordId),

    #[error("Title must be 1..=256 characters, got {0}")]
    InvalidTitle(usize),

    #[error("Content must be at most 20480 characters, got {0}")]
    InvalidContent(usize),

    #[error("Property key must be 1..=32 characters, got {0}")]
    InvalidPropertyKey(usize),

    #[error("Property value must be 1..=2048 characters, got {0}")]
    InvalidPropertyValue(usize),

    #[error("Record {0} already holds the maximum of 32 properties")]
    TooManyProperties(RecordId),

    #[error("Record {id} has no property \"{key}\"")]
    PropertyNotFound { id: RecordId, key: String },

    #[error("Page limit must be 1..=20, got {0}")]
    InvalidLimit(usize),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, NotekeepError>;
