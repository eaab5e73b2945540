//! Storage Errors

use thiserror::Error;

pub type StorageResult<T> = Result<T, StorageError>;

/// Failures talking to the key-value backing store
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage unavailable: {0}")]
    Unavailable(String),
    #[error("failed to read key '{key}': {reason}")]
    Read { key: String, reason: String },
    #[error("failed to write key '{key}': {reason}")]
    Write { key: String, reason: String },
    #[error("malformed todo data: {0}")]
    Json(#[from] serde_json::Error),
}
