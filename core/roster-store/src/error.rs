//! Error types for the record store.

use thiserror::Error;

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that can occur in store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The store was invalidated and can no longer be read or written.
    #[error("store invalidated: {0}")]
    Invalidated(String),

    /// A write was attempted from inside a change notification.
    #[error("cannot write to the store while delivering notifications")]
    WriteDuringNotification,

    /// Snapshot serialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// IO error (snapshot files).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Snapshot contents are not usable.
    #[error("invalid data: {0}")]
    InvalidData(String),
}
