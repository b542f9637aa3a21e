//! Error types for sectioning and diff application.

use roster_store::StoreError;
use thiserror::Error;

/// Result type for sectioning operations.
pub type SectionResult<T> = Result<T, SectionError>;

/// Errors that can occur while applying change sets.
#[derive(Debug, Error)]
pub enum SectionError {
    /// A change set index does not fit the list it refers to.
    #[error("{kind} index {index} out of bounds for list of {len}")]
    IndexOutOfBounds {
        kind: &'static str,
        index: usize,
        len: usize,
    },

    /// The change set does not turn the previous list into the current one.
    #[error(
        "change set does not match lists: {previous} - {deletions} deletions != {current} - {insertions} insertions"
    )]
    InconsistentChangeSet {
        previous: usize,
        current: usize,
        deletions: usize,
        insertions: usize,
    },

    /// Underlying store error.
    #[error("store error: {0}")]
    Store(#[from] StoreError),
}
