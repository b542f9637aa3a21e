//! Error types for the fetch layer.

use roster_store::StoreError;
use thiserror::Error;

/// Result type for fetch operations.
pub type FetchResult<T> = Result<T, FetchError>;

/// Errors that can occur while fetching and caching remote records.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Transport failure.
    #[error("network error: {0}")]
    Network(String),

    /// The service answered with an error object.
    #[error("API error {code}: {message}")]
    Api { code: i64, message: String },

    /// The response body could not be decoded.
    #[error("decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// The response had neither a result nor an error.
    #[error("malformed response: {0}")]
    Malformed(String),

    /// The fetch did not complete in time.
    #[error("fetch timed out after {0} ms")]
    Timeout(u64),

    /// No access token was provided.
    #[error("missing access token")]
    MissingToken,

    /// Writing the results into the store failed.
    #[error("store error: {0}")]
    Store(#[from] StoreError),
}
