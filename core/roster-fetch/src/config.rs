//! Fetch configuration.

use crate::error::FetchResult;
use serde::Deserialize;

/// Settings for talking to the remote service.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    /// API version sent with every request.
    pub api_version: String,
    /// Timeout for one fetch (ms).
    pub timeout_ms: u64,
    /// Maximum number of records requested per call.
    pub page_size: usize,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            api_version: "5.126".to_string(),
            timeout_ms: 30_000,
            page_size: 5_000,
        }
    }
}

impl FetchConfig {
    /// Parses a config from JSON. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> FetchResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
