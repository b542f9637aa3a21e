//! Access tokens and the remote fetch interface.

use crate::error::FetchResult;
use async_trait::async_trait;
use std::fmt;

/// Access token for the remote service. Never printed in full.
#[derive(Clone, PartialEq, Eq)]
pub struct AuthToken(String);

impl AuthToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for AuthToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AuthToken(***)")
    }
}

/// Loads the current list of records of one type from the remote service.
#[async_trait]
pub trait RemoteFetcher<T>: Send + Sync {
    async fn fetch(&self, token: &AuthToken) -> FetchResult<Vec<T>>;
}
