//! Cache refresh: fetch, then upsert into the record store.

use crate::config::FetchConfig;
use crate::error::{FetchError, FetchResult};
use crate::fetcher::{AuthToken, RemoteFetcher};
use roster_store::Repository;
use roster_types::Record;
use std::marker::PhantomData;
use std::time::Duration;
use tracing::{info, warn};

/// Fetches records and writes them into a repository.
///
/// The returned futures borrow the repository, so they run on the context
/// that owns it.
pub struct Refresher<T, F, R> {
    fetcher: F,
    repository: R,
    config: FetchConfig,
    _record: PhantomData<fn() -> T>,
}

impl<T, F, R> Refresher<T, F, R>
where
    T: Record,
    F: RemoteFetcher<T>,
    R: Repository<T>,
{
    pub fn new(fetcher: F, repository: R, config: FetchConfig) -> Self {
        Self {
            fetcher,
            repository,
            config,
            _record: PhantomData,
        }
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    /// Fetches and upserts. Returns the number of records written.
    ///
    /// On failure the repository is left as it was.
    pub async fn refresh(&self, token: &AuthToken) -> FetchResult<usize> {
        let timeout = Duration::from_millis(self.config.timeout_ms);
        let records = match tokio::time::timeout(timeout, self.fetcher.fetch(token)).await {
            Ok(Ok(records)) => records,
            Ok(Err(e)) => {
                warn!("Refresh failed: {e}");
                return Err(e);
            }
            Err(_) => {
                warn!("Refresh timed out after {} ms", self.config.timeout_ms);
                return Err(FetchError::Timeout(self.config.timeout_ms));
            }
        };

        let written = match self.repository.upsert(records) {
            Ok(written) => written,
            Err(e) => {
                warn!("Refresh could not write to the store: {e}");
                return Err(e.into());
            }
        };
        info!("Refreshed {written} records");
        Ok(written)
    }
}
