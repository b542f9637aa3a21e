//! Remote fetch bridge for Roster.
//!
//! Fetching is the only asynchronous step in the client core:
//!
//! 1. a [`RemoteFetcher`] loads records from the remote service
//! 2. the [`Refresher`] awaits it (with a timeout) on the context that owns
//!    the record store
//! 3. the results are upserted into the store, last write wins by ID, and
//!    the store notifies its subscribers
//!
//! Overlapping refreshes are not cancelled; each one writes its result when
//! it completes. A failed refresh is logged and returned to the caller and
//! leaves the store untouched. There is no automatic retry.
//!
//! [`ApiClient`] implements [`RemoteFetcher`] for users and groups on top of
//! an abstract [`Transport`], decoding the service's JSON envelopes.

mod api;
mod config;
mod envelope;
mod error;
mod fetcher;
mod refresher;

pub use api::{ApiClient, ApiMethod, Transport};
pub use config::FetchConfig;
pub use envelope::{decode_items, decode_news_feed, NewsFeed};
pub use error::{FetchError, FetchResult};
pub use fetcher::{AuthToken, RemoteFetcher};
pub use refresher::Refresher;
