//! Decoding of the remote service's JSON envelopes.
//!
//! Every response is either `{"response": ...}` or `{"error": {...}}`.
//! List methods wrap their records as `{"count": n, "items": [...]}`.

use crate::error::{FetchError, FetchResult};
use roster_types::{Group, GroupId, NewsPost, User, UserId};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::collections::HashMap;

#[derive(Deserialize)]
struct Envelope<R> {
    response: Option<R>,
    error: Option<ApiErrorBody>,
}

#[derive(Deserialize)]
struct ApiErrorBody {
    error_code: i64,
    #[serde(default)]
    error_msg: String,
}

#[derive(Deserialize)]
struct ItemsPage<T> {
    items: Vec<T>,
}

fn open_envelope<R: DeserializeOwned>(body: &str) -> FetchResult<R> {
    let envelope: Envelope<R> = serde_json::from_str(body)?;
    match (envelope.response, envelope.error) {
        (_, Some(error)) => Err(FetchError::Api {
            code: error.error_code,
            message: error.error_msg,
        }),
        (Some(response), None) => Ok(response),
        (None, None) => Err(FetchError::Malformed(
            "neither response nor error present".to_string(),
        )),
    }
}

/// Decodes a list response into its items.
pub fn decode_items<T: DeserializeOwned>(body: &str) -> FetchResult<Vec<T>> {
    Ok(open_envelope::<ItemsPage<T>>(body)?.items)
}

/// One page of the news feed, with the profiles and groups its posts
/// reference.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct NewsFeed {
    #[serde(default)]
    pub items: Vec<NewsPost>,
    #[serde(default)]
    pub profiles: Vec<User>,
    #[serde(default)]
    pub groups: Vec<Group>,
    /// Cursor for the next page.
    #[serde(default)]
    pub next_from: Option<String>,
}

impl NewsFeed {
    pub fn users_by_id(&self) -> HashMap<UserId, User> {
        self.profiles.iter().map(|u| (u.id, u.clone())).collect()
    }

    pub fn groups_by_id(&self) -> HashMap<GroupId, Group> {
        self.groups.iter().map(|g| (g.id, g.clone())).collect()
    }
}

/// Decodes a news feed response.
pub fn decode_news_feed(body: &str) -> FetchResult<NewsFeed> {
    open_envelope(body)
}
