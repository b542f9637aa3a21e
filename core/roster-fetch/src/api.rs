//! Typed client for the remote social API.

use crate::config::FetchConfig;
use crate::envelope::{decode_items, decode_news_feed, NewsFeed};
use crate::error::{FetchError, FetchResult};
use crate::fetcher::{AuthToken, RemoteFetcher};
use async_trait::async_trait;
use roster_types::{Group, User};
use tracing::debug;

/// Remote methods used by the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiMethod {
    Friends,
    Groups,
    NewsFeed,
}

impl ApiMethod {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Friends => "friends.get",
            Self::Groups => "groups.get",
            Self::NewsFeed => "newsfeed.get",
        }
    }

    fn extra_params(&self) -> Vec<(&'static str, String)> {
        match self {
            Self::Friends => vec![
                ("fields", "online,photo_100".to_string()),
                ("order", "name".to_string()),
            ],
            Self::Groups => vec![
                ("extended", "1".to_string()),
                ("fields", "members_count".to_string()),
            ],
            Self::NewsFeed => vec![("filters", "post".to_string())],
        }
    }
}

/// Carries one API call and returns the raw response body.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn call(&self, method: &str, params: &[(&'static str, String)]) -> FetchResult<String>;
}

/// Typed client for the remote API over any [`Transport`].
pub struct ApiClient<Tr> {
    transport: Tr,
    config: FetchConfig,
}

impl<Tr: Transport> ApiClient<Tr> {
    pub fn new(transport: Tr, config: FetchConfig) -> Self {
        Self { transport, config }
    }

    pub fn config(&self) -> &FetchConfig {
        &self.config
    }

    /// Full parameter list for `method`.
    pub fn params(&self, method: ApiMethod, token: &AuthToken) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("access_token", token.as_str().to_string()),
            ("v", self.config.api_version.clone()),
            ("count", self.config.page_size.to_string()),
        ];
        params.extend(method.extra_params());
        params
    }

    async fn call(&self, method: ApiMethod, token: &AuthToken) -> FetchResult<String> {
        if token.is_empty() {
            return Err(FetchError::MissingToken);
        }
        debug!("Calling {}", method.name());
        self.transport
            .call(method.name(), &self.params(method, token))
            .await
    }

    /// Loads one page of the news feed.
    pub async fn fetch_news_feed(&self, token: &AuthToken) -> FetchResult<NewsFeed> {
        let body = self.call(ApiMethod::NewsFeed, token).await?;
        decode_news_feed(&body)
    }
}

#[async_trait]
impl<Tr: Transport> RemoteFetcher<User> for ApiClient<Tr> {
    async fn fetch(&self, token: &AuthToken) -> FetchResult<Vec<User>> {
        let body = self.call(ApiMethod::Friends, token).await?;
        decode_items(&body)
    }
}

#[async_trait]
impl<Tr: Transport> RemoteFetcher<Group> for ApiClient<Tr> {
    async fn fetch(&self, token: &AuthToken) -> FetchResult<Vec<Group>> {
        let body = self.call(ApiMethod::Groups, token).await?;
        decode_items(&body)
    }
}
