use crate::internal::models::Item;
use anyhow::{Context, Result};
use futures::future::try_join_all;
use reqwest::Client;
use serde::de::DeserializeOwned;

const HN_API_BASE_URL: &str = "https://hacker-news.firebaseio.com/v0/";

/// HTTP client for the Hacker News Firebase API.
///
/// Every call is a single round trip: no retry, no cache, no request timeout
/// beyond what the transport gives us. Errors carry context via `anyhow` so
/// logs show which endpoint failed instead of a bare transport message.
#[derive(Clone)]
pub struct ApiService {
    client: Client,
    base_url: String,
}

impl ApiService {
    pub fn new() -> Self {
        Self::with_base_url(HN_API_BASE_URL.to_string())
    }

    /// Point the service at an alternate base URL (mock servers in tests).
    pub fn with_base_url(base_url: String) -> Self {
        Self {
            client: Client::new(),
            base_url,
        }
    }

    async fn get_json<T>(&self, url: &str) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let resp = self
            .client
            .get(url)
            .send()
            .await
            .with_context(|| format!("failed to send GET request to {}", url))?;

        resp.json::<T>()
            .await
            .with_context(|| format!("failed to parse JSON response from {}", url))
    }

    /// Fetch the current ranked list of top story ids. The endpoint has no
    /// pagination of its own; callers slice the result.
    pub async fn fetch_top_ids(&self) -> Result<Vec<u32>> {
        let url = format!("{}topstories.json", self.base_url);
        self.get_json(&url).await.context("fetch_top_ids failed")
    }

    /// Fetch a single item by id. The API answers `null` for deleted or
    /// unknown ids; that decodes to `Ok(None)` rather than an error.
    pub async fn fetch_item(&self, id: u32) -> Result<Option<Item>> {
        let url = format!("{}item/{}.json", self.base_url, id);
        self.get_json(&url)
            .await
            .with_context(|| format!("fetch_item failed for id {}", id))
    }

    /// Resolve a batch of ids concurrently. Result order matches `ids` order,
    /// not completion order, and the batch fails as a whole if any single
    /// fetch fails (no partial results).
    pub async fn fetch_items(&self, ids: &[u32]) -> Result<Vec<Option<Item>>> {
        try_join_all(ids.iter().map(|id| self.fetch_item(*id))).await
    }
}

impl Default for ApiService {
    fn default() -> Self {
        Self::new()
    }
}
