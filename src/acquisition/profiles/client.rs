//! Web search HTTP client
//!
//! Talks to a Custom Search JSON API endpoint. Requires an API key and a
//! search engine id; both are sent as query parameters, so request URLs are
//! never logged.

use super::lookup::SearchQuery;
use super::{adapter, dto};
use crate::acquisition::domain::{ProviderError, SearchHit};
use crate::acquisition::http;

/// Default search endpoint
pub const DEFAULT_BASE_URL: &str = "https://www.googleapis.com/customsearch/v1";

const USER_AGENT: &str = concat!("dossier/", env!("CARGO_PKG_VERSION"));

/// Web search API client
pub struct SearchClient {
    http_client: reqwest::Client,
    base_url: String,
    api_key: String,
    engine_id: String,
}

impl SearchClient {
    /// Create a client. Blank credentials are rejected with
    /// [`ProviderError::MissingCredentials`].
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        engine_id: impl Into<String>,
    ) -> Result<Self, ProviderError> {
        let api_key = api_key.into();
        let engine_id = engine_id.into();
        if api_key.trim().is_empty() || engine_id.trim().is_empty() {
            return Err(ProviderError::MissingCredentials);
        }

        Ok(Self {
            http_client: http::build_client(USER_AGENT)?,
            base_url: base_url.into(),
            api_key,
            engine_id,
        })
    }

    /// Run one search and return every hit, with or without images.
    pub async fn search(&self, query: &SearchQuery) -> Result<Vec<SearchHit>, ProviderError> {
        tracing::debug!(q = %query.q, start = query.start, "querying web search");

        let url = self.search_url(query);
        let response: dto::SearchResponse = http::get_json(&self.http_client, &url).await?;
        Ok(adapter::to_hits(response))
    }

    fn search_url(&self, query: &SearchQuery) -> String {
        let pairs = [
            ("key", self.api_key.clone()),
            ("cx", self.engine_id.clone()),
            ("q", query.q.clone()),
            ("start", query.start.to_string()),
        ];
        format!("{}?{}", self.base_url, http::encode_query(&pairs))
    }
}
