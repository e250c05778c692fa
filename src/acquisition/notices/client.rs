//! Notice registry HTTP client
//!
//! Handles communication with the public notice web service.
//!
//! IMPORTANT: The registry sits behind a CDN that rejects requests without
//! a browser-like User-Agent, so the client always sends one.

use super::{adapter, dto};
use crate::acquisition::domain::{NoticeRecord, ProviderError};
use crate::acquisition::http;
use crate::acquisition::plan::QueryAttempt;

/// Default registry endpoint
pub const DEFAULT_BASE_URL: &str = "https://ws-public.interpol.int/notices/v1";

const USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0 Safari/537.36";

/// Notice registry API client
pub struct NoticeClient {
    http_client: reqwest::Client,
    base_url: String,
}

impl NoticeClient {
    /// Create a client against `base_url` (no trailing slash needed).
    pub fn new(base_url: impl Into<String>) -> Result<Self, ProviderError> {
        Ok(Self {
            http_client: http::build_client(USER_AGENT)?,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Run one ladder query and return the listed summaries.
    pub async fn search(&self, query: &QueryAttempt) -> Result<Vec<NoticeRecord>, ProviderError> {
        let url = self.search_url(query);
        tracing::debug!(url = %url, "querying notice registry");

        let response: dto::NoticeListResponse = http::get_json(&self.http_client, &url).await?;
        Ok(adapter::to_records(response))
    }

    /// Fetch the detail payload behind a notice's self link.
    pub async fn detail(&self, href: &str) -> Result<NoticeRecord, ProviderError> {
        let detail: dto::NoticeDetail = http::get_json(&self.http_client, href).await?;
        Ok(adapter::detail_to_record(detail))
    }

    fn search_url(&self, query: &QueryAttempt) -> String {
        format!(
            "{}/{}?{}",
            self.base_url,
            query.notice_type,
            http::encode_query(&query.query_pairs())
        )
    }
}
