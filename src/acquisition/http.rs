//! Shared HTTP plumbing for the provider clients.

use std::time::Duration;

use serde::de::DeserializeOwned;

use super::domain::ProviderError;

/// Connection establishment cap; the per-attempt timeout bounds the rest.
const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// Build a gzip-capable client with the given User-Agent.
pub fn build_client(user_agent: &str) -> Result<reqwest::Client, ProviderError> {
    reqwest::Client::builder()
        .gzip(true)
        .user_agent(user_agent)
        .connect_timeout(CONNECT_TIMEOUT)
        .build()
        .map_err(|e| ProviderError::Network(format!("Failed to build HTTP client: {e}")))
}

/// GET `url` and decode a JSON body.
///
/// Transport failures, non-2xx statuses and undecodable bodies all become
/// [`ProviderError`]s.
pub async fn get_json<T: DeserializeOwned>(
    client: &reqwest::Client,
    url: &str,
) -> Result<T, ProviderError> {
    let response = client
        .get(url)
        .header(reqwest::header::ACCEPT, "application/json")
        .send()
        .await
        .map_err(|e| ProviderError::Network(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        return Err(ProviderError::from_status(status));
    }

    response
        .json::<T>()
        .await
        .map_err(|e| ProviderError::Parse(e.to_string()))
}

/// Encode query pairs as `k=v&k=v`.
pub fn encode_query(pairs: &[(&str, String)]) -> String {
    pairs
        .iter()
        .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&")
}
