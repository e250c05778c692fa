//! Person generator HTTP client

use super::{adapter, dto};
use crate::acquisition::domain::{GeneratedPerson, ProviderError};
use crate::acquisition::http;

/// Default generator endpoint
pub const DEFAULT_BASE_URL: &str = "https://randomuser.me/api/";

const USER_AGENT: &str = concat!("dossier/", env!("CARGO_PKG_VERSION"));

/// Random person generator client
pub struct GeneratorClient {
    http_client: reqwest::Client,
    base_url: String,
}

impl GeneratorClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self, ProviderError> {
        Ok(Self {
            http_client: http::build_client(USER_AGENT)?,
            base_url: base_url.into(),
        })
    }

    /// Generate people drawn from the given nationality codes.
    pub async fn generate(&self, nationalities: &[&str]) -> Result<Vec<GeneratedPerson>, ProviderError> {
        let url = self.generate_url(nationalities);
        tracing::debug!(url = %url, "querying person generator");

        let response: dto::GeneratorResponse = http::get_json(&self.http_client, &url).await?;
        adapter::to_people(response)
    }

    fn generate_url(&self, nationalities: &[&str]) -> String {
        if nationalities.is_empty() {
            return self.base_url.clone();
        }
        format!("{}?nat={}", self.base_url, nationalities.join(","))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_url() {
        let client = GeneratorClient::new(DEFAULT_BASE_URL).unwrap();
        assert_eq!(
            client.generate_url(&["tr", "us", "gb"]),
            "https://randomuser.me/api/?nat=tr,us,gb"
        );
        assert_eq!(client.generate_url(&[]), "https://randomuser.me/api/");
    }
}
