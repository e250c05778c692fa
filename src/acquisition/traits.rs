//! Trait definitions for external provider clients.
//!
//! These traits enable dependency injection and mocking for tests.
//! Production code uses the real HTTP clients, while tests substitute
//! scripted implementations from [`mocks`].

use async_trait::async_trait;

use super::domain::{GeneratedPerson, NoticeRecord, ProviderError, SearchHit};
use super::plan::QueryAttempt;
use super::profiles::SearchQuery;

/// Notice registry: summary search plus per-notice detail fetch.
#[async_trait]
pub trait NoticeApi: Send + Sync {
    /// Run one registry query. An empty vector is a valid, empty answer.
    async fn search(&self, query: &QueryAttempt) -> Result<Vec<NoticeRecord>, ProviderError>;

    /// Fetch the richer payload behind a notice's self link.
    async fn detail(&self, href: &str) -> Result<NoticeRecord, ProviderError>;
}

/// Site-scoped web search used for profile lookup.
#[async_trait]
pub trait ProfileSearchApi: Send + Sync {
    async fn search(&self, query: &SearchQuery) -> Result<Vec<SearchHit>, ProviderError>;
}

/// Synthetic person generator used as a neutral fallback.
#[async_trait]
pub trait PersonGeneratorApi: Send + Sync {
    async fn generate(&self, nationalities: &[&str]) -> Result<Vec<GeneratedPerson>, ProviderError>;
}

// Implement traits for real clients

#[async_trait]
impl NoticeApi for super::notices::NoticeClient {
    async fn search(&self, query: &QueryAttempt) -> Result<Vec<NoticeRecord>, ProviderError> {
        self.search(query).await
    }

    async fn detail(&self, href: &str) -> Result<NoticeRecord, ProviderError> {
        self.detail(href).await
    }
}

#[async_trait]
impl ProfileSearchApi for super::profiles::SearchClient {
    async fn search(&self, query: &SearchQuery) -> Result<Vec<SearchHit>, ProviderError> {
        self.search(query).await
    }
}

#[async_trait]
impl PersonGeneratorApi for super::synthetic::GeneratorClient {
    async fn generate(&self, nationalities: &[&str]) -> Result<Vec<GeneratedPerson>, ProviderError> {
        self.generate(nationalities).await
    }
}
