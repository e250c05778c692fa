//! Internal domain models for record acquisition.
//!
//! These types are OUR types - they don't change when a provider changes its
//! JSON. Every provider response is converted into one of the raw payloads
//! below by that provider's adapter, and the normalizer turns raw payloads
//! into [`CanonicalRecord`]s.

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::catalog::Occupation;

/// The two disjoint record categories a photograph can belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Category {
    /// A sought individual from the public notice registry
    Registry,
    /// A civilian professional from the web-search profile lookup
    Profile,
}

impl Category {
    /// The category used as a substitute when this one is exhausted.
    pub fn other(self) -> Self {
        match self {
            Category::Registry => Category::Profile,
            Category::Profile => Category::Registry,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Registry => "REGISTRY",
            Category::Profile => "PROFILE",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Notice feeds offered by the registry, in ladder order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeType {
    Red,
    Yellow,
    Un,
}

impl NoticeType {
    /// Ladder order: red, then yellow, then UN.
    pub const LADDER: [NoticeType; 3] = [NoticeType::Red, NoticeType::Yellow, NoticeType::Un];

    /// Path segment used by the registry API.
    pub fn as_str(self) -> &'static str {
        match self {
            NoticeType::Red => "red",
            NoticeType::Yellow => "yellow",
            NoticeType::Un => "un",
        }
    }

    /// Public listing page the deep link anchors into.
    pub fn listing_page(self) -> &'static str {
        match self {
            NoticeType::Red => "Red-Notices/View-Red-Notices",
            NoticeType::Yellow => "Yellow-Notices/View-Yellow-Notices",
            NoticeType::Un => "UN-Notices/View-UN-Notices",
        }
    }
}

impl fmt::Display for NoticeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for NoticeType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "red" => Ok(NoticeType::Red),
            "yellow" => Ok(NoticeType::Yellow),
            "un" => Ok(NoticeType::Un),
            other => Err(format!("unknown notice type '{other}' (expected red, yellow or un)")),
        }
    }
}

/// The unified, fully-populated output record.
///
/// Every field is resolved at normalization time; consumers never see a
/// missing value. Only `full_name` may be empty, when upstream carried no
/// name at all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CanonicalRecord {
    pub category: Category,
    pub full_name: String,
    pub detail: String,
    pub country: String,
    pub photo_url: String,
    pub source_link: String,
}

/// A notice as seen by the registry adapter, summary or detail.
///
/// Summaries carry names, identifier and links; detail payloads add charges
/// and nationality data. Both map onto this one shape with optional fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoticeRecord {
    /// Registry identifier, e.g. "2024/12345"
    pub entity_id: Option<String>,
    /// Given name(s)
    pub forename: Option<String>,
    /// Family name
    pub name: Option<String>,
    /// Self-referencing link to the detail payload
    pub self_href: Option<String>,
    /// Thumbnail image link
    pub thumbnail_href: Option<String>,
    /// Charge descriptions from arrest warrants, in registry order
    pub charges: Vec<String>,
    /// ISO-style nationality codes
    pub nationalities: Vec<String>,
    /// ISO-style country-of-birth code
    pub country_of_birth: Option<String>,
}

impl NoticeRecord {
    /// Fill fields missing here from another payload for the same notice.
    pub fn merge(&mut self, other: &NoticeRecord) {
        if self.entity_id.is_none() {
            self.entity_id = other.entity_id.clone();
        }
        if self.forename.is_none() {
            self.forename = other.forename.clone();
        }
        if self.name.is_none() {
            self.name = other.name.clone();
        }
        if self.self_href.is_none() {
            self.self_href = other.self_href.clone();
        }
        if self.thumbnail_href.is_none() {
            self.thumbnail_href = other.thumbnail_href.clone();
        }
        if self.charges.is_empty() {
            self.charges = other.charges.clone();
        }
        if self.nationalities.is_empty() {
            self.nationalities = other.nationalities.clone();
        }
        if self.country_of_birth.is_none() {
            self.country_of_birth = other.country_of_birth.clone();
        }
    }
}

/// A single web-search result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchHit {
    /// Page title, usually "Name - Role | Site"
    pub title: String,
    /// Result URL
    pub link: String,
    /// First associated page image, if the result exposes one
    pub image: Option<String>,
}

/// A person produced by the synthetic generator.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeneratedPerson {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    /// Two-letter nationality code
    pub nationality: Option<String>,
    /// Country name as reported by the generator
    pub country: Option<String>,
    pub large_photo: Option<String>,
    pub medium_photo: Option<String>,
}

/// An entry assembled from the embedded offline tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OfflineEntry {
    pub category: Category,
    pub name: &'static str,
    pub photo: &'static str,
    pub country: &'static str,
    pub detail: &'static str,
}

/// Raw provider output, tagged by the provider that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawRecord {
    Notice {
        notice_type: NoticeType,
        record: NoticeRecord,
    },
    Profile {
        display_name: String,
        hit: SearchHit,
        occupation: &'static Occupation,
        country: &'static str,
    },
    Synthetic {
        category: Category,
        person: GeneratedPerson,
        detail: &'static str,
    },
    Offline(OfflineEntry),
}

/// Errors raised at a provider adapter boundary.
///
/// Every variant means "this attempt failed, advance the ladder"; none of
/// them is fatal to an acquisition.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProviderError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("HTTP {status}: {reason}")]
    Http { status: u16, reason: String },

    #[error("Request timed out after {0:?}")]
    Timeout(Duration),

    #[error("Failed to parse response: {0}")]
    Parse(String),

    #[error("Provider returned no usable records")]
    Empty,

    #[error("No result exposes an image")]
    NoImages,

    #[error("Provider credentials are not configured")]
    MissingCredentials,

    #[error("Rate limited - try again later")]
    RateLimited,
}

impl ProviderError {
    /// Map a non-success HTTP status onto the provider error taxonomy.
    pub fn from_status(status: reqwest::StatusCode) -> Self {
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return ProviderError::RateLimited;
        }
        ProviderError::Http {
            status: status.as_u16(),
            reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
        }
    }
}

/// Errors surfaced by the orchestrator to its caller.
#[derive(Debug, thiserror::Error)]
pub enum AcquisitionError {
    /// Every provider step, the synthetic generator and (when enabled) the
    /// offline table failed.
    #[error("All record sources exhausted after {attempts} attempts")]
    Exhausted { attempts: usize },

    /// A provider client could not be constructed.
    #[error("Provider setup failed: {0}")]
    Setup(#[from] ProviderError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_other_is_involution() {
        assert_eq!(Category::Registry.other(), Category::Profile);
        assert_eq!(Category::Profile.other().other(), Category::Profile);
    }

    #[test]
    fn test_notice_type_parse() {
        assert_eq!("RED".parse::<NoticeType>(), Ok(NoticeType::Red));
        assert_eq!(" un ".parse::<NoticeType>(), Ok(NoticeType::Un));
        assert!("blue".parse::<NoticeType>().is_err());
    }

    #[test]
    fn test_canonical_record_wire_shape() {
        let record = CanonicalRecord {
            category: Category::Registry,
            full_name: "Jane Doe".to_string(),
            detail: "Kaçakçılık".to_string(),
            country: "Fransa".to_string(),
            photo_url: "https://example.org/p.jpg".to_string(),
            source_link: "https://example.org/".to_string(),
        };

        let json = serde_json::to_value(&record).unwrap();

        assert_eq!(json["category"], "REGISTRY");
        assert_eq!(json["fullName"], "Jane Doe");
        assert_eq!(json["photoUrl"], "https://example.org/p.jpg");
        assert_eq!(json["sourceLink"], "https://example.org/");
    }

    #[test]
    fn test_notice_merge_fills_gaps_only() {
        let mut detail = NoticeRecord {
            forename: Some("JOHN".to_string()),
            charges: vec!["Fraud".to_string()],
            ..Default::default()
        };
        let summary = NoticeRecord {
            forename: Some("J.".to_string()),
            name: Some("SMITH".to_string()),
            thumbnail_href: Some("https://img/1".to_string()),
            charges: vec!["ignored".to_string()],
            ..Default::default()
        };

        detail.merge(&summary);

        assert_eq!(detail.forename.as_deref(), Some("JOHN"));
        assert_eq!(detail.name.as_deref(), Some("SMITH"));
        assert_eq!(detail.thumbnail_href.as_deref(), Some("https://img/1"));
        assert_eq!(detail.charges, vec!["Fraud".to_string()]);
    }

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            ProviderError::from_status(reqwest::StatusCode::TOO_MANY_REQUESTS),
            ProviderError::RateLimited
        );
        assert!(matches!(
            ProviderError::from_status(reqwest::StatusCode::FORBIDDEN),
            ProviderError::Http { status: 403, .. }
        ));
    }
}
