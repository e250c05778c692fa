//! Notice registry Data Transfer Objects
//!
//! These types match what the public notice API returns.
//! DO NOT use these types outside the notices module - convert to domain types.
//!
//! The list endpoint (`/{type}?...`) returns HAL-style summaries under
//! `_embedded.notices`; the detail endpoint (each summary's `_links.self`)
//! returns one notice with arrest warrants and nationality data. Yellow and
//! UN notices omit most of the warrant fields, so nearly everything is
//! optional and arrays may arrive as `null`.

use serde::{Deserialize, Serialize};

/// List endpoint response
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct NoticeListResponse {
    /// Total matches across all pages
    pub total: Option<u64>,
    #[serde(rename = "_embedded")]
    pub embedded: Option<Embedded>,
}

/// Embedded collection
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Embedded {
    #[serde(default)]
    pub notices: Option<Vec<NoticeSummary>>,
}

/// Notice summary as listed
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct NoticeSummary {
    /// Registry identifier, "YYYY/NNNNN"
    pub entity_id: Option<String>,
    pub forename: Option<String>,
    pub name: Option<String>,
    /// Date of birth, "YYYY/MM/DD"
    pub date_of_birth: Option<String>,
    pub nationalities: Option<Vec<String>>,
    #[serde(rename = "_links")]
    pub links: Option<Links>,
}

/// Full notice from the detail endpoint
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct NoticeDetail {
    pub entity_id: Option<String>,
    pub forename: Option<String>,
    pub name: Option<String>,
    pub date_of_birth: Option<String>,
    pub nationalities: Option<Vec<String>>,
    pub country_of_birth_id: Option<String>,
    pub sex_id: Option<String>,
    pub arrest_warrants: Option<Vec<ArrestWarrant>>,
    #[serde(rename = "_links")]
    pub links: Option<Links>,
}

/// Arrest warrant attached to a red notice
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ArrestWarrant {
    /// Charge text, in the issuing country's language
    pub charge: Option<String>,
    /// English translation, when the registry provides one
    pub charge_translation: Option<String>,
    pub issuing_country_id: Option<String>,
}

/// HAL links
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Links {
    #[serde(rename = "self")]
    pub self_link: Option<Link>,
    pub images: Option<Link>,
    pub thumbnail: Option<Link>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Link {
    pub href: String,
}

// ============================================================================
// CONTRACT TESTS
// These verify our DTOs match what the real API returns.
// ============================================================================

#[cfg(test)]
mod contract_tests {
    use super::*;

    #[test]
    fn test_parse_list_response() {
        let json = r#"{
            "total": 6423,
            "query": {"page": 1, "resultPerPage": 200, "nationality": "TR"},
            "_embedded": {
                "notices": [{
                    "date_of_birth": "1979/05/12",
                    "nationalities": ["TR", "DE"],
                    "entity_id": "2019/74219",
                    "forename": "AHMET",
                    "name": "EXAMPLE",
                    "_links": {
                        "self": {"href": "https://ws-public.interpol.int/notices/v1/red/2019-74219"},
                        "images": {"href": "https://ws-public.interpol.int/notices/v1/red/2019-74219/images"},
                        "thumbnail": {"href": "https://ws-public.interpol.int/notices/v1/red/2019-74219/images/61881634"}
                    }
                }]
            },
            "_links": {"self": {"href": "https://ws-public.interpol.int/notices/v1/red?page=1"}}
        }"#;

        let response: NoticeListResponse =
            serde_json::from_str(json).expect("Should parse list response");

        assert_eq!(response.total, Some(6423));
        let notices = response.embedded.unwrap().notices.unwrap();
        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].entity_id.as_deref(), Some("2019/74219"));
        assert_eq!(notices[0].nationalities.as_ref().unwrap()[1], "DE");
        let links = notices[0].links.as_ref().unwrap();
        assert!(links.thumbnail.as_ref().unwrap().href.ends_with("61881634"));
    }

    #[test]
    fn test_parse_empty_list() {
        let json = r#"{"total": 0, "_embedded": {"notices": []}}"#;
        let response: NoticeListResponse = serde_json::from_str(json).unwrap();
        assert!(response.embedded.unwrap().notices.unwrap().is_empty());
    }

    #[test]
    fn test_parse_list_without_embedded() {
        let response: NoticeListResponse = serde_json::from_str(r#"{"total": 0}"#).unwrap();
        assert!(response.embedded.is_none());
    }

    #[test]
    fn test_parse_detail_with_warrants() {
        let json = r#"{
            "arrest_warrants": [{
                "charge": "Tentativa de homicidio",
                "issuing_country_id": "AR",
                "charge_translation": "Attempted homicide"
            }],
            "weight": 70,
            "forename": "JUAN",
            "date_of_birth": "1985/02/03",
            "entity_id": "2021/1234",
            "nationalities": ["AR"],
            "country_of_birth_id": "AR",
            "sex_id": "M",
            "name": "EJEMPLO",
            "_links": {"self": {"href": "https://ws-public.interpol.int/notices/v1/red/2021-1234"}}
        }"#;

        let detail: NoticeDetail = serde_json::from_str(json).expect("Should parse detail");

        let warrants = detail.arrest_warrants.unwrap();
        assert_eq!(warrants[0].charge.as_deref(), Some("Tentativa de homicidio"));
        assert_eq!(warrants[0].charge_translation.as_deref(), Some("Attempted homicide"));
        assert_eq!(detail.country_of_birth_id.as_deref(), Some("AR"));
    }

    #[test]
    fn test_parse_yellow_detail_with_nulls() {
        let json = r#"{
            "arrest_warrants": null,
            "nationalities": null,
            "country_of_birth_id": null,
            "forename": "MARIA",
            "name": "MISSING",
            "entity_id": "2022/999"
        }"#;

        let detail: NoticeDetail = serde_json::from_str(json).expect("Should parse nulls");
        assert!(detail.arrest_warrants.is_none());
        assert!(detail.nationalities.is_none());
        assert!(detail.links.is_none());
    }
}
