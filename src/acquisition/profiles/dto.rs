//! Web search Data Transfer Objects
//!
//! These types match the Custom Search JSON API response.
//! DO NOT use these types outside the profiles module - convert to domain types.

use serde::{Deserialize, Serialize};

/// Search response
///
/// `items` is absent (not empty) when a query has no results.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub items: Option<Vec<SearchItem>>,
}

/// One search result
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SearchItem {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub link: String,
    pub pagemap: Option<PageMap>,
}

/// Structured data the engine extracted from the page
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PageMap {
    pub cse_image: Option<Vec<CseImage>>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CseImage {
    pub src: String,
}

// ============================================================================
// CONTRACT TESTS
// These verify our DTOs match what the real API returns.
// ============================================================================

#[cfg(test)]
mod contract_tests {
    use super::*;

    #[test]
    fn test_parse_search_response() {
        let json = r#"{
            "kind": "customsearch#search",
            "searchInformation": {"totalResults": "1240"},
            "items": [
                {
                    "kind": "customsearch#result",
                    "title": "Jane Roe - Software Engineer - Acme | LinkedIn",
                    "link": "https://www.linkedin.com/in/janeroe",
                    "pagemap": {
                        "cse_thumbnail": [{"src": "https://encrypted-tbn0.example/t.jpg", "width": "225", "height": "225"}],
                        "cse_image": [{"src": "https://media.licdn.com/dms/image/jane.jpg"}],
                        "person": [{"name": "Jane Roe", "role": "Software Engineer"}]
                    }
                },
                {
                    "title": "John Poe | LinkedIn",
                    "link": "https://www.linkedin.com/in/johnpoe"
                }
            ]
        }"#;

        let response: SearchResponse =
            serde_json::from_str(json).expect("Should parse search response");

        let items = response.items.unwrap();
        assert_eq!(items.len(), 2);
        let pagemap = items[0].pagemap.as_ref().unwrap();
        assert_eq!(
            pagemap.cse_image.as_ref().unwrap()[0].src,
            "https://media.licdn.com/dms/image/jane.jpg"
        );
        assert!(items[1].pagemap.is_none());
    }

    #[test]
    fn test_parse_response_without_items() {
        let json = r#"{"kind": "customsearch#search", "searchInformation": {"totalResults": "0"}}"#;
        let response: SearchResponse = serde_json::from_str(json).unwrap();
        assert!(response.items.is_none());
    }
}
