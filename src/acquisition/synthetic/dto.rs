//! Person generator Data Transfer Objects
//!
//! These types match the random-person API response.
//! DO NOT use these types outside the synthetic module - convert to domain types.

use serde::{Deserialize, Serialize};

/// Generator response
///
/// On overload the service answers 200 with only an `error` string.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneratorResponse {
    #[serde(default)]
    pub results: Vec<Person>,
    pub error: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Person {
    pub name: Option<Name>,
    pub location: Option<Location>,
    /// Two-letter nationality code, uppercase
    pub nat: Option<String>,
    pub picture: Option<Picture>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Name {
    pub title: Option<String>,
    pub first: Option<String>,
    pub last: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Location {
    pub country: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Picture {
    pub large: Option<String>,
    pub medium: Option<String>,
    pub thumbnail: Option<String>,
}

// ============================================================================
// CONTRACT TESTS
// These verify our DTOs match what the real API returns.
// ============================================================================
