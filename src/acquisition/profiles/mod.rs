//! Professional profile lookup via site-scoped web search
//!
//! Searches a professional networking site for a random occupation and
//! turns one image-bearing result into a profile record.

pub mod dto;
mod adapter;
mod client;
mod lookup;

pub use client::{DEFAULT_BASE_URL, SearchClient};
pub use lookup::{PLACEHOLDER_NAME, SearchQuery, lookup_profile, page_start, parse_display_name};
