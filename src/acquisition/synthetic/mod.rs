//! Synthetic person fallback
//!
//! When the registry and the search provider both come up empty, a neutral
//! random-person API supplies a name, nationality and portrait, and a local
//! label list supplies the detail.

pub mod dto;
mod adapter;
mod client;
mod fallback;

pub use client::{DEFAULT_BASE_URL, GeneratorClient};
pub use fallback::{
    PROFILE_NATIONALITIES, REGISTRY_NATIONALITIES, detail_for, generate_record, nationalities_for,
};
