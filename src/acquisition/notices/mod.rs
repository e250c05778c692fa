//! Public notice registry integration
//!
//! Lists red, yellow and UN notices filtered by nationality, and fetches the
//! detail payload (arrest warrants, nationalities) behind each notice's self
//! link. The ladder in [`ladder`] walks a [`ProviderQueryPlan`] over this
//! client.
//!
//! [`ProviderQueryPlan`]: crate::acquisition::plan::ProviderQueryPlan

pub mod dto;
mod adapter;
mod client;
mod ladder;

pub use client::{DEFAULT_BASE_URL, NoticeClient};
pub use ladder::fetch_notice;
