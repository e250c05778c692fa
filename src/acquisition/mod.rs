//! Record acquisition
//!
//! Fetches one photograph-with-attributes record from unreliable external
//! providers and normalizes it into a [`CanonicalRecord`].
//!
//! # Architecture
//!
//! ```text
//! SourceOrchestrator (service.rs)
//!   ├── notices/    registry ladder: plan → search → pick → detail
//!   ├── profiles/   site-scoped web search for professionals
//!   ├── synthetic/  random-person generator fallback
//!   └── offline.rs  embedded tables, no network
//!        ↓ RawRecord
//! normalize.rs → classifier.rs (charge text → CrimeLabel)
//!        ↓
//! CanonicalRecord
//! ```
//!
//! Provider DTOs never leave their module: each provider's adapter converts
//! them into the domain types in [`domain`]. Every external call goes
//! through [`attempt::attempt`], which bounds it with a timeout and records
//! an [`AttemptEvent`].

pub mod attempt;
pub mod catalog;
pub mod classifier;
pub mod domain;
mod http;
pub mod normalize;
pub mod notices;
pub mod offline;
pub mod plan;
pub mod profiles;
pub mod random;
pub mod service;
pub mod synthetic;
pub mod traits;

pub use attempt::{AttemptEvent, Outcome, Provider};
pub use classifier::{CrimeLabel, classify};
pub use domain::{AcquisitionError, CanonicalRecord, Category, NoticeType, ProviderError};
pub use plan::{LadderMode, ProviderQueryPlan};
pub use random::{RandomSource, SeededRandom, ThreadRandom};
pub use service::{AcquisitionSettings, SourceOrchestrator};
