//! Query plans for the notice registry ladder.
//!
//! A [`ProviderQueryPlan`] is computed once per notice type per acquisition
//! and walked front to back; the first attempt that returns records ends the
//! walk. Reordering or extending the ladder is a change to this data, not to
//! the loop that consumes it.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::catalog;
use super::domain::NoticeType;
use super::random::{RandomSource, pick};

/// How much of the ladder to walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LadderMode {
    /// Random country, then every priority country, then global
    #[default]
    Full,
    /// Random country, then global; for latency-sensitive callers
    Light,
}

/// Filter applied to one registry query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoticeScope {
    Nationality(String),
    Global,
}

impl fmt::Display for NoticeScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NoticeScope::Nationality(code) => f.write_str(code),
            NoticeScope::Global => f.write_str("global"),
        }
    }
}

/// One registry query: which feed, which filter, which page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryAttempt {
    pub notice_type: NoticeType,
    pub scope: NoticeScope,
    pub results_per_page: u32,
}

impl QueryAttempt {
    /// Query-string parameters, in the order the registry documents them.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::with_capacity(3);
        if let NoticeScope::Nationality(code) = &self.scope {
            pairs.push(("nationality", code.clone()));
        }
        pairs.push(("resultPerPage", self.results_per_page.to_string()));
        pairs.push(("page", "1".to_string()));
        pairs
    }

    /// Step name used in diagnostics, e.g. "red:TR".
    pub fn step_name(&self) -> String {
        format!("{}:{}", self.notice_type, self.scope)
    }
}

impl fmt::Display for QueryAttempt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let query = self
            .query_pairs()
            .into_iter()
            .map(|(k, v)| format!("{k}={v}"))
            .collect::<Vec<_>>()
            .join("&");
        write!(f, "{}?{}", self.notice_type, query)
    }
}

/// Ordered, immutable list of registry queries for one notice type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderQueryPlan {
    notice_type: NoticeType,
    attempts: Vec<QueryAttempt>,
}

impl ProviderQueryPlan {
    /// Build the ladder for `notice_type`.
    ///
    /// One random country from the country table comes first, then (in full
    /// mode) the priority countries, then one unfiltered global query.
    /// Repeats are allowed.
    pub fn for_notices(
        notice_type: NoticeType,
        mode: LadderMode,
        priority_countries: &[String],
        results_per_page: u32,
        random: &dyn RandomSource,
    ) -> Self {
        let codes: Vec<&str> = catalog::country_codes().collect();
        let mut countries: Vec<String> = pick(random, &codes)
            .map(|code| code.to_string())
            .into_iter()
            .collect();

        if mode == LadderMode::Full {
            countries.extend(priority_countries.iter().cloned());
        }

        let attempts = countries
            .into_iter()
            .map(NoticeScope::Nationality)
            .chain(std::iter::once(NoticeScope::Global))
            .map(|scope| QueryAttempt {
                notice_type,
                scope,
                results_per_page,
            })
            .collect();

        Self {
            notice_type,
            attempts,
        }
    }

    pub fn notice_type(&self) -> NoticeType {
        self.notice_type
    }

    pub fn attempts(&self) -> &[QueryAttempt] {
        &self.attempts
    }

    pub fn len(&self) -> usize {
        self.attempts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attempts.is_empty()
    }
}
