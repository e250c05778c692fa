//! Profile lookup over the web search provider.

use std::time::Duration;

use crate::acquisition::attempt::{AttemptLog, Provider, attempt};
use crate::acquisition::catalog::{self, Occupation, UNKNOWN_COUNTRY};
use crate::acquisition::domain::{ProviderError, RawRecord};
use crate::acquisition::random::{RandomSource, pick};
use crate::acquisition::traits::ProfileSearchApi;

/// Shown when a result title does not look like a person's name.
pub const PLACEHOLDER_NAME: &str = "Linkedin Kullanıcısı";

/// Longer parsed names are assumed to be page junk.
const MAX_NAME_CHARS: usize = 30;

/// The search API refuses result offsets past this one.
const DEEPEST_START: u32 = 90;

/// One site-scoped search request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    pub q: String,
    /// 1-based result offset
    pub start: u32,
}

impl SearchQuery {
    /// `site:<site> "<occupation>"`, starting at a random page.
    pub fn for_occupation(site: &str, occupation: &Occupation, random: &dyn RandomSource) -> Self {
        Self {
            q: format!("site:{site} \"{}\"", occupation.en),
            start: page_start(random),
        }
    }
}

/// Pick a page start from 1, 11, ..., 91; anything past the deep-paging
/// limit falls back to the first page.
pub fn page_start(random: &dyn RandomSource) -> u32 {
    let start = random.index(10) as u32 * 10 + 1;
    if start > DEEPEST_START { 1 } else { start }
}

/// Extract a person's name from a result title such as
/// "Jane Roe - Software Engineer - Acme | LinkedIn".
pub fn parse_display_name(title: &str) -> String {
    let head = title.split('|').next().unwrap_or_default();
    let head = head.replacen(" - LinkedIn", "", 1);
    let name = head.trim().split('-').next().unwrap_or_default().trim();

    if name.is_empty() || name.chars().count() > MAX_NAME_CHARS {
        PLACEHOLDER_NAME.to_string()
    } else {
        name.to_string()
    }
}

/// Look up one professional profile.
///
/// `api` is `None` when search credentials are not configured; that is
/// reported as [`ProviderError::MissingCredentials`] without any network
/// traffic. Results without an image do not qualify.
pub async fn lookup_profile(
    api: Option<&dyn ProfileSearchApi>,
    site: &str,
    random: &dyn RandomSource,
    timeout: Duration,
    log: &mut AttemptLog,
) -> Result<RawRecord, ProviderError> {
    let Some(api) = api else {
        return attempt(log, Provider::Profiles, "search", timeout, async {
            Err(ProviderError::MissingCredentials)
        })
        .await;
    };

    let occupation = pick(random, catalog::OCCUPATIONS).ok_or(ProviderError::Empty)?;
    let query = SearchQuery::for_occupation(site, occupation, random);

    let hits = attempt(log, Provider::Profiles, "search", timeout, async {
        let hits = api.search(&query).await?;
        if hits.is_empty() {
            return Err(ProviderError::Empty);
        }
        let with_images: Vec<_> = hits.into_iter().filter(|h| h.image.is_some()).collect();
        if with_images.is_empty() {
            return Err(ProviderError::NoImages);
        }
        Ok(with_images)
    })
    .await?;

    let hit = pick(random, &hits).cloned().ok_or(ProviderError::NoImages)?;
    let country = pick(random, catalog::SAFE_COUNTRIES)
        .copied()
        .unwrap_or(UNKNOWN_COUNTRY);

    Ok(RawRecord::Profile {
        display_name: parse_display_name(&hit.title),
        hit,
        occupation,
        country,
    })
}
