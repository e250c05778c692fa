//! Zero-network fallback assembled from the embedded tables.

use super::catalog::{self, UNKNOWN_COUNTRY};
use super::domain::{Category, OfflineEntry};
use super::random::{RandomSource, pick};
use super::synthetic::detail_for;

/// Assemble an entry with a fair coin flip between the two categories.
pub fn offline_entry(random: &dyn RandomSource) -> OfflineEntry {
    let category = if random.coin() {
        Category::Registry
    } else {
        Category::Profile
    };
    entry_for(category, random)
}

/// Assemble an entry for a fixed category.
pub fn entry_for(category: Category, random: &dyn RandomSource) -> OfflineEntry {
    let name = pick(random, catalog::OFFLINE_NAMES).copied().unwrap_or_default();
    let photo = pick(random, catalog::OFFLINE_PHOTOS).copied().unwrap_or_default();
    let country = pick(random, catalog::OFFLINE_COUNTRIES)
        .copied()
        .unwrap_or(UNKNOWN_COUNTRY);

    let detail = match category {
        Category::Registry => detail_for(category, random),
        Category::Profile => pick(random, catalog::OFFLINE_OCCUPATIONS)
            .copied()
            .unwrap_or_else(|| detail_for(category, random)),
    };

    OfflineEntry {
        category,
        name,
        photo,
        country,
        detail,
    }
}
