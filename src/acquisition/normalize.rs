//! Record normalizer: the ONLY place raw provider payloads become
//! [`CanonicalRecord`]s.
//!
//! Every fallback rule for incomplete upstream data lives here, so consumers
//! never see a missing field:
//! - name: given + family name, trimmed (may be empty)
//! - photo: first usable image, upgraded to https, else a placeholder
//! - country: code looked up in the country table, else the raw code, else
//!   a placeholder
//! - link: deep link from the record identifier, else the provider homepage

use super::catalog::{self, UNKNOWN_COUNTRY};
use super::classifier;
use super::domain::{
    CanonicalRecord, Category, GeneratedPerson, NoticeRecord, NoticeType, OfflineEntry, RawRecord,
    SearchHit,
};

/// Image shown when no photo can be resolved.
pub const PLACEHOLDER_PHOTO: &str = "https://placehold.co/400x400?text=No+Photo";

/// Registry homepage, used when a notice has no identifier.
pub const REGISTRY_HOME: &str = "https://www.interpol.int/";

/// Profile site homepage, used for generated profiles.
pub const PROFILE_HOME: &str = "https://www.linkedin.com/";

const NOTICE_LINK_BASE: &str = "https://www.interpol.int/en/How-we-work/Notices/";

/// Convert any raw provider payload into a canonical record.
pub fn normalize(raw: RawRecord) -> CanonicalRecord {
    match raw {
        RawRecord::Notice { notice_type, record } => normalize_notice(notice_type, &record),
        RawRecord::Profile {
            display_name,
            hit,
            occupation,
            country,
        } => normalize_profile(display_name, &hit, occupation.tr, country),
        RawRecord::Synthetic {
            category,
            person,
            detail,
        } => normalize_synthetic(category, &person, detail),
        RawRecord::Offline(entry) => normalize_offline(entry),
    }
}

fn normalize_notice(notice_type: NoticeType, record: &NoticeRecord) -> CanonicalRecord {
    let charge = record
        .charges
        .iter()
        .map(|c| c.trim())
        .find(|c| !c.is_empty());

    let country_code = record
        .nationalities
        .iter()
        .map(|c| c.as_str())
        .find(|c| !c.trim().is_empty())
        .or(record.country_of_birth.as_deref());

    CanonicalRecord {
        category: Category::Registry,
        full_name: join_name(record.forename.as_deref(), record.name.as_deref()),
        detail: classifier::classify(charge).as_str().to_string(),
        country: resolve_country(country_code),
        photo_url: resolve_photo(&[record.thumbnail_href.as_deref()]),
        source_link: notice_link(notice_type, record.entity_id.as_deref()),
    }
}

fn normalize_profile(
    display_name: String,
    hit: &SearchHit,
    occupation: &str,
    country: &str,
) -> CanonicalRecord {
    CanonicalRecord {
        category: Category::Profile,
        full_name: display_name.trim().to_string(),
        detail: occupation.to_string(),
        country: country.to_string(),
        photo_url: resolve_photo(&[hit.image.as_deref()]),
        source_link: ensure_https(&hit.link).unwrap_or_else(|| PROFILE_HOME.to_string()),
    }
}

fn normalize_synthetic(
    category: Category,
    person: &GeneratedPerson,
    detail: &str,
) -> CanonicalRecord {
    let country = match person.nationality.as_deref().and_then(catalog::country_name) {
        Some(name) => name.to_string(),
        None => match person.country.as_deref().map(str::trim).filter(|c| !c.is_empty()) {
            Some(reported) => reported.to_string(),
            None => resolve_country(person.nationality.as_deref()),
        },
    };

    CanonicalRecord {
        category,
        full_name: join_name(person.first_name.as_deref(), person.last_name.as_deref()),
        detail: detail.to_string(),
        country,
        photo_url: resolve_photo(&[person.large_photo.as_deref(), person.medium_photo.as_deref()]),
        source_link: home_link(category).to_string(),
    }
}

fn normalize_offline(entry: OfflineEntry) -> CanonicalRecord {
    CanonicalRecord {
        category: entry.category,
        full_name: entry.name.to_string(),
        detail: entry.detail.to_string(),
        country: entry.country.to_string(),
        photo_url: resolve_photo(&[Some(entry.photo)]),
        source_link: home_link(entry.category).to_string(),
    }
}

/// Provider homepage for a category.
pub fn home_link(category: Category) -> &'static str {
    match category {
        Category::Registry => REGISTRY_HOME,
        Category::Profile => PROFILE_HOME,
    }
}

/// Join given and family names, skipping blanks.
pub fn join_name(given: Option<&str>, family: Option<&str>) -> String {
    [given, family]
        .into_iter()
        .flatten()
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Localized country name for a code.
///
/// Unmapped codes pass through unchanged; absent or blank codes become the
/// unknown-country placeholder.
pub fn resolve_country(code: Option<&str>) -> String {
    match code.map(str::trim).filter(|c| !c.is_empty()) {
        Some(code) => catalog::country_name(code)
            .map(str::to_string)
            .unwrap_or_else(|| code.to_string()),
        None => UNKNOWN_COUNTRY.to_string(),
    }
}

/// First candidate that resolves to an absolute https URL, else the
/// placeholder.
pub fn resolve_photo(candidates: &[Option<&str>]) -> String {
    candidates
        .iter()
        .flatten()
        .find_map(|url| ensure_https(url))
        .unwrap_or_else(|| PLACEHOLDER_PHOTO.to_string())
}

/// Upgrade a URL to https.
///
/// `http://` and protocol-relative `//` URLs are rewritten; anything that is
/// not an absolute web URL yields `None`.
pub fn ensure_https(url: &str) -> Option<String> {
    let url = url.trim();
    let upgraded = if url.starts_with("https://") {
        url.to_string()
    } else if let Some(rest) = url.strip_prefix("http://") {
        format!("https://{rest}")
    } else if let Some(rest) = url.strip_prefix("//") {
        format!("https://{rest}")
    } else {
        return None;
    };

    // Reject a bare scheme with no host
    if upgraded.len() <= "https://".len() {
        return None;
    }
    Some(upgraded)
}

/// Deep link into the public listing for a notice.
///
/// Registry identifiers look like "2024/12345"; the listing anchors them as
/// "2024-12345".
pub fn notice_link(notice_type: NoticeType, entity_id: Option<&str>) -> String {
    match entity_id.map(str::trim).filter(|id| !id.is_empty()) {
        Some(id) => format!(
            "{NOTICE_LINK_BASE}{}#{}",
            notice_type.listing_page(),
            id.replacen('/', "-", 1)
        ),
        None => REGISTRY_HOME.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::acquisition::catalog::OCCUPATIONS;
    use crate::acquisition::classifier::CrimeLabel;

    fn assert_populated(record: &CanonicalRecord) {
        assert!(!record.detail.is_empty(), "detail empty: {record:?}");
        assert!(!record.country.is_empty(), "country empty: {record:?}");
        assert!(record.photo_url.starts_with("https://"), "photo: {record:?}");
        assert!(record.source_link.starts_with("https://"), "link: {record:?}");
    }

    #[test]
    fn test_country_code_maps_to_localized_name() {
        assert_eq!(resolve_country(Some("TR")), "Türkiye");
    }

    #[test]
    fn test_unmapped_country_code_passes_through() {
        assert_eq!(resolve_country(Some("ZW")), "ZW");
    }

    #[test]
    fn test_absent_country_uses_placeholder() {
        assert_eq!(resolve_country(None), UNKNOWN_COUNTRY);
        assert_eq!(resolve_country(Some("  ")), UNKNOWN_COUNTRY);
    }

    #[test]
    fn test_ensure_https() {
        assert_eq!(ensure_https("https://a.b/c").as_deref(), Some("https://a.b/c"));
        assert_eq!(ensure_https("http://a.b/c").as_deref(), Some("https://a.b/c"));
        assert_eq!(ensure_https("//a.b/c").as_deref(), Some("https://a.b/c"));
        assert_eq!(ensure_https("a.b/c"), None);
        assert_eq!(ensure_https("http://"), None);
        assert_eq!(ensure_https(""), None);
    }

    #[test]
    fn test_resolve_photo_takes_first_usable() {
        let photo = resolve_photo(&[None, Some("relative.jpg"), Some("http://img/x.jpg")]);
        assert_eq!(photo, "https://img/x.jpg");
        assert_eq!(resolve_photo(&[None]), PLACEHOLDER_PHOTO);
    }

    #[test]
    fn test_join_name_trims_and_skips_blanks() {
        assert_eq!(join_name(Some(" JOHN "), Some("SMITH")), "JOHN SMITH");
        assert_eq!(join_name(None, Some("SMITH")), "SMITH");
        assert_eq!(join_name(Some(""), None), "");
    }

    #[test]
    fn test_notice_link() {
        assert_eq!(
            notice_link(NoticeType::Red, Some("2024/12345")),
            "https://www.interpol.int/en/How-we-work/Notices/Red-Notices/View-Red-Notices#2024-12345"
        );
        assert!(notice_link(NoticeType::Yellow, Some("2020/1")).contains("Yellow-Notices"));
        assert_eq!(notice_link(NoticeType::Un, None), REGISTRY_HOME);
    }

    #[test]
    fn test_normalize_full_notice() {
        let record = NoticeRecord {
            entity_id: Some("2023/555".to_string()),
            forename: Some("JANE".to_string()),
            name: Some("DOE".to_string()),
            thumbnail_href: Some("http://img/thumb".to_string()),
            charges: vec!["".to_string(), "Attempted murder".to_string()],
            nationalities: vec!["FR".to_string()],
            ..Default::default()
        };

        let canonical = normalize(RawRecord::Notice {
            notice_type: NoticeType::Red,
            record,
        });

        assert_eq!(canonical.category, Category::Registry);
        assert_eq!(canonical.full_name, "JANE DOE");
        assert_eq!(canonical.detail, CrimeLabel::AttemptedHomicide.as_str());
        assert_eq!(canonical.country, "Fransa");
        assert_eq!(canonical.photo_url, "https://img/thumb");
        assert!(canonical.source_link.ends_with("#2023-555"));
    }

    #[test]
    fn test_normalize_empty_notice_is_fully_populated() {
        let canonical = normalize(RawRecord::Notice {
            notice_type: NoticeType::Yellow,
            record: NoticeRecord::default(),
        });

        assert_populated(&canonical);
        assert_eq!(canonical.full_name, "");
        assert_eq!(canonical.detail, CrimeLabel::Wanted.as_str());
        assert_eq!(canonical.country, UNKNOWN_COUNTRY);
        assert_eq!(canonical.photo_url, PLACEHOLDER_PHOTO);
        assert_eq!(canonical.source_link, REGISTRY_HOME);
    }

    #[test]
    fn test_notice_country_of_birth_fallback() {
        let canonical = normalize(RawRecord::Notice {
            notice_type: NoticeType::Red,
            record: NoticeRecord {
                country_of_birth: Some("DE".to_string()),
                ..Default::default()
            },
        });
        assert_eq!(canonical.country, "Almanya");
    }

    #[test]
    fn test_normalize_profile() {
        let canonical = normalize(RawRecord::Profile {
            display_name: "Ada Lovelace".to_string(),
            hit: SearchHit {
                title: "Ada Lovelace - Engineer | LinkedIn".to_string(),
                link: "https://www.linkedin.com/in/ada".to_string(),
                image: Some("//media.example/ada.jpg".to_string()),
            },
            occupation: &OCCUPATIONS[1],
            country: "Hollanda",
        });

        assert_eq!(canonical.category, Category::Profile);
        assert_eq!(canonical.detail, "Yazılım Mühendisi");
        assert_eq!(canonical.photo_url, "https://media.example/ada.jpg");
        assert_eq!(canonical.source_link, "https://www.linkedin.com/in/ada");
        assert_populated(&canonical);
    }

    #[test]
    fn test_normalize_synthetic_prefers_mapped_country() {
        let person = GeneratedPerson {
            first_name: Some("Ali".to_string()),
            last_name: Some("Veli".to_string()),
            nationality: Some("TR".to_string()),
            country: Some("Turkey".to_string()),
            large_photo: None,
            medium_photo: Some("https://randomuser.me/api/portraits/med/men/1.jpg".to_string()),
        };

        let canonical = normalize(RawRecord::Synthetic {
            category: Category::Profile,
            person,
            detail: "Doktor",
        });

        assert_eq!(canonical.full_name, "Ali Veli");
        assert_eq!(canonical.country, "Türkiye");
        assert!(canonical.photo_url.contains("/med/"));
        assert_eq!(canonical.source_link, PROFILE_HOME);
    }

    #[test]
    fn test_normalize_synthetic_uses_reported_country() {
        let person = GeneratedPerson {
            nationality: Some("IR".to_string()),
            country: Some("Iran".to_string()),
            ..Default::default()
        };

        let canonical = normalize(RawRecord::Synthetic {
            category: Category::Registry,
            person,
            detail: CrimeLabel::Fraud.as_str(),
        });

        assert_eq!(canonical.country, "Iran");
        assert_eq!(canonical.source_link, REGISTRY_HOME);
        assert_populated(&canonical);
    }
}
