//! Adapter layer: Convert notice DTOs to domain models
//!
//! This is the ONLY place where notice DTO types are converted to domain
//! types. If the registry changes its response format, only this file and
//! dto.rs need to change.

use super::dto;
use crate::acquisition::domain::NoticeRecord;

/// Convert a list response into notice summaries.
///
/// A missing `_embedded` block or a `null` notice array is an empty answer,
/// not an error.
pub fn to_records(response: dto::NoticeListResponse) -> Vec<NoticeRecord> {
    response
        .embedded
        .and_then(|e| e.notices)
        .unwrap_or_default()
        .into_iter()
        .map(summary_to_record)
        .collect()
}

/// Convert a single list entry.
pub fn summary_to_record(summary: dto::NoticeSummary) -> NoticeRecord {
    let (self_href, thumbnail_href) = split_links(summary.links);
    NoticeRecord {
        entity_id: non_blank(summary.entity_id),
        forename: non_blank(summary.forename),
        name: non_blank(summary.name),
        self_href,
        thumbnail_href,
        charges: vec![],
        nationalities: summary.nationalities.unwrap_or_default(),
        country_of_birth: None,
    }
}

/// Convert a detail payload.
///
/// Each warrant contributes its charge text, falling back to the English
/// translation when the original is blank.
pub fn detail_to_record(detail: dto::NoticeDetail) -> NoticeRecord {
    let (self_href, thumbnail_href) = split_links(detail.links);

    let charges = detail
        .arrest_warrants
        .unwrap_or_default()
        .into_iter()
        .filter_map(|w| non_blank(w.charge).or_else(|| non_blank(w.charge_translation)))
        .collect();

    NoticeRecord {
        entity_id: non_blank(detail.entity_id),
        forename: non_blank(detail.forename),
        name: non_blank(detail.name),
        self_href,
        thumbnail_href,
        charges,
        nationalities: detail.nationalities.unwrap_or_default(),
        country_of_birth: non_blank(detail.country_of_birth_id),
    }
}

fn split_links(links: Option<dto::Links>) -> (Option<String>, Option<String>) {
    match links {
        Some(links) => (
            links.self_link.map(|l| l.href),
            links.thumbnail.map(|l| l.href),
        ),
        None => (None, None),
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn link(href: &str) -> Option<dto::Link> {
        Some(dto::Link {
            href: href.to_string(),
        })
    }

    #[test]
    fn test_to_records_handles_missing_embedded() {
        let response = dto::NoticeListResponse {
            total: Some(0),
            embedded: None,
        };
        assert!(to_records(response).is_empty());
    }

    #[test]
    fn test_summary_conversion() {
        let summary = dto::NoticeSummary {
            entity_id: Some("2020/1".to_string()),
            forename: Some("  ".to_string()),
            name: Some("DOE".to_string()),
            date_of_birth: None,
            nationalities: Some(vec!["MX".to_string()]),
            links: Some(dto::Links {
                self_link: link("https://registry/red/2020-1"),
                images: None,
                thumbnail: link("https://registry/thumb/1"),
            }),
        };

        let record = summary_to_record(summary);

        assert_eq!(record.forename, None);
        assert_eq!(record.name.as_deref(), Some("DOE"));
        assert_eq!(record.self_href.as_deref(), Some("https://registry/red/2020-1"));
        assert_eq!(record.thumbnail_href.as_deref(), Some("https://registry/thumb/1"));
        assert_eq!(record.nationalities, vec!["MX".to_string()]);
        assert!(record.charges.is_empty());
    }

    #[test]
    fn test_detail_charge_falls_back_to_translation() {
        let detail = dto::NoticeDetail {
            entity_id: Some("2021/7".to_string()),
            forename: None,
            name: None,
            date_of_birth: None,
            nationalities: None,
            country_of_birth_id: Some("AR".to_string()),
            sex_id: None,
            arrest_warrants: Some(vec![
                dto::ArrestWarrant {
                    charge: Some("".to_string()),
                    charge_translation: Some("Drug trafficking".to_string()),
                    issuing_country_id: None,
                },
                dto::ArrestWarrant {
                    charge: Some("Lavado de activos".to_string()),
                    charge_translation: None,
                    issuing_country_id: None,
                },
            ]),
            links: None,
        };

        let record = detail_to_record(detail);

        assert_eq!(
            record.charges,
            vec!["Drug trafficking".to_string(), "Lavado de activos".to_string()]
        );
        assert_eq!(record.country_of_birth.as_deref(), Some("AR"));
        assert!(record.nationalities.is_empty());
    }
}
