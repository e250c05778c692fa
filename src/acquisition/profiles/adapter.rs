//! Adapter layer: Convert search DTOs to domain models

use super::dto;
use crate::acquisition::domain::SearchHit;

/// Convert a search response into hits. No `items` means no hits.
pub fn to_hits(response: dto::SearchResponse) -> Vec<SearchHit> {
    response
        .items
        .unwrap_or_default()
        .into_iter()
        .map(to_hit)
        .collect()
}

fn to_hit(item: dto::SearchItem) -> SearchHit {
    let image = item
        .pagemap
        .and_then(|p| p.cse_image)
        .and_then(|images| images.into_iter().next())
        .map(|img| img.src)
        .filter(|src| !src.trim().is_empty());

    SearchHit {
        title: item.title,
        link: item.link,
        image,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(title: &str, images: Option<Vec<&str>>) -> dto::SearchItem {
        dto::SearchItem {
            title: title.to_string(),
            link: format!("https://www.linkedin.com/in/{}", title.to_lowercase()),
            pagemap: Some(dto::PageMap {
                cse_image: images.map(|srcs| {
                    srcs.into_iter()
                        .map(|src| dto::CseImage { src: src.to_string() })
                        .collect()
                }),
            }),
        }
    }

    #[test]
    fn test_first_image_is_used() {
        let response = dto::SearchResponse {
            items: Some(vec![item("Ada", Some(vec!["https://img/1.jpg", "https://img/2.jpg"]))]),
        };
        let hits = to_hits(response);
        assert_eq!(hits[0].image.as_deref(), Some("https://img/1.jpg"));
        assert_eq!(hits[0].link, "https://www.linkedin.com/in/ada");
    }

    #[test]
    fn test_missing_or_blank_images_are_none() {
        let response = dto::SearchResponse {
            items: Some(vec![item("A", None), item("B", Some(vec![])), item("C", Some(vec![" "]))]),
        };
        assert!(to_hits(response).iter().all(|h| h.image.is_none()));
    }

    #[test]
    fn test_no_items() {
        assert!(to_hits(dto::SearchResponse { items: None }).is_empty());
    }
}
