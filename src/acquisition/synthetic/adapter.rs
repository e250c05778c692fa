//! Adapter layer: Convert generator DTOs to domain models

use super::dto;
use crate::acquisition::domain::{GeneratedPerson, ProviderError};

/// Convert a generator response into people.
///
/// A service-reported error becomes [`ProviderError::Parse`]; zero results
/// is an empty answer, left for the caller to judge.
pub fn to_people(response: dto::GeneratorResponse) -> Result<Vec<GeneratedPerson>, ProviderError> {
    if let Some(error) = response.error {
        return Err(ProviderError::Parse(format!("generator reported: {error}")));
    }
    Ok(response.results.into_iter().map(to_person).collect())
}

fn to_person(person: dto::Person) -> GeneratedPerson {
    let (first_name, last_name) = match person.name {
        Some(name) => (name.first, name.last),
        None => (None, None),
    };
    let (large_photo, medium_photo) = match person.picture {
        Some(picture) => (picture.large, picture.medium),
        None => (None, None),
    };

    GeneratedPerson {
        first_name,
        last_name,
        nationality: person.nat,
        country: person.location.and_then(|l| l.country),
        large_photo,
        medium_photo,
    }
}
