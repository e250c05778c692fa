//! Synthetic records built from a generated person.

use std::time::Duration;

use crate::acquisition::attempt::{AttemptLog, Provider, attempt};
use crate::acquisition::catalog;
use crate::acquisition::classifier::CrimeLabel;
use crate::acquisition::domain::{Category, ProviderError, RawRecord};
use crate::acquisition::random::{RandomSource, pick};
use crate::acquisition::traits::PersonGeneratorApi;

/// Nationalities drawn from for generated professionals.
pub const PROFILE_NATIONALITIES: &[&str] = &["tr", "us", "gb", "de", "fr"];

/// Nationalities drawn from for generated registry entries.
pub const REGISTRY_NATIONALITIES: &[&str] = &["tr", "us", "gb", "de", "fr", "ru", "br"];

pub fn nationalities_for(category: Category) -> &'static [&'static str] {
    match category {
        Category::Registry => REGISTRY_NATIONALITIES,
        Category::Profile => PROFILE_NATIONALITIES,
    }
}

/// Random detail label for a generated record: a crime label for the
/// registry, a localized occupation for profiles.
pub fn detail_for(category: Category, random: &dyn RandomSource) -> &'static str {
    match category {
        Category::Registry => pick(random, catalog::FALLBACK_CRIMES)
            .copied()
            .unwrap_or(CrimeLabel::Wanted)
            .as_str(),
        Category::Profile => pick(random, catalog::OCCUPATIONS)
            .map(|o| o.tr)
            .unwrap_or(catalog::OFFLINE_OCCUPATIONS[0]),
    }
}

/// Ask the generator for one person and dress it as a `category` record.
///
/// Touches neither the registry nor the search provider.
pub async fn generate_record(
    api: &dyn PersonGeneratorApi,
    category: Category,
    random: &dyn RandomSource,
    timeout: Duration,
    log: &mut AttemptLog,
) -> Result<RawRecord, ProviderError> {
    let step = format!("generate:{}", category.as_str().to_ascii_lowercase());
    let nationalities = nationalities_for(category);

    let mut people = attempt(log, Provider::Generator, step, timeout, async {
        let people = api.generate(nationalities).await?;
        if people.is_empty() {
            return Err(ProviderError::Empty);
        }
        Ok(people)
    })
    .await?;

    let person = people.swap_remove(0);
    Ok(RawRecord::Synthetic {
        category,
        person,
        detail: detail_for(category, random),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::acquisition::attempt::Outcome;
    use crate::acquisition::random::FixedRandom;
    use crate::acquisition::traits::mocks::MockGenerator;

    const TIMEOUT: Duration = Duration::from_millis(50);

    #[tokio::test]
    async fn test_registry_record_gets_crime_label() {
        let api = MockGenerator::with_person("Ivan", "Petrov", "RU");
        let mut log = AttemptLog::new();

        let raw = generate_record(&api, Category::Registry, &FixedRandom(0), TIMEOUT, &mut log)
            .await
            .unwrap();

        match raw {
            RawRecord::Synthetic { category, person, detail } => {
                assert_eq!(category, Category::Registry);
                assert_eq!(person.last_name.as_deref(), Some("Petrov"));
                assert_eq!(detail, catalog::FALLBACK_CRIMES[0].as_str());
            }
            other => panic!("expected a synthetic record, got {other:?}"),
        }
        assert_eq!(api.calls()[0], REGISTRY_NATIONALITIES);
        assert_eq!(log.events()[0].step, "generate:registry");
    }

    #[tokio::test]
    async fn test_profile_record_gets_occupation() {
        let api = MockGenerator::with_person("Ada", "Byron", "GB");
        let mut log = AttemptLog::new();

        let raw = generate_record(&api, Category::Profile, &FixedRandom(1), TIMEOUT, &mut log)
            .await
            .unwrap();

        assert!(matches!(
            raw,
            RawRecord::Synthetic { category: Category::Profile, detail: "Yazılım Mühendisi", .. }
        ));
        assert_eq!(api.calls()[0], PROFILE_NATIONALITIES);
    }

    #[tokio::test]
    async fn test_generator_failure_propagates() {
        let api = MockGenerator::with_error(ProviderError::RateLimited);
        let mut log = AttemptLog::new();

        let result = generate_record(&api, Category::Profile, &FixedRandom(0), TIMEOUT, &mut log).await;

        assert_eq!(result, Err(ProviderError::RateLimited));
        assert_eq!(log.events()[0].outcome, Outcome::Failure);
    }
}
