//! Source orchestrator - the entry point of record acquisition
//!
//! Given a preferred category, walks the provider cascade:
//! 1. REGISTRY: red, yellow, then UN notice ladders, then the profile lookup
//! 2. PROFILE: the profile lookup, then the red, yellow and UN ladders
//! 3. A failed profile lookup falls back to a generated professional,
//!    whichever category was preferred
//! 4. If everything above fails, a generated record of the preferred
//!    category (unless a professional was already requested for a
//!    preferred PROFILE), then the offline table
//!
//! The generator is asked at most once per category.
//!
//! Only when every stage fails, or the offline table is disabled, does the
//! caller see [`AcquisitionError::Exhausted`].

use std::sync::Arc;
use std::time::Duration;

use crate::config::Config;

use super::attempt::{AttemptEvent, AttemptLog, Provider, attempt};
use super::domain::{AcquisitionError, CanonicalRecord, Category, NoticeType, ProviderError, RawRecord};
use super::normalize::normalize;
use super::notices::{NoticeClient, fetch_notice};
use super::offline::offline_entry;
use super::plan::{LadderMode, ProviderQueryPlan};
use super::profiles::{SearchClient, lookup_profile};
use super::random::RandomSource;
use super::synthetic::{GeneratorClient, generate_record};
use super::traits::{NoticeApi, PersonGeneratorApi, ProfileSearchApi};

/// Tunables for one orchestrator
#[derive(Debug, Clone, PartialEq)]
pub struct AcquisitionSettings {
    pub mode: LadderMode,
    pub priority_countries: Vec<String>,
    pub results_per_page: u32,
    /// Bound applied to every single external call
    pub timeout: Duration,
    pub profile_site: String,
    pub synthetic_fallback: bool,
    pub offline_fallback: bool,
}

impl AcquisitionSettings {
    pub fn from_config(config: &Config) -> Self {
        Self {
            mode: config.ladder.mode,
            priority_countries: config.ladder.priority_countries.clone(),
            results_per_page: config.ladder.results_per_page,
            timeout: config.ladder.timeout(),
            profile_site: config.providers.profile_site.clone(),
            synthetic_fallback: config.fallback.synthetic,
            offline_fallback: config.fallback.offline,
        }
    }
}

impl Default for AcquisitionSettings {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

/// One stage of the provider cascade.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Notices(NoticeType),
    Profile,
}

impl Stage {
    /// Stages that can produce a record of `category`.
    fn for_category(category: Category) -> Vec<Stage> {
        match category {
            Category::Registry => NoticeType::LADDER.into_iter().map(Stage::Notices).collect(),
            Category::Profile => vec![Stage::Profile],
        }
    }

    /// Cascade order for a preferred category: its own stages, then the
    /// other category's.
    pub fn cascade(preferred: Category) -> Vec<Stage> {
        let mut stages = Self::for_category(preferred);
        stages.extend(Self::for_category(preferred.other()));
        stages
    }
}

/// Acquires one canonical record from whichever provider answers first.
pub struct SourceOrchestrator {
    notices: Arc<dyn NoticeApi>,
    /// `None` when search credentials are not configured
    profiles: Option<Arc<dyn ProfileSearchApi>>,
    generator: Arc<dyn PersonGeneratorApi>,
    random: Arc<dyn RandomSource>,
    settings: AcquisitionSettings,
}

impl SourceOrchestrator {
    /// Assemble an orchestrator from explicit providers.
    pub fn new(
        notices: Arc<dyn NoticeApi>,
        profiles: Option<Arc<dyn ProfileSearchApi>>,
        generator: Arc<dyn PersonGeneratorApi>,
        random: Arc<dyn RandomSource>,
        settings: AcquisitionSettings,
    ) -> Self {
        Self {
            notices,
            profiles,
            generator,
            random,
            settings,
        }
    }

    /// Build the real HTTP providers described by `config`.
    pub fn from_config(
        config: &Config,
        random: Arc<dyn RandomSource>,
    ) -> Result<Self, AcquisitionError> {
        let providers = &config.providers;

        let profiles = match config.credentials.search() {
            Some((key, cx)) => {
                let client: Arc<dyn ProfileSearchApi> =
                    Arc::new(SearchClient::new(&providers.search_base_url, key, cx)?);
                Some(client)
            }
            None => {
                tracing::info!("search credentials not configured, profile lookup will use generated people");
                None
            }
        };

        Ok(Self::new(
            Arc::new(NoticeClient::new(&providers.notices_base_url)?),
            profiles,
            Arc::new(GeneratorClient::new(&providers.generator_base_url)?),
            random,
            AcquisitionSettings::from_config(config),
        ))
    }

    pub fn settings(&self) -> &AcquisitionSettings {
        &self.settings
    }

    /// Acquire one record, preferring `preferred`.
    pub async fn acquire(&self, preferred: Category) -> Result<CanonicalRecord, AcquisitionError> {
        self.acquire_with_report(preferred).await.0
    }

    /// Like [`acquire`](Self::acquire), also returning every attempt made.
    pub async fn acquire_with_report(
        &self,
        preferred: Category,
    ) -> (Result<CanonicalRecord, AcquisitionError>, Vec<AttemptEvent>) {
        let mut log = AttemptLog::new();
        let result = self.run(preferred, &mut log).await;

        match &result {
            Ok(record) => tracing::info!(
                preferred = %preferred,
                category = %record.category,
                attempts = log.len(),
                "record acquired"
            ),
            Err(e) => tracing::error!(preferred = %preferred, attempts = log.len(), "{e}"),
        }

        (result, log.into_events())
    }

    async fn run(
        &self,
        preferred: Category,
        log: &mut AttemptLog,
    ) -> Result<CanonicalRecord, AcquisitionError> {
        // The generator is asked at most once per category
        let mut generated_profile = false;

        for stage in Stage::cascade(preferred) {
            let raw = match stage {
                Stage::Notices(notice_type) => self.notice_stage(notice_type, log).await,
                Stage::Profile => self.profile_stage(log, &mut generated_profile).await,
            };
            if let Some(raw) = raw {
                return Ok(normalize(raw));
            }
            tracing::debug!(stage = ?stage, "stage exhausted, moving on");
        }

        if self.settings.synthetic_fallback
            && !(preferred == Category::Profile && generated_profile)
            && let Ok(raw) = self.synthetic(preferred, log).await
        {
            return Ok(normalize(raw));
        }

        if self.settings.offline_fallback {
            let random = self.random.as_ref();
            let entry = attempt(log, Provider::Offline, "table", self.settings.timeout, async {
                Ok(offline_entry(random))
            })
            .await;
            if let Ok(entry) = entry {
                return Ok(normalize(RawRecord::Offline(entry)));
            }
        }

        Err(AcquisitionError::Exhausted { attempts: log.len() })
    }

    async fn notice_stage(&self, notice_type: NoticeType, log: &mut AttemptLog) -> Option<RawRecord> {
        let plan = ProviderQueryPlan::for_notices(
            notice_type,
            self.settings.mode,
            &self.settings.priority_countries,
            self.settings.results_per_page,
            self.random.as_ref(),
        );

        fetch_notice(
            self.notices.as_ref(),
            self.random.as_ref(),
            &plan,
            self.settings.timeout,
            log,
        )
        .await
        .ok()
    }

    /// Web-search lookup, falling back to a generated professional.
    async fn profile_stage(&self, log: &mut AttemptLog, generated: &mut bool) -> Option<RawRecord> {
        let found = lookup_profile(
            self.profiles.as_deref(),
            &self.settings.profile_site,
            self.random.as_ref(),
            self.settings.timeout,
            log,
        )
        .await;

        if let Ok(raw) = found {
            return Some(raw);
        }
        if !self.settings.synthetic_fallback {
            return None;
        }

        *generated = true;
        self.synthetic(Category::Profile, log).await.ok()
    }

    async fn synthetic(
        &self,
        category: Category,
        log: &mut AttemptLog,
    ) -> Result<RawRecord, ProviderError> {
        generate_record(
            self.generator.as_ref(),
            category,
            self.random.as_ref(),
            self.settings.timeout,
            log,
        )
        .await
    }
}
