//! Record acquisition command.

use std::path::Path;
use std::sync::Arc;

use serde::Serialize;
use tokio::runtime::Runtime;

use super::print_json_line;
use crate::acquisition::{
    AttemptEvent, CanonicalRecord, Category, LadderMode, RandomSource, SourceOrchestrator,
};
use crate::config::{self, Config};
use crate::error::{Error, Result, ResultExt};

/// Command-line overrides for one `fetch` run
#[derive(Debug, Default)]
pub struct FetchOptions {
    pub category: Option<Category>,
    pub count: usize,
    pub light: bool,
    pub no_offline: bool,
    pub report: bool,
    pub search_api_key: Option<String>,
    pub search_engine_id: Option<String>,
}

/// One `--report` output line
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ReportLine<'a> {
    preferred: Category,
    record: Option<&'a CanonicalRecord>,
    attempts: &'a [AttemptEvent],
}

/// Acquire `count` records and print each as a JSON line.
pub fn cmd_fetch(
    rt: &Runtime,
    config_path: Option<&Path>,
    random: Arc<dyn RandomSource>,
    options: &FetchOptions,
) -> Result<()> {
    if options.count == 0 {
        return Err(Error::invalid_input("--count must be at least 1"));
    }

    let config = config::load(config_path).with_context("loading config")?;
    let config = apply_options(config, options);
    let orchestrator = SourceOrchestrator::from_config(&config, random.clone())?;

    rt.block_on(async {
        for n in 1..=options.count {
            let preferred = choose_category(options.category, random.as_ref());
            tracing::debug!(preferred = %preferred, n, "acquiring record");

            let (result, attempts) = orchestrator.acquire_with_report(preferred).await;

            if options.report {
                print_json_line(&ReportLine {
                    preferred,
                    record: result.as_ref().ok(),
                    attempts: &attempts,
                })?;
            }

            let record = result
                .map_err(|e| Error::from(e).context(format!("record {n} of {}", options.count)))?;
            if !options.report {
                print_json_line(&record)?;
            }
        }
        Ok::<(), Error>(())
    })
}

/// Fold command-line overrides into the loaded config.
fn apply_options(mut config: Config, options: &FetchOptions) -> Config {
    config
        .credentials
        .apply_overrides(options.search_api_key.clone(), options.search_engine_id.clone());
    if options.light {
        config.ladder.mode = LadderMode::Light;
    }
    if options.no_offline {
        config.fallback.offline = false;
    }
    config
}

/// The requested category, or a fair coin flip.
fn choose_category(requested: Option<Category>, random: &dyn RandomSource) -> Category {
    requested.unwrap_or_else(|| {
        if random.coin() {
            Category::Registry
        } else {
            Category::Profile
        }
    })
}
