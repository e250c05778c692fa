//! Offline inspection commands: classifier, query plans, offline table.

use std::path::Path;

use super::print_json_line;
use crate::acquisition::domain::RawRecord;
use crate::acquisition::normalize::normalize;
use crate::acquisition::offline::offline_entry;
use crate::acquisition::{LadderMode, NoticeType, ProviderQueryPlan, RandomSource, classify};
use crate::config;
use crate::error::{Result, ResultExt};

/// Print `label<TAB>text` for each input.
pub fn cmd_classify(texts: &[String]) -> Result<()> {
    for text in texts {
        println!("{}\t{}", classify(text.as_str()), text);
    }
    Ok(())
}

/// Print the query plan the registry ladder would walk.
pub fn cmd_plan(
    config_path: Option<&Path>,
    notice_type: NoticeType,
    random: &dyn RandomSource,
    light: bool,
) -> Result<()> {
    let config = config::load(config_path).with_context("loading config")?;
    let mode = if light { LadderMode::Light } else { config.ladder.mode };

    let plan = ProviderQueryPlan::for_notices(
        notice_type,
        mode,
        &config.ladder.priority_countries,
        config.ladder.results_per_page,
        random,
    );

    for (i, query) in plan.attempts().iter().enumerate() {
        println!("{:>2}. {:<14} {}", i + 1, query.step_name(), query);
    }
    Ok(())
}

/// Print one offline-table record as JSON.
pub fn cmd_offline(random: &dyn RandomSource) -> Result<()> {
    let record = normalize(RawRecord::Offline(offline_entry(random)));
    print_json_line(&record)
}
