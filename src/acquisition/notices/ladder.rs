//! The per-notice-type registry ladder.

use std::time::Duration;

use crate::acquisition::attempt::{AttemptLog, Provider, attempt};
use crate::acquisition::domain::{NoticeRecord, ProviderError, RawRecord};
use crate::acquisition::plan::ProviderQueryPlan;
use crate::acquisition::random::{RandomSource, pick};
use crate::acquisition::traits::NoticeApi;

/// Walk `plan` until a query returns records, pick one at random and try to
/// enrich it with its detail payload.
///
/// Failed, timed-out and empty queries all advance to the next step. The
/// detail fetch is best-effort: when it fails the summary is used as-is.
/// Returns [`ProviderError::Empty`] only when every step came back without
/// records.
pub async fn fetch_notice(
    api: &dyn NoticeApi,
    random: &dyn RandomSource,
    plan: &ProviderQueryPlan,
    timeout: Duration,
    log: &mut AttemptLog,
) -> Result<RawRecord, ProviderError> {
    let notice_type = plan.notice_type();
    let mut found: Option<Vec<NoticeRecord>> = None;

    for query in plan.attempts() {
        let result = attempt(log, Provider::Notices, query.step_name(), timeout, async {
            let records = api.search(query).await?;
            if records.is_empty() {
                return Err(ProviderError::Empty);
            }
            Ok(records)
        })
        .await;

        if let Ok(records) = result {
            tracing::debug!(
                notice_type = %notice_type,
                scope = %query.scope,
                count = records.len(),
                "registry query returned records"
            );
            found = Some(records);
            break;
        }
    }

    let records = found.ok_or(ProviderError::Empty)?;
    let summary = pick(random, &records).cloned().ok_or(ProviderError::Empty)?;

    let record = match summary.self_href.as_deref() {
        Some(href) => {
            let step = format!("{notice_type}:detail");
            match attempt(log, Provider::Notices, step, timeout, api.detail(href)).await {
                Ok(mut detail) => {
                    detail.merge(&summary);
                    detail
                }
                Err(_) => summary,
            }
        }
        None => summary,
    };

    Ok(RawRecord::Notice {
        notice_type,
        record,
    })
}
