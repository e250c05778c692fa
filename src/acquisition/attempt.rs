//! Bounded external calls and the per-attempt diagnostic log.
//!
//! Every external call made during an acquisition goes through [`attempt`]:
//! it is cut off after its own timeout, timed, classified, logged through
//! `tracing` and appended to the [`AttemptLog`].

use std::fmt;
use std::future::Future;
use std::time::{Duration, Instant};

use serde::Serialize;

use super::domain::ProviderError;

/// Which provider an attempt talked to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    Notices,
    Profiles,
    Generator,
    Offline,
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Provider::Notices => "notices",
            Provider::Profiles => "profiles",
            Provider::Generator => "generator",
            Provider::Offline => "offline",
        })
    }
}

/// How a single attempt ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Success,
    /// Well-formed response without usable records
    Empty,
    Failure,
    Timeout,
}

impl Outcome {
    fn of<T>(result: &Result<T, ProviderError>) -> Self {
        match result {
            Ok(_) => Outcome::Success,
            Err(ProviderError::Empty | ProviderError::NoImages) => Outcome::Empty,
            Err(ProviderError::Timeout(_)) => Outcome::Timeout,
            Err(_) => Outcome::Failure,
        }
    }
}

/// One external attempt, as recorded for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AttemptEvent {
    pub provider: Provider,
    /// Ladder step, e.g. "red:TR", "red:global", "red:detail", "search"
    pub step: String,
    pub outcome: Outcome,
    /// Error text for anything but success
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub elapsed_ms: u64,
}

/// Ordered record of every attempt made during one acquisition.
#[derive(Debug, Default)]
pub struct AttemptLog {
    events: Vec<AttemptEvent>,
}

impl AttemptLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Emit the event through `tracing` and keep it.
    pub fn record(&mut self, event: AttemptEvent) {
        match event.outcome {
            Outcome::Success => tracing::info!(
                provider = %event.provider,
                step = %event.step,
                elapsed_ms = event.elapsed_ms,
                "attempt succeeded"
            ),
            Outcome::Empty => tracing::debug!(
                provider = %event.provider,
                step = %event.step,
                elapsed_ms = event.elapsed_ms,
                "attempt returned nothing usable"
            ),
            Outcome::Failure | Outcome::Timeout => tracing::warn!(
                provider = %event.provider,
                step = %event.step,
                outcome = ?event.outcome,
                error = event.error.as_deref().unwrap_or_default(),
                elapsed_ms = event.elapsed_ms,
                "attempt failed"
            ),
        }
        self.events.push(event);
    }

    pub fn events(&self) -> &[AttemptEvent] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn into_events(self) -> Vec<AttemptEvent> {
        self.events
    }
}

/// Run `fut` with a deadline. Elapsing is reported as
/// [`ProviderError::Timeout`], exactly like any other failed attempt.
pub async fn bounded<T, F>(limit: Duration, fut: F) -> Result<T, ProviderError>
where
    F: Future<Output = Result<T, ProviderError>>,
{
    match tokio::time::timeout(limit, fut).await {
        Ok(result) => result,
        Err(_) => Err(ProviderError::Timeout(limit)),
    }
}

/// Run one bounded attempt and record its outcome in `log`.
pub async fn attempt<T, F>(
    log: &mut AttemptLog,
    provider: Provider,
    step: impl Into<String>,
    limit: Duration,
    fut: F,
) -> Result<T, ProviderError>
where
    F: Future<Output = Result<T, ProviderError>>,
{
    let started = Instant::now();
    let result = bounded(limit, fut).await;

    log.record(AttemptEvent {
        provider,
        step: step.into(),
        outcome: Outcome::of(&result),
        error: result.as_ref().err().map(|e| e.to_string()),
        elapsed_ms: started.elapsed().as_millis() as u64,
    });

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_bounded_passes_through() {
        let result = bounded(Duration::from_secs(1), async { Ok::<_, ProviderError>(7) }).await;
        assert_eq!(result, Ok(7));
    }

    #[tokio::test]
    async fn test_bounded_times_out() {
        let limit = Duration::from_millis(10);
        let result: Result<(), _> = bounded(limit, async {
            tokio::time::sleep(Duration::from_secs(60)).await;
            Ok(())
        })
        .await;
        assert_eq!(result, Err(ProviderError::Timeout(limit)));
    }

    #[tokio::test]
    async fn test_attempt_records_outcomes() {
        let mut log = AttemptLog::new();
        let limit = Duration::from_secs(1);

        let _ = attempt(&mut log, Provider::Notices, "red:TR", limit, async {
            Err::<(), _>(ProviderError::Empty)
        })
        .await;
        let _ = attempt(&mut log, Provider::Notices, "red:global", limit, async {
            Err::<(), _>(ProviderError::Network("reset".to_string()))
        })
        .await;
        let _ = attempt(&mut log, Provider::Generator, "generate", limit, async {
            Ok::<_, ProviderError>(())
        })
        .await;

        let outcomes: Vec<_> = log.events().iter().map(|e| e.outcome).collect();
        assert_eq!(outcomes, vec![Outcome::Empty, Outcome::Failure, Outcome::Success]);
        assert_eq!(log.events()[0].step, "red:TR");
        assert!(log.events()[1].error.as_deref().unwrap().contains("reset"));
        assert!(log.events()[2].error.is_none());
    }

    #[test]
    fn test_event_serializes_lowercase() {
        let event = AttemptEvent {
            provider: Provider::Profiles,
            step: "search".to_string(),
            outcome: Outcome::Timeout,
            error: None,
            elapsed_ms: 4000,
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["provider"], "profiles");
        assert_eq!(json["outcome"], "timeout");
        assert!(json.get("error").is_none());
    }
}
