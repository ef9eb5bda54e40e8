//! Background worker persisting "yes" acknowledgements from the Valentine page.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio_retry::RetryIf;
use tokio_retry::strategy::{ExponentialBackoff, jitter};
use tracing::{debug, info, warn};

use crate::domain::repositories::LinkRepository;
use crate::domain::response_event::ResponseEvent;
use crate::error::AppError;

/// Retry settings for transient store failures.
#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    /// Retries after the first attempt.
    pub attempts: usize,
    pub base_delay_ms: u64,
    pub max_delay_ms: u64,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            attempts: 3,
            base_delay_ms: 50,
            max_delay_ms: 2_000,
        }
    }
}

impl RetryPolicy {
    fn strategy(&self) -> impl Iterator<Item = Duration> + use<> {
        ExponentialBackoff::from_millis(self.base_delay_ms.max(1))
            .max_delay(Duration::from_millis(self.max_delay_ms))
            .map(jitter)
            .take(self.attempts)
    }
}

/// Consumes acknowledgement events until the channel closes.
///
/// Only [`AppError::StoreUnavailable`] is retried. Every other failure, and a
/// retry budget running out, is logged and the event is dropped: the recipient
/// has already seen the celebration and nothing is reverted.
pub async fn run_response_worker(
    mut rx: mpsc::Receiver<ResponseEvent>,
    repository: Arc<dyn LinkRepository>,
    retry: RetryPolicy,
) {
    while let Some(event) = rx.recv().await {
        process_event(&event, repository.as_ref(), retry).await;
    }

    info!("Response queue closed, worker exiting");
}

/// Persists a single acknowledgement. Returns true when the flag is stored.
pub async fn process_event(
    event: &ResponseEvent,
    repository: &dyn LinkRepository,
    retry: RetryPolicy,
) -> bool {
    let result = RetryIf::spawn(
        retry.strategy(),
        || repository.mark_responded_yes(&event.slug),
        |e: &AppError| e.is_transient(),
    )
    .await;

    match result {
        Ok(0) => {
            warn!(slug = %event.slug, "Acknowledgement for unknown slug dropped");
            metrics::counter!("valentine_acknowledgements_dropped_total").increment(1);
            false
        }
        Ok(_) => {
            debug!(
                slug = %event.slug,
                answered_at = %event.answered_at,
                "Acknowledgement persisted"
            );
            metrics::counter!("valentine_yes_responses_total").increment(1);
            true
        }
        Err(e) => {
            warn!(slug = %event.slug, error = %e, "Failed to persist acknowledgement");
            metrics::counter!("valentine_acknowledgements_dropped_total").increment(1);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockLinkRepository;
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn fast_retry(attempts: usize) -> RetryPolicy {
        RetryPolicy {
            attempts,
            base_delay_ms: 1,
            max_delay_ms: 2,
        }
    }

    #[tokio::test]
    async fn test_process_event_success() {
        let mut repo = MockLinkRepository::new();
        repo.expect_mark_responded_yes()
            .withf(|slug| slug == "anna-2026")
            .times(1)
            .returning(|_| Ok(1));

        let stored = process_event(&ResponseEvent::new("anna-2026"), &repo, fast_retry(3)).await;

        assert!(stored);
    }

    #[tokio::test]
    async fn test_process_event_retries_transient_failure() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();

        let mut repo = MockLinkRepository::new();
        repo.expect_mark_responded_yes().returning(move |_| {
            if counter.fetch_add(1, Ordering::SeqCst) == 0 {
                Err(AppError::store_unavailable("down", json!({})))
            } else {
                Ok(1)
            }
        });

        let stored = process_event(&ResponseEvent::new("anna-2026"), &repo, fast_retry(3)).await;

        assert!(stored);
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_process_event_gives_up_after_budget() {
        let mut repo = MockLinkRepository::new();
        repo.expect_mark_responded_yes()
            .times(3)
            .returning(|_| Err(AppError::store_unavailable("down", json!({}))));

        let stored = process_event(&ResponseEvent::new("anna-2026"), &repo, fast_retry(2)).await;

        assert!(!stored);
    }

    #[tokio::test]
    async fn test_process_event_does_not_retry_internal_error() {
        let mut repo = MockLinkRepository::new();
        repo.expect_mark_responded_yes()
            .times(1)
            .returning(|_| Err(AppError::internal("boom", json!({}))));

        let stored = process_event(&ResponseEvent::new("anna-2026"), &repo, fast_retry(3)).await;

        assert!(!stored);
    }

    #[tokio::test]
    async fn test_process_event_unknown_slug() {
        let mut repo = MockLinkRepository::new();
        repo.expect_mark_responded_yes()
            .times(1)
            .returning(|_| Ok(0));

        let stored = process_event(&ResponseEvent::new("nobody"), &repo, fast_retry(3)).await;

        assert!(!stored);
    }

    #[tokio::test]
    async fn test_worker_drains_channel_and_exits() {
        let mut repo = MockLinkRepository::new();
        repo.expect_mark_responded_yes()
            .times(2)
            .returning(|_| Ok(1));

        let (tx, rx) = mpsc::channel(4);
        tx.send(ResponseEvent::new("one")).await.unwrap();
        tx.send(ResponseEvent::new("two")).await.unwrap();
        drop(tx);

        run_response_worker(rx, Arc::new(repo), fast_retry(1)).await;
    }
}
