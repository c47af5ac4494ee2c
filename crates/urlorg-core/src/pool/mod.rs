//! Bounded worker pool that validates a URL list.
//!
//! Keeps up to `workers` validations in flight; when one finishes, the next
//! URL from the queue is dispatched. Each validation runs on the blocking
//! thread pool (curl is synchronous). Results flow back through the join set
//! to this coordinator, which is the single owner of the invalid-URL set.
//!
//! Cancellation is checked before every dispatch. Once requested, no new
//! URL is started, outstanding workers are detached (their results are
//! dropped), and the URLs already classified invalid are returned.

mod plan;
mod progress;

pub use plan::{hardware_parallelism, plan_workers, WorkerPlan};
pub use progress::PoolProgress;

use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinSet;

use crate::control::ValidationControl;
use crate::validate::{validation_input, UrlCheck, ValidationResult};

/// What a run of [`validate_all`] produced.
#[derive(Debug, Clone, Default)]
pub struct PoolOutcome {
    /// Validation-input form of every URL classified invalid, in completion order.
    pub invalid: Vec<String>,
    /// URLs whose validation finished before the pool stopped.
    pub checked: usize,
    /// URLs in the batch.
    pub total: usize,
    /// Workers that were used.
    pub workers: usize,
    /// True if the run stopped because cancellation was requested.
    pub cancelled: bool,
}

/// Validates every URL in `urls` with at most `requested_workers` in flight.
///
/// The worker count is clamped to [`plan_workers`]; a clamp is logged as a
/// warning. Per-URL failures never abort the run. Progress snapshots are sent
/// to `progress_tx` without blocking dispatch (a full channel drops a snapshot).
pub async fn validate_all<C>(
    urls: &[String],
    requested_workers: usize,
    checker: Arc<C>,
    control: Arc<ValidationControl>,
    progress_tx: Option<mpsc::Sender<PoolProgress>>,
) -> PoolOutcome
where
    C: UrlCheck + 'static,
{
    tracing::debug!("validating {} URLs", urls.len());

    let plan = plan_workers(requested_workers, hardware_parallelism(), urls.len());
    if plan.clamped {
        tracing::warn!(
            "workers set to {}, above the optimal value of {}; using {} workers instead",
            requested_workers,
            plan.cap,
            plan.workers
        );
    }

    let mut outcome = PoolOutcome {
        total: urls.len(),
        workers: plan.workers,
        ..PoolOutcome::default()
    };
    let mut queue = urls.iter().cloned();
    let mut join_set: JoinSet<(String, ValidationResult)> = JoinSet::new();

    loop {
        while join_set.len() < plan.workers && !control.is_cancelled() {
            let Some(url) = queue.next() else {
                break;
            };
            let checker = Arc::clone(&checker);
            join_set.spawn(async move {
                let input = url.clone();
                let result = tokio::task::spawn_blocking(move || checker.check(&input)).await;
                match result {
                    Ok(r) => (url, r),
                    Err(e) => {
                        tracing::error!("validation worker for {} failed: {}", url, e);
                        (url, ValidationResult::Invalid)
                    }
                }
            });
        }

        if join_set.is_empty() {
            outcome.cancelled = control.is_cancelled() && outcome.checked < outcome.total;
            break;
        }

        tokio::select! {
            biased;
            _ = control.cancelled() => {
                tracing::info!(
                    "validation interrupted, terminating {} worker(s)",
                    join_set.len()
                );
                join_set.abort_all();
                outcome.cancelled = true;
                break;
            }
            joined = join_set.join_next() => {
                let Some(joined) = joined else {
                    break;
                };
                match joined {
                    Ok((url, result)) => {
                        outcome.checked += 1;
                        if result == ValidationResult::Invalid {
                            outcome.invalid.push(validation_input(&url).to_string());
                        }
                    }
                    Err(e) => tracing::warn!("validation task join: {}", e),
                }
                if let Some(tx) = progress_tx.as_ref() {
                    let _ = tx.try_send(PoolProgress {
                        checked: outcome.checked,
                        total: outcome.total,
                        invalid: outcome.invalid.len(),
                    });
                }
            }
        }
    }

    tracing::info!(
        "found {} invalid URLs out of {}",
        outcome.invalid.len(),
        outcome.total
    );
    outcome
}
