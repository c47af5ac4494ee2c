//! Effective worker count.

/// How many workers a run gets and whether the request was clamped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkerPlan {
    /// Workers that will actually run.
    pub workers: usize,
    /// Upper bound derived from hardware and list size.
    pub cap: usize,
    /// True when the caller asked for more than `cap`.
    pub clamped: bool,
}

/// `min(requested, min(parallelism * 2, url_count))`, never below 1 for a
/// non-empty list.
pub fn plan_workers(requested: usize, parallelism: usize, url_count: usize) -> WorkerPlan {
    let cap = parallelism.saturating_mul(2).min(url_count);
    let workers = requested.min(cap);
    WorkerPlan {
        workers: if url_count > 0 { workers.max(1) } else { 0 },
        cap,
        clamped: requested > cap,
    }
}

/// Hardware parallelism hint (logical CPUs), 1 if unknown.
pub fn hardware_parallelism() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
}
