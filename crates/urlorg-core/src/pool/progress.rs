//! Progress snapshots published by the worker pool.

/// Counts after each finished URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolProgress {
    /// URLs whose validation finished.
    pub checked: usize,
    /// URLs in the batch.
    pub total: usize,
    /// Invalid URLs found so far.
    pub invalid: usize,
}

impl PoolProgress {
    /// Fraction complete in [0.0, 1.0].
    pub fn fraction(&self) -> f64 {
        if self.total == 0 {
            return 1.0;
        }
        (self.checked as f64 / self.total as f64).min(1.0)
    }
}
