//! Cancellation for a validation run.
//!
//! The CLI owns the Ctrl-C handler and calls [`ValidationControl::cancel`];
//! the worker pool checks the token only at the dispatch boundary and waits
//! on [`ValidationControl::cancelled`] while workers are in flight. Workers
//! never see the signal, so an in-flight GET is not interrupted mid-transfer.

use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::Notify;

/// Shared abort token for one validation run.
#[derive(Debug, Default)]
pub struct ValidationControl {
    cancelled: AtomicBool,
    notify: Notify,
}

impl ValidationControl {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation. Idempotent.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
        self.notify.notify_waiters();
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }

    /// Resolves once [`cancel`](Self::cancel) has been called.
    pub async fn cancelled(&self) {
        loop {
            let notified = self.notify.notified();
            if self.is_cancelled() {
                return;
            }
            notified.await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::time::Duration;

    #[test]
    fn starts_uncancelled() {
        let c = ValidationControl::new();
        assert!(!c.is_cancelled());
        c.cancel();
        c.cancel();
        assert!(c.is_cancelled());
    }

    #[tokio::test]
    async fn cancelled_resolves_after_cancel() {
        let c = Arc::new(ValidationControl::new());
        let waiter = {
            let c = Arc::clone(&c);
            tokio::spawn(async move { c.cancelled().await })
        };
        tokio::time::sleep(Duration::from_millis(20)).await;
        c.cancel();
        tokio::time::timeout(Duration::from_secs(2), waiter)
            .await
            .expect("waiter should finish")
            .unwrap();
    }

    #[tokio::test]
    async fn cancelled_returns_immediately_when_already_set() {
        let c = ValidationControl::new();
        c.cancel();
        tokio::time::timeout(Duration::from_millis(100), c.cancelled())
            .await
            .expect("already cancelled");
    }
}
