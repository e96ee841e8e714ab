//! Liveness tracking for views that load data asynchronously.
//!
//! A view owns a `ViewGuard` and routes every fetch through `load`. Once the
//! view is torn down, pending and future loads resolve to `None` so their
//! results never reach the discarded view.

use std::future::Future;

use tokio_util::sync::CancellationToken;

#[derive(Debug, Clone)]
pub struct ViewGuard {
    token: CancellationToken,
}

impl Default for ViewGuard {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewGuard {
    pub fn new() -> Self {
        ViewGuard {
            token: CancellationToken::new(),
        }
    }

    pub fn teardown(&self) {
        self.token.cancel();
    }

    pub fn is_live(&self) -> bool {
        !self.token.is_cancelled()
    }

    /// Run `fut` unless the view is torn down first.
    pub async fn load<F: Future>(&self, fut: F) -> Option<F::Output> {
        tokio::select! {
            biased;
            _ = self.token.cancelled() => None,
            output = fut => self.is_live().then_some(output),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::oneshot;

    #[tokio::test]
    async fn test_live_view_receives_result() {
        let guard = ViewGuard::new();
        assert_eq!(guard.load(async { 7 }).await, Some(7));
    }

    #[tokio::test]
    async fn test_teardown_suppresses_pending_load() {
        let guard = ViewGuard::new();
        let (tx, rx) = oneshot::channel::<u32>();

        let view = guard.clone();
        let pending = tokio::spawn(async move { view.load(rx).await });

        guard.teardown();
        let _ = tx.send(1);

        assert!(pending.await.unwrap().is_none());
        assert!(!guard.is_live());
    }

    #[tokio::test]
    async fn test_loads_after_teardown_never_run() {
        let guard = ViewGuard::new();
        guard.teardown();
        assert_eq!(guard.load(async { 7 }).await, None);
    }
}
