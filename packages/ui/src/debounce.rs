//! Cooperative debounce for input-driven fetches.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use crate::time::sleep;

/// Lets only the latest of several overlapping requests proceed.
#[derive(Clone, Debug, Default)]
pub struct Debouncer {
    generation: Arc<AtomicU64>,
}

impl Debouncer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wait out `delay`, then report whether no newer call arrived meanwhile.
    pub async fn settle(&self, delay: Duration) -> bool {
        let ticket = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        if !delay.is_zero() {
            sleep(delay).await;
        }
        self.generation.load(Ordering::SeqCst) == ticket
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_only_latest_call_settles() {
        let debouncer = Debouncer::new();
        let (first, second) = tokio::join!(
            debouncer.settle(Duration::from_millis(20)),
            debouncer.settle(Duration::from_millis(20)),
        );
        assert!(!first);
        assert!(second);
    }

    #[tokio::test]
    async fn test_sequential_calls_all_settle() {
        let debouncer = Debouncer::new();
        assert!(debouncer.settle(Duration::from_millis(1)).await);
        assert!(debouncer.settle(Duration::ZERO).await);
    }
}
