//! Debounced value commits.
//!
//! Every [`Debouncer::push`] cancels the pending commit and schedules a new
//! one after the quiet period. Only a value that survives the whole period
//! becomes the committed value.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;

/// Default quiet period of the search box.
pub const DEFAULT_DELAY: Duration = Duration::from_millis(500);

/// Commits the last pushed value once input pauses for `delay`.
///
/// Must be used from within a tokio runtime.
#[derive(Debug)]
pub struct Debouncer<T> {
    delay: Duration,
    pending: Option<JoinHandle<()>>,
    committed: Arc<watch::Sender<T>>,
}

impl<T> Debouncer<T>
where
    T: Clone + Send + Sync + 'static,
{
    /// Create a debouncer whose committed value starts as `initial`.
    #[must_use]
    pub fn new(initial: T, delay: Duration) -> Self {
        let (committed, _) = watch::channel(initial);
        Self {
            delay,
            pending: None,
            committed: Arc::new(committed),
        }
    }

    #[must_use]
    pub const fn delay(&self) -> Duration {
        self.delay
    }

    /// Schedule `value` for commit, cancelling any pending commit.
    pub fn push(&mut self, value: T) {
        self.cancel();

        let committed = Arc::clone(&self.committed);
        let delay = self.delay;
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            committed.send_replace(value);
        }));
    }

    /// Drop the pending commit, if any.
    pub fn cancel(&mut self) {
        if let Some(pending) = self.pending.take() {
            pending.abort();
        }
    }

    /// A commit is scheduled but has not happened yet.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending
            .as_ref()
            .is_some_and(|pending| !pending.is_finished())
    }

    /// The last committed value.
    #[must_use]
    pub fn committed(&self) -> T {
        self.committed.borrow().clone()
    }

    /// Receiver notified on every commit.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<T> {
        self.committed.subscribe()
    }
}

impl<T> Drop for Debouncer<T> {
    fn drop(&mut self) {
        if let Some(pending) = self.pending.take() {
            pending.abort();
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use tokio::time::sleep;

    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_burst_commits_only_last_value() {
        let mut debouncer = Debouncer::new(String::new(), DEFAULT_DELAY);

        debouncer.push("a".to_string());
        sleep(Duration::from_millis(200)).await;
        debouncer.push("ap".to_string());
        sleep(Duration::from_millis(200)).await;
        debouncer.push("app".to_string());

        sleep(Duration::from_millis(499)).await;
        assert_eq!(debouncer.committed(), "");
        assert!(debouncer.is_pending());

        sleep(Duration::from_millis(2)).await;
        assert_eq!(debouncer.committed(), "app");
        assert!(!debouncer.is_pending());
    }

    #[tokio::test(start_paused = true)]
    async fn test_subscriber_sees_single_commit() {
        let mut debouncer = Debouncer::new(0_u32, Duration::from_millis(100));
        let mut commits = debouncer.subscribe();

        for value in 1..=5 {
            debouncer.push(value);
            sleep(Duration::from_millis(50)).await;
        }
        assert!(!commits.has_changed().unwrap());

        commits.changed().await.unwrap();
        assert_eq!(*commits.borrow_and_update(), 5);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_keeps_previous_value() {
        let mut debouncer = Debouncer::new("egg".to_string(), DEFAULT_DELAY);
        debouncer.push("apple".to_string());
        debouncer.cancel();

        sleep(Duration::from_secs(1)).await;
        assert_eq!(debouncer.committed(), "egg");
        assert!(!debouncer.is_pending());
    }
}
