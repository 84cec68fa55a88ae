use super::ImplNavigator;
use log::{debug, info};
use std::{
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
    time::Duration,
};
use tokio::task::JoinHandle;

/// Navigator for hosts without a browser, it only logs the destination
#[derive(Clone, Default)]
pub struct LogNavigator;

impl crate::services::Navigator for LogNavigator {
    fn navigate(&self, url: &str) {
        info!("navigating to {url}");
    }
}

/// One-shot navigation fired after a delay, cancellable until it fires.
pub struct ScheduledNavigation {
    armed: Arc<AtomicBool>,
    handle: JoinHandle<()>,
}

impl ScheduledNavigation {
    /// Spawns the timer on the current tokio runtime
    pub fn schedule(navigator: ImplNavigator, url: String, delay: Duration) -> Self {
        let armed = Arc::new(AtomicBool::new(true));
        let task_armed = armed.clone();

        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            // swap so a cancel racing with the timer can only win once
            if task_armed.swap(false, Ordering::SeqCst) {
                navigator.navigate(&url);
            } else {
                debug!("scheduled navigation to {url} was cancelled");
            }
        });

        Self { armed, handle }
    }

    /// Disarms the navigation. Calling it after it fired does nothing.
    pub fn cancel(&self) {
        self.armed.store(false, Ordering::SeqCst);
        self.handle.abort();
    }

    pub fn is_pending(&self) -> bool {
        self.armed.load(Ordering::SeqCst) && !self.handle.is_finished()
    }

    /// Waits until the navigation fired or was cancelled
    pub async fn finished(self) {
        // a cancelled task ends with a JoinError, nothing to report
        let _ = self.handle.await;
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::services::Navigator;
    use std::sync::Mutex;

    /// Keeps every url it was asked to open
    #[derive(Default)]
    pub(crate) struct RecordingNavigator {
        pub visited: Mutex<Vec<String>>,
    }

    impl Navigator for RecordingNavigator {
        fn navigate(&self, url: &str) {
            self.visited.lock().unwrap().push(url.to_string());
        }
    }

    impl RecordingNavigator {
        pub(crate) fn visited(&self) -> Vec<String> {
            self.visited.lock().unwrap().clone()
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_navigation_fires_after_delay() {
        let navigator = Arc::new(RecordingNavigator::default());
        let scheduled = ScheduledNavigation::schedule(
            navigator.clone(),
            "https://shop.example/profile".into(),
            Duration::from_millis(2000),
        );

        tokio::time::sleep(Duration::from_millis(1999)).await;
        assert!(navigator.visited().is_empty());
        assert!(scheduled.is_pending());

        scheduled.finished().await;
        assert_eq!(navigator.visited(), vec!["https://shop.example/profile"]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancelled_navigation_never_fires() {
        let navigator = Arc::new(RecordingNavigator::default());
        let scheduled = ScheduledNavigation::schedule(
            navigator.clone(),
            "https://shop.example/profile".into(),
            Duration::from_millis(2000),
        );

        tokio::time::sleep(Duration::from_millis(500)).await;
        scheduled.cancel();
        assert!(!scheduled.is_pending());

        tokio::time::sleep(Duration::from_millis(5000)).await;
        assert!(navigator.visited().is_empty());
    }
}
