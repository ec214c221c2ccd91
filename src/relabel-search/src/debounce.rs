//! Debounced evaluation of raw search input.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::trace;

use crate::query::SearchQuery;

/// Default quiescence window between the last keystroke and query evaluation.
pub const DEFAULT_QUIESCENCE: Duration = Duration::from_millis(100);

/// Trailing-edge debouncer for raw search input.
///
/// Every call to [`input`](SearchDebouncer::input) discards any evaluation
/// still waiting on the quiescence window and schedules a new one, so only
/// the most recent input is ever compiled and delivered. A stale compile is
/// never visible to the delivery callback.
///
/// Requires a tokio runtime; the pending evaluation runs as a spawned task.
pub struct SearchDebouncer {
    window: Duration,
    deliver: Arc<dyn Fn(SearchQuery) + Send + Sync>,
    pending: Option<JoinHandle<()>>,
}

impl SearchDebouncer {
    /// Creates a debouncer with the default quiescence window.
    pub fn new(deliver: impl Fn(SearchQuery) + Send + Sync + 'static) -> Self {
        Self::with_window(DEFAULT_QUIESCENCE, deliver)
    }

    /// Creates a debouncer with a custom quiescence window.
    pub fn with_window(
        window: Duration,
        deliver: impl Fn(SearchQuery) + Send + Sync + 'static,
    ) -> Self {
        Self {
            window,
            deliver: Arc::new(deliver),
            pending: None,
        }
    }

    /// Accepts new raw input, cancelling any pending evaluation.
    ///
    /// The input is compiled and handed to the delivery callback once the
    /// quiescence window elapses without another call.
    pub fn input(&mut self, raw: impl Into<String>) {
        let raw = raw.into();
        self.cancel();

        let window = self.window;
        let deliver = Arc::clone(&self.deliver);
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(window).await;
            trace!(%raw, "evaluating debounced search input");
            deliver(SearchQuery::compile(&raw));
        }));
    }

    /// Discards any pending evaluation without delivering it.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }

    /// The configured quiescence window.
    pub fn window(&self) -> Duration {
        self.window
    }
}

impl Drop for SearchDebouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}

impl fmt::Debug for SearchDebouncer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SearchDebouncer")
            .field("window", &self.window)
            .field("pending", &self.pending.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    type Seen = Arc<Mutex<Vec<SearchQuery>>>;

    fn collector() -> (Seen, impl Fn(SearchQuery) + Send + Sync + 'static) {
        let seen: Seen = Arc::new(Mutex::new(Vec::new()));
        let sink = {
            let seen = Arc::clone(&seen);
            move |query| seen.lock().unwrap().push(query)
        };
        (seen, sink)
    }

    #[tokio::test]
    async fn test_only_latest_input_fires() {
        let (seen, sink) = collector();
        let mut debouncer = SearchDebouncer::with_window(Duration::from_millis(20), sink);

        debouncer.input("i");
        debouncer.input("ie");
        debouncer.input("ied");
        tokio::time::sleep(Duration::from_millis(80)).await;

        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert!(seen[0].is_match("IED1"));
        assert!(!seen[0].is_match("relay"));
    }

    #[tokio::test]
    async fn test_separated_inputs_each_fire() {
        let (seen, sink) = collector();
        let mut debouncer = SearchDebouncer::with_window(Duration::from_millis(20), sink);

        debouncer.input("a");
        tokio::time::sleep(Duration::from_millis(60)).await;
        debouncer.input("b");
        tokio::time::sleep(Duration::from_millis(60)).await;

        assert_eq!(seen.lock().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_cancel_discards_pending() {
        let (seen, sink) = collector();
        let mut debouncer = SearchDebouncer::with_window(Duration::from_millis(20), sink);

        debouncer.input("doomed");
        debouncer.cancel();
        tokio::time::sleep(Duration::from_millis(60)).await;

        assert!(seen.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_drop_discards_pending() {
        let (seen, sink) = collector();
        {
            let mut debouncer = SearchDebouncer::with_window(Duration::from_millis(20), sink);
            debouncer.input("doomed");
        }
        tokio::time::sleep(Duration::from_millis(60)).await;

        assert!(seen.lock().unwrap().is_empty());
    }

    #[test]
    fn test_default_window() {
        let debouncer = SearchDebouncer::new(|_| {});
        assert_eq!(debouncer.window(), DEFAULT_QUIESCENCE);
    }
}
