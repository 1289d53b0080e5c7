// Video search
// A linear filter over the video corpus plus a delayed, non-blocking dispatcher.
// Every dispatch carries a request token; results from a superseded token are dropped.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use tokio::sync::watch;

use crate::managers::video_store::VideoStoreTrait;
use crate::types::errors::SearchError;
use crate::types::search::{SearchOutcome, SearchState};
use crate::types::video::VideoRecord;

/// Minimum latency before a dispatched search publishes its results.
pub const DEFAULT_SEARCH_DELAY: Duration = Duration::from_millis(500);

/// Returns every record whose name contains `query` (case-insensitive) or whose
/// decimal id contains `query`, in corpus order. An empty query matches nothing.
pub fn search_videos(query: &str, corpus: &[VideoRecord]) -> Vec<VideoRecord> {
    if query.is_empty() {
        return Vec::new();
    }
    let needle = query.to_lowercase();
    corpus
        .iter()
        .filter(|v| v.name.to_lowercase().contains(&needle) || v.id.to_string().contains(query))
        .cloned()
        .collect()
}

/// Runs searches after an artificial delay and publishes the latest result.
pub struct SearchDispatcher {
    delay: Duration,
    generation: AtomicU64,
    state: watch::Sender<SearchState>,
}

impl SearchDispatcher {
    pub fn new(delay: Duration) -> Self {
        let (state, _) = watch::channel(SearchState::Idle);
        Self {
            delay,
            generation: AtomicU64::new(0),
            state,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Token of the most recently issued search (0 before the first one).
    pub fn latest_token(&self) -> u64 {
        self.generation.load(Ordering::SeqCst)
    }

    /// Snapshot of the published state.
    pub fn state(&self) -> SearchState {
        self.state.borrow().clone()
    }

    /// Receiver that observes every state change, including `Pending`.
    pub fn subscribe(&self) -> watch::Receiver<SearchState> {
        self.state.subscribe()
    }

    /// Clears the published results and invalidates any search still waiting.
    pub fn reset(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
        self.state.send_replace(SearchState::Idle);
    }

    /// Searches `store` for `query` once the delay has elapsed.
    ///
    /// Returns [`SearchOutcome::Stale`] without touching the published state
    /// when another dispatch (or a reset) happened in the meantime.
    pub async fn dispatch<S>(&self, query: &str, store: &S) -> Result<SearchOutcome, SearchError>
    where
        S: VideoStoreTrait + ?Sized,
    {
        if query.is_empty() {
            return Ok(SearchOutcome::Skipped);
        }

        let token = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        self.state.send_replace(SearchState::Pending { token });
        tracing::debug!(token, query, "search dispatched");

        tokio::time::sleep(self.delay).await;

        if self.latest_token() != token {
            tracing::warn!(token, latest = self.latest_token(), query, "discarding stale search");
            return Ok(SearchOutcome::Stale { token });
        }

        let corpus = match store.get_all_videos() {
            Ok(corpus) => corpus,
            Err(e) => {
                self.state.send_replace(SearchState::Idle);
                return Err(e.into());
            }
        };
        let results = search_videos(query, &corpus);
        tracing::info!(token, query, hits = results.len(), "search published");

        self.state.send_replace(SearchState::Ready {
            token,
            query: query.to_string(),
            results: results.clone(),
        });
        Ok(SearchOutcome::Published(results))
    }
}

impl Default for SearchDispatcher {
    fn default() -> Self {
        Self::new(DEFAULT_SEARCH_DELAY)
    }
}
