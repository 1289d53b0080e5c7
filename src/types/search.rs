use serde::{Deserialize, Serialize};

use super::video::VideoRecord;

/// Observable state of the delayed search, published on a watch channel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum SearchState {
    #[default]
    Idle,
    /// A search with this token is waiting out its delay.
    Pending { token: u64 },
    /// The latest search finished. `results` may be empty ("no videos found").
    Ready {
        token: u64,
        query: String,
        results: Vec<VideoRecord>,
    },
}

impl SearchState {
    pub fn is_pending(&self) -> bool {
        matches!(self, SearchState::Pending { .. })
    }

    /// Results of the last published search, or an empty slice.
    pub fn results(&self) -> &[VideoRecord] {
        match self {
            SearchState::Ready { results, .. } => results,
            _ => &[],
        }
    }
}

/// What a single dispatched search ended up doing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Empty query; nothing was dispatched.
    Skipped,
    /// Results were published as the current state.
    Published(Vec<VideoRecord>),
    /// A newer search was issued while this one was waiting; results dropped.
    Stale { token: u64 },
}
