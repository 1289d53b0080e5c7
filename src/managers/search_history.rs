//! Search History.
//!
//! Implements `SearchHistoryTrait`: a most-recently-used list of at most
//! [`MAX_SEARCH_HISTORY`] query strings, stored under [`SEARCH_HISTORY_KEY`]
//! in the preferences area and written in full on every change.

use crate::services::preferences::{PreferencesStore, PreferencesStoreTrait};
use crate::types::errors::SearchHistoryError;

/// Preferences key the history list is stored under.
pub const SEARCH_HISTORY_KEY: &str = "searchHistory";

/// Maximum number of remembered queries.
pub const MAX_SEARCH_HISTORY: usize = 5;

/// Trait defining search history operations.
pub trait SearchHistoryTrait {
    fn load(&mut self) -> Result<Vec<String>, SearchHistoryError>;
    fn record(&mut self, term: &str) -> Result<(), SearchHistoryError>;
    fn remove_at(&mut self, index: usize) -> Result<String, SearchHistoryError>;
    fn entries(&self) -> &[String];
}

/// Search history kept in a [`PreferencesStore`].
pub struct SearchHistoryManager {
    prefs: PreferencesStore,
    entries: Vec<String>,
}

impl SearchHistoryManager {
    /// Wraps an already loaded preferences store. Call `load` to read the list.
    pub fn new(prefs: PreferencesStore) -> Self {
        Self {
            prefs,
            entries: Vec::new(),
        }
    }

    pub fn preferences(&self) -> &PreferencesStore {
        &self.prefs
    }

    /// Saves `entries` and adopts them only once the write succeeded.
    fn commit(&mut self, entries: Vec<String>) -> Result<(), SearchHistoryError> {
        self.prefs.set_string_array(SEARCH_HISTORY_KEY, &entries)?;
        self.entries = entries;
        Ok(())
    }
}

/// Moves `term` to the front of `entries`, dropping an exact duplicate and
/// anything past `MAX_SEARCH_HISTORY`.
pub fn promote(entries: &mut Vec<String>, term: &str) {
    entries.retain(|e| e != term);
    entries.insert(0, term.to_string());
    entries.truncate(MAX_SEARCH_HISTORY);
}

impl SearchHistoryTrait for SearchHistoryManager {
    /// Returns the persisted list, or an empty list when nothing is stored.
    /// A list written by another tool with more than five entries is cut down.
    fn load(&mut self) -> Result<Vec<String>, SearchHistoryError> {
        let mut entries = self
            .prefs
            .get_string_array(SEARCH_HISTORY_KEY)?
            .unwrap_or_default();
        entries.truncate(MAX_SEARCH_HISTORY);
        self.entries = entries;
        Ok(self.entries.clone())
    }

    fn record(&mut self, term: &str) -> Result<(), SearchHistoryError> {
        let mut entries = self.entries.clone();
        promote(&mut entries, term);
        self.commit(entries)?;
        tracing::info!(term, len = self.entries.len(), "recorded search term");
        Ok(())
    }

    /// Removes and returns the entry at `index`.
    fn remove_at(&mut self, index: usize) -> Result<String, SearchHistoryError> {
        if index >= self.entries.len() {
            return Err(SearchHistoryError::OutOfRange {
                index,
                len: self.entries.len(),
            });
        }
        let mut entries = self.entries.clone();
        let removed = entries.remove(index);
        self.commit(entries)?;
        tracing::info!(index, term = %removed, "removed search history entry");
        Ok(removed)
    }

    fn entries(&self) -> &[String] {
        &self.entries
    }
}
