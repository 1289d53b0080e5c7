//! App Core.
//!
//! Ties the video store, search history and delayed search together the way
//! the home and search screens use them.

use std::path::{Path, PathBuf};
use std::time::Duration;

use rand::Rng;
use tokio::sync::watch;

use crate::database::connection::Database;
use crate::managers::search_history::{SearchHistoryManager, SearchHistoryTrait};
use crate::managers::video_store::{VideoStore, VideoStoreTrait};
use crate::platform;
use crate::services::preferences::{PreferencesStore, PreferencesStoreTrait};
use crate::services::search::SearchDispatcher;
use crate::types::errors::{AppError, SearchError, SearchHistoryError, VideoStoreError};
use crate::types::home::{HomeViewState, VideoCard};
use crate::types::search::{SearchOutcome, SearchState};
use crate::types::settings::AppSettings;
use crate::types::video::VideoRecord;

/// Central application struct.
///
/// `VideoStore` borrows the connection, so it is created on demand from `db`.
pub struct App {
    pub db: Database,
    pub home: HomeViewState,
    history: SearchHistoryManager,
    dispatcher: SearchDispatcher,
}

/// Resolves a configured file name: absolute paths are kept, relative ones
/// land in `base`.
fn resolve(base: PathBuf, file: &str) -> PathBuf {
    let path = Path::new(file);
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}

impl App {
    /// Opens the on-disk stores named in `settings`.
    pub fn new(settings: &AppSettings) -> Result<Self, AppError> {
        let db_path = resolve(platform::get_data_dir(), &settings.storage.database_file);
        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let prefs_path = resolve(platform::get_config_dir(), &settings.storage.preferences_file);

        tracing::info!(
            database = %db_path.display(),
            preferences = %prefs_path.display(),
            "opening stores"
        );

        let db = Database::open(&db_path)?;
        let prefs = PreferencesStore::new(Some(prefs_path.to_string_lossy().to_string()));
        Self::with_stores(db, prefs, Duration::from_millis(settings.search.delay_ms))
    }

    /// In-memory video database with preferences at `prefs_path`.
    pub fn in_memory(prefs_path: String, search_delay: Duration) -> Result<Self, AppError> {
        let db = Database::open_in_memory()?;
        Self::with_stores(db, PreferencesStore::new(Some(prefs_path)), search_delay)
    }

    /// Builds the app from already opened stores and loads the search history.
    pub fn with_stores(
        db: Database,
        mut prefs: PreferencesStore,
        search_delay: Duration,
    ) -> Result<Self, AppError> {
        prefs.load()?;
        let mut history = SearchHistoryManager::new(prefs);
        history.load()?;

        Ok(Self {
            db,
            home: HomeViewState::new(),
            history,
            dispatcher: SearchDispatcher::new(search_delay),
        })
    }

    pub fn video_store(&self) -> VideoStore<'_> {
        VideoStore::new(self.db.connection())
    }

    pub fn add_video(&self, name: &str, cover_image: &str) -> Result<VideoRecord, VideoStoreError> {
        self.video_store().add_video(name, cover_image)
    }

    /// Videos shown in the recommended tab, in insertion order.
    pub fn home_feed(&self) -> Result<Vec<VideoRecord>, VideoStoreError> {
        self.video_store().get_all_videos()
    }

    /// Home feed rendered as cards with synthesized author and view labels.
    pub fn video_cards<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Vec<VideoCard>, VideoStoreError> {
        Ok(self
            .home_feed()?
            .iter()
            .map(|v| VideoCard::from_record(v, &mut *rng))
            .collect())
    }

    /// Records `query` in history, then runs the delayed search.
    ///
    /// An empty query is a no-op and leaves history untouched. This holds
    /// `&mut self` across the delay; overlapping searches go through
    /// [`App::record_search`] and [`App::search`] instead.
    pub async fn perform_search(&mut self, query: &str) -> Result<SearchOutcome, SearchError> {
        if !self.record_search(query)? {
            return Ok(SearchOutcome::Skipped);
        }
        self.search(query).await
    }

    /// Puts a non-empty `query` at the front of the history. Returns `false`
    /// for an empty query.
    pub fn record_search(&mut self, query: &str) -> Result<bool, SearchHistoryError> {
        if query.is_empty() {
            return Ok(false);
        }
        self.history.record(query)?;
        Ok(true)
    }

    /// Runs the delayed search without touching history. Only the latest of
    /// several in-flight calls publishes.
    pub async fn search(&self, query: &str) -> Result<SearchOutcome, SearchError> {
        let store = VideoStore::new(self.db.connection());
        self.dispatcher.dispatch(query, &store).await
    }

    /// Re-runs the history entry at `index` as a search.
    pub async fn search_from_history(&mut self, index: usize) -> Result<SearchOutcome, SearchError> {
        let term = self
            .history
            .entries()
            .get(index)
            .cloned()
            .ok_or(SearchHistoryError::OutOfRange {
                index,
                len: self.history.entries().len(),
            })?;
        self.perform_search(&term).await
    }

    pub fn search_history(&self) -> &[String] {
        self.history.entries()
    }

    pub fn delete_history(&mut self, index: usize) -> Result<String, SearchHistoryError> {
        self.history.remove_at(index)
    }

    /// Clears the query: published results go away and any pending search is dropped.
    pub fn clear_search(&self) {
        self.dispatcher.reset();
    }

    pub fn search_state(&self) -> SearchState {
        self.dispatcher.state()
    }

    pub fn subscribe_search(&self) -> watch::Receiver<SearchState> {
        self.dispatcher.subscribe()
    }

    pub fn dispatcher(&self) -> &SearchDispatcher {
        &self.dispatcher
    }
}
