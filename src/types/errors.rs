use thiserror::Error;

// === VideoStoreError ===

/// Errors related to the video store.
#[derive(Debug, Error)]
pub enum VideoStoreError {
    /// Database operation failed.
    #[error("Video store database error: {0}")]
    DatabaseError(String),
}

impl From<rusqlite::Error> for VideoStoreError {
    fn from(err: rusqlite::Error) -> Self {
        VideoStoreError::DatabaseError(err.to_string())
    }
}

// === PreferencesError ===

/// Errors related to the key-value preferences area.
#[derive(Debug, Error)]
pub enum PreferencesError {
    /// File system I/O error.
    #[error("Preferences I/O error: {0}")]
    IoError(String),
    /// JSON serialization/deserialization error.
    #[error("Preferences serialization error: {0}")]
    SerializationError(String),
    /// A stored value does not have the requested type.
    #[error("Preference '{key}' has an unexpected type")]
    TypeMismatch { key: String },
}

// === SearchHistoryError ===

/// Errors related to the search history list.
#[derive(Debug, Error)]
pub enum SearchHistoryError {
    /// The index does not name an existing entry.
    #[error("Search history index {index} out of range (len {len})")]
    OutOfRange { index: usize, len: usize },
    /// Persisting or loading the list failed.
    #[error(transparent)]
    Preferences(#[from] PreferencesError),
}

// === SearchError ===

/// Errors raised while performing a search.
#[derive(Debug, Error)]
pub enum SearchError {
    /// Reading the corpus failed.
    #[error(transparent)]
    Store(#[from] VideoStoreError),
    /// Recording the query in history failed.
    #[error(transparent)]
    History(#[from] SearchHistoryError),
}

// === SettingsError ===

/// Errors related to settings management.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// File system I/O error.
    #[error("Settings I/O error: {0}")]
    IoError(String),
    /// JSON serialization/deserialization error.
    #[error("Settings serialization error: {0}")]
    SerializationError(String),
    /// The provided settings key is invalid.
    #[error("Invalid settings key: {0}")]
    InvalidKey(String),
    /// The provided value is invalid for the key.
    #[error("Invalid settings value: {0}")]
    InvalidValue(String),
}

// === TabError ===

/// Errors related to home tab selection.
#[derive(Debug, Error)]
pub enum TabError {
    /// The provided tab index is out of bounds.
    #[error("Invalid tab index: {0}")]
    InvalidIndex(usize),
}

// === AppError ===

/// Errors raised while assembling the application from its stores.
#[derive(Debug, Error)]
pub enum AppError {
    /// The video database could not be opened or migrated.
    #[error("Failed to open video database: {0}")]
    Database(#[from] rusqlite::Error),
    /// A storage directory could not be created.
    #[error("Failed to prepare storage directory: {0}")]
    Io(#[from] std::io::Error),
    /// The preferences file could not be read.
    #[error(transparent)]
    Preferences(#[from] PreferencesError),
    /// The stored search history could not be loaded.
    #[error(transparent)]
    History(#[from] SearchHistoryError),
}
