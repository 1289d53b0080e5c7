use bilihome::types::errors::*;

// === VideoStoreError Tests ===

#[test]
fn video_store_error_display() {
    let err = VideoStoreError::DatabaseError("disk full".to_string());
    assert_eq!(err.to_string(), "Video store database error: disk full");
}

#[test]
fn video_store_error_from_rusqlite() {
    let err: VideoStoreError = rusqlite::Error::QueryReturnedNoRows.into();
    assert!(matches!(err, VideoStoreError::DatabaseError(_)));
}

// === PreferencesError Tests ===

#[test]
fn preferences_error_display_variants() {
    assert_eq!(
        PreferencesError::IoError("denied".to_string()).to_string(),
        "Preferences I/O error: denied"
    );
    assert_eq!(
        PreferencesError::SerializationError("bad json".to_string()).to_string(),
        "Preferences serialization error: bad json"
    );
    assert_eq!(
        PreferencesError::TypeMismatch {
            key: "searchHistory".to_string()
        }
        .to_string(),
        "Preference 'searchHistory' has an unexpected type"
    );
}

// === SearchHistoryError Tests ===

#[test]
fn search_history_out_of_range_display() {
    let err = SearchHistoryError::OutOfRange { index: 7, len: 3 };
    assert_eq!(err.to_string(), "Search history index 7 out of range (len 3)");
}

#[test]
fn search_history_wraps_preferences_transparently() {
    let err: SearchHistoryError = PreferencesError::IoError("denied".to_string()).into();
    assert_eq!(err.to_string(), "Preferences I/O error: denied");
}

// === SearchError Tests ===

#[test]
fn search_error_from_components() {
    let err: SearchError = VideoStoreError::DatabaseError("locked".to_string()).into();
    assert!(matches!(err, SearchError::Store(_)));
    assert_eq!(err.to_string(), "Video store database error: locked");

    let err: SearchError = SearchHistoryError::OutOfRange { index: 0, len: 0 }.into();
    assert!(matches!(err, SearchError::History(_)));
}

// === SettingsError Tests ===

#[test]
fn settings_error_display_variants() {
    assert_eq!(
        SettingsError::InvalidKey("nope".to_string()).to_string(),
        "Invalid settings key: nope"
    );
    assert_eq!(
        SettingsError::InvalidValue("x".to_string()).to_string(),
        "Invalid settings value: x"
    );
}

// === TabError Tests ===

#[test]
fn tab_error_invalid_index_display() {
    let err = TabError::InvalidIndex(9);
    assert_eq!(err.to_string(), "Invalid tab index: 9");
}

#[test]
fn errors_implement_error_trait() {
    let err: Box<dyn std::error::Error> = Box::new(TabError::InvalidIndex(1));
    assert!(err.source().is_none());
}
