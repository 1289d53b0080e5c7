//! Unit tests for the PreferencesStore public API using temp directories.

use bilihome::services::preferences::{PreferencesStore, PreferencesStoreTrait};
use bilihome::types::errors::PreferencesError;
use tempfile::TempDir;

fn store_in_temp(dir: &TempDir) -> PreferencesStore {
    let path = dir
        .path()
        .join("preferences.json")
        .to_string_lossy()
        .to_string();
    PreferencesStore::new(Some(path))
}

#[test]
fn test_missing_file_loads_empty() {
    let dir = TempDir::new().unwrap();
    let mut store = store_in_temp(&dir);
    store.load().unwrap();
    assert_eq!(store.get_string_array("searchHistory").unwrap(), None);
}

#[test]
fn test_set_string_array_persists_immediately() {
    let dir = TempDir::new().unwrap();
    {
        let mut store = store_in_temp(&dir);
        store.load().unwrap();
        store
            .set_string_array("searchHistory", &["swift".to_string(), "ios".to_string()])
            .unwrap();
    }

    let mut reopened = store_in_temp(&dir);
    reopened.load().unwrap();
    assert_eq!(
        reopened.get_string_array("searchHistory").unwrap(),
        Some(vec!["swift".to_string(), "ios".to_string()])
    );
}

#[test]
fn test_keys_are_independent() {
    let dir = TempDir::new().unwrap();
    let mut store = store_in_temp(&dir);
    store.load().unwrap();
    store.set_string_array("a", &["1".to_string()]).unwrap();
    store.set_string_array("b", &["2".to_string()]).unwrap();

    store.remove("a").unwrap();
    assert_eq!(store.get_string_array("a").unwrap(), None);
    assert_eq!(store.get_string_array("b").unwrap(), Some(vec!["2".to_string()]));
}

#[test]
fn test_remove_missing_key_is_ok() {
    let dir = TempDir::new().unwrap();
    let mut store = store_in_temp(&dir);
    store.load().unwrap();
    assert!(store.remove("nothing").is_ok());
}

#[test]
fn test_malformed_file_is_serialization_error() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("preferences.json"), "{ not json").unwrap();

    let mut store = store_in_temp(&dir);
    let result = store.load();
    assert!(matches!(result, Err(PreferencesError::SerializationError(_))));
}

#[test]
fn test_save_creates_parent_directories() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("deeper").join("preferences.json");
    let mut store = PreferencesStore::new(Some(path.to_string_lossy().to_string()));
    store.load().unwrap();
    store.set_string_array("k", &[]).unwrap();
    assert!(path.exists());
}

#[test]
fn test_failed_write_keeps_previous_values() {
    let dir = TempDir::new().unwrap();
    let mut store = store_in_temp(&dir);
    store.load().unwrap();
    store
        .set_string_array("searchHistory", &["swift".to_string()])
        .unwrap();

    std::fs::remove_file(store.path()).unwrap();
    std::fs::create_dir(store.path()).unwrap();

    let result = store.set_string_array("searchHistory", &["ios".to_string()]);
    assert!(matches!(result, Err(PreferencesError::IoError(_))));
    assert!(store.remove("searchHistory").is_err());
    assert_eq!(
        store.get_string_array("searchHistory").unwrap(),
        Some(vec!["swift".to_string()])
    );
}
