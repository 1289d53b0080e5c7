// Preferences store
// A small process-wide key-value area for user preferences such as the search history.
// Values are kept as a JSON object in `preferences.json` and written through on every change.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde_json::Value;

use crate::platform;
use crate::types::errors::PreferencesError;

/// Trait defining the preferences store interface.
pub trait PreferencesStoreTrait {
    fn load(&mut self) -> Result<(), PreferencesError>;
    fn save(&self) -> Result<(), PreferencesError>;
    fn get_string_array(&self, key: &str) -> Result<Option<Vec<String>>, PreferencesError>;
    fn set_string_array(&mut self, key: &str, values: &[String]) -> Result<(), PreferencesError>;
    fn remove(&mut self, key: &str) -> Result<(), PreferencesError>;
    fn path(&self) -> &str;
}

/// JSON-file backed preferences store.
pub struct PreferencesStore {
    path: String,
    values: BTreeMap<String, Value>,
}

impl PreferencesStore {
    /// Creates a new store.
    ///
    /// If `path_override` is `Some`, that file is used. Otherwise the store lives
    /// at `preferences.json` in the platform config directory. Nothing is read
    /// until [`PreferencesStoreTrait::load`] is called.
    pub fn new(path_override: Option<String>) -> Self {
        let path = match path_override {
            Some(p) => p,
            None => platform::get_config_dir()
                .join("preferences.json")
                .to_string_lossy()
                .to_string(),
        };

        Self {
            path,
            values: BTreeMap::new(),
        }
    }

    /// Writes `values` to disk. Callers commit to `self.values` only after this succeeds.
    fn write_values(&self, values: &BTreeMap<String, Value>) -> Result<(), PreferencesError> {
        let path = Path::new(&self.path);

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                PreferencesError::IoError(format!("Failed to create preferences directory: {}", e))
            })?;
        }

        let json = serde_json::to_string_pretty(values).map_err(|e| {
            PreferencesError::SerializationError(format!("Failed to serialize preferences: {}", e))
        })?;

        fs::write(path, json).map_err(|e| {
            tracing::warn!(path = %self.path, error = %e, "failed to write preferences");
            PreferencesError::IoError(format!("Failed to write preferences file: {}", e))
        })
    }
}

impl PreferencesStoreTrait for PreferencesStore {
    /// Loads all preferences from disk. A missing file yields an empty store.
    fn load(&mut self) -> Result<(), PreferencesError> {
        let path = Path::new(&self.path);

        if !path.exists() {
            tracing::debug!(path = %self.path, "no preferences file, starting empty");
            self.values.clear();
            return Ok(());
        }

        let content = fs::read_to_string(path).map_err(|e| {
            PreferencesError::IoError(format!("Failed to read preferences file: {}", e))
        })?;

        self.values = serde_json::from_str(&content).map_err(|e| {
            PreferencesError::SerializationError(format!(
                "Failed to parse preferences file: {}",
                e
            ))
        })?;
        tracing::debug!(path = %self.path, keys = self.values.len(), "loaded preferences");
        Ok(())
    }

    /// Writes every preference to disk, creating parent directories as needed.
    fn save(&self) -> Result<(), PreferencesError> {
        self.write_values(&self.values)
    }

    /// Returns the string array stored under `key`, if any.
    fn get_string_array(&self, key: &str) -> Result<Option<Vec<String>>, PreferencesError> {
        match self.values.get(key) {
            None => Ok(None),
            Some(value) => serde_json::from_value(value.clone())
                .map(Some)
                .map_err(|_| PreferencesError::TypeMismatch {
                    key: key.to_string(),
                }),
        }
    }

    /// Replaces the array stored under `key` and persists immediately.
    fn set_string_array(&mut self, key: &str, values: &[String]) -> Result<(), PreferencesError> {
        let value = serde_json::to_value(values).map_err(|e| {
            PreferencesError::SerializationError(format!("Failed to serialize '{}': {}", key, e))
        })?;
        let mut values = self.values.clone();
        values.insert(key.to_string(), value);
        self.write_values(&values)?;
        self.values = values;
        Ok(())
    }

    /// Removes `key` and persists. Removing a missing key is not an error.
    fn remove(&mut self, key: &str) -> Result<(), PreferencesError> {
        if !self.values.contains_key(key) {
            return Ok(());
        }
        let mut values = self.values.clone();
        values.remove(key);
        self.write_values(&values)?;
        self.values = values;
        Ok(())
    }

    fn path(&self) -> &str {
        &self.path
    }
}
