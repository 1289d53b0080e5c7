use serde::{Deserialize, Serialize};

/// Top-level application settings container, persisted as `settings.json`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct AppSettings {
    pub general: GeneralSettings,
    pub search: SearchSettings,
    pub storage: StorageSettings,
}

/// General settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneralSettings {
    /// Default `tracing` filter when `RUST_LOG` is not set.
    pub log_level: String,
}

impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// Search behaviour.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchSettings {
    /// Artificial delay before search results are published.
    pub delay_ms: u64,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self { delay_ms: 500 }
    }
}

/// On-disk locations. Relative file names resolve against the platform data dir.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StorageSettings {
    pub database_file: String,
    pub preferences_file: String,
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            database_file: "videos.db".to_string(),
            preferences_file: "preferences.json".to_string(),
        }
    }
}
