// Platform paths
// Resolves where settings, preferences and the video database live on each OS.
//
// Linux:   $XDG_CONFIG_HOME/bilihome, $XDG_DATA_HOME/bilihome
// macOS:   ~/Library/Application Support/Bilihome
// Windows: %APPDATA%/Bilihome

use std::env;
use std::path::PathBuf;

#[cfg(target_os = "linux")]
const APP_DIR: &str = "bilihome";
#[cfg(not(target_os = "linux"))]
const APP_DIR: &str = "Bilihome";

#[cfg(not(target_os = "windows"))]
fn home_dir() -> PathBuf {
    PathBuf::from(env::var("HOME").unwrap_or_else(|_| String::from("/tmp")))
}

/// Returns the directory holding `settings.json` and `preferences.json`.
pub fn get_config_dir() -> PathBuf {
    #[cfg(target_os = "linux")]
    {
        match env::var("XDG_CONFIG_HOME") {
            Ok(xdg) => PathBuf::from(xdg).join(APP_DIR),
            Err(_) => home_dir().join(".config").join(APP_DIR),
        }
    }
    #[cfg(target_os = "macos")]
    {
        home_dir()
            .join("Library")
            .join("Application Support")
            .join(APP_DIR)
    }
    #[cfg(target_os = "windows")]
    {
        let appdata = env::var("APPDATA")
            .unwrap_or_else(|_| String::from("C:\\Users\\Default\\AppData\\Roaming"));
        PathBuf::from(appdata).join(APP_DIR)
    }
    #[cfg(not(any(target_os = "linux", target_os = "macos", target_os = "windows")))]
    {
        home_dir().join(".config").join(APP_DIR)
    }
}

/// Returns the directory holding the video database.
/// Same as the config dir everywhere but Linux.
pub fn get_data_dir() -> PathBuf {
    #[cfg(target_os = "linux")]
    {
        match env::var("XDG_DATA_HOME") {
            Ok(xdg) => PathBuf::from(xdg).join(APP_DIR),
            Err(_) => home_dir().join(".local").join("share").join(APP_DIR),
        }
    }
    #[cfg(not(target_os = "linux"))]
    {
        get_config_dir()
    }
}
