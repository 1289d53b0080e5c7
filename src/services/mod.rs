// Services: preferences, settings and search.

pub mod preferences;
pub mod search;
pub mod settings_engine;
