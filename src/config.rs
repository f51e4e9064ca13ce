//! App Configuration

use log::LevelFilter;

/// Local storage key holding the record collection
pub const DEFAULT_STORAGE_KEY: &str = "currículos";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Key under which the whole collection is stored
    pub storage_key: String,
    /// Heading shown in the top bar
    pub title: String,
    pub log_level: LevelFilter,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            title: "Gestión de Currículos".to_string(),
            log_level: if cfg!(debug_assertions) {
                LevelFilter::Debug
            } else {
                LevelFilter::Info
            },
        }
    }
}
