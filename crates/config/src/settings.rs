//! Configuration structures for namesake settings.

use serde::{Deserialize, Serialize};

use crate::defaults;

/// Application configuration with nested sections.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// General settings
    #[serde(default)]
    pub general: GeneralSettings,

    /// Key bindings for advance/retreat
    #[serde(default)]
    pub keys: KeySettings,

    /// Logging settings
    #[serde(default)]
    pub logging: LoggingSettings,
}

/// General settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneralSettings {
    /// Whether cycling is enabled when the editor starts
    #[serde(default = "default_enabled_on_start")]
    pub enabled_on_start: bool,
}

/// Key bindings, written as `"alt+]"`, `"ctrl+shift+right"` and so on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeySettings {
    /// Keys that move to the next sibling document
    #[serde(default = "default_advance_keys")]
    pub advance: Vec<String>,

    /// Keys that move to the previous sibling document
    #[serde(default = "default_retreat_keys")]
    pub retreat: Vec<String>,
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// Log file path (optional)
    #[serde(default)]
    pub file_path: Option<String>,

    /// Minimum log level (debug, info, warn, error)
    #[serde(default = "default_min_level")]
    pub min_level: String,

    /// Number of entries kept in memory
    #[serde(default = "default_max_entries")]
    pub max_entries: usize,
}

// Default value functions for serde
fn default_enabled_on_start() -> bool {
    defaults::ENABLED_ON_START
}

fn default_advance_keys() -> Vec<String> {
    defaults::ADVANCE_KEYS.iter().map(|k| k.to_string()).collect()
}

fn default_retreat_keys() -> Vec<String> {
    defaults::RETREAT_KEYS.iter().map(|k| k.to_string()).collect()
}

fn default_min_level() -> String {
    defaults::MIN_LOG_LEVEL.to_string()
}

fn default_max_entries() -> usize {
    defaults::MAX_LOG_ENTRIES
}

impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            enabled_on_start: default_enabled_on_start(),
        }
    }
}

impl Default for KeySettings {
    fn default() -> Self {
        Self {
            advance: default_advance_keys(),
            retreat: default_retreat_keys(),
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            file_path: None,
            min_level: default_min_level(),
            max_entries: default_max_entries(),
        }
    }
}
