//! Configuration management for namesake.
//!
//! This crate provides configuration loading, saving, and validation
//! with support for TOML format and XDG directory conventions.

pub mod constants;
mod settings;
mod xdg;

pub use settings::{Config, GeneralSettings, KeySettings, LoggingSettings};
pub use xdg::{get_cache_dir, get_config_dir};

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Default values as constants
pub mod defaults {
    pub const ENABLED_ON_START: bool = true;
    pub const ADVANCE_KEYS: &[&str] = &["alt+]"];
    pub const RETREAT_KEYS: &[&str] = &["alt+["];
    pub const MIN_LOG_LEVEL: &str = "info";
    pub const MAX_LOG_ENTRIES: usize = 500;
}

impl Config {
    /// Load configuration from the default config file.
    ///
    /// On first run, creates the file with default values.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    /// Load configuration from `path`.
    ///
    /// A missing file is created with default values. Missing keys are
    /// filled with defaults and the normalized content is written back.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            let config = Self::default();
            config.save_to(path)?;
            return Ok(config);
        }

        let original_content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config = Self::validate_content(&original_content)
            .with_context(|| format!("Invalid config file {}", path.display()))?;

        let normalized_content = toml::to_string_pretty(&config)?;
        if original_content != normalized_content {
            config.save_to(path)?;
        }

        Ok(config)
    }

    /// Save configuration to `path`, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file {}", path.display()))?;
        Ok(())
    }

    /// Get path to config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(get_config_dir()?.join(constants::CONFIG_FILE_NAME))
    }

    /// Validate config content.
    pub fn validate_content(content: &str) -> Result<Config> {
        toml::from_str(content).map_err(|e| anyhow::anyhow!("{}", e))
    }

    /// Log file path: the configured one, else the cache directory.
    pub fn log_file_path(&self) -> Result<PathBuf> {
        match self.logging.file_path {
            Some(ref path) => Ok(PathBuf::from(path)),
            None => Ok(get_cache_dir()?.join(constants::LOG_FILE_NAME)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert!(config.general.enabled_on_start);
        assert_eq!(config.keys.advance, vec!["alt+]"]);
        assert_eq!(config.keys.retreat, vec!["alt+["]);
        assert_eq!(config.logging.min_level, "info");
        assert_eq!(config.logging.max_entries, 500);
    }

    #[test]
    fn test_first_load_writes_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config, Config::default());
        assert!(path.exists());
    }

    #[test]
    fn test_load_fills_missing_keys() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[keys]\nadvance = [\"ctrl+n\"]\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.keys.advance, vec!["ctrl+n"]);
        assert_eq!(config.keys.retreat, vec!["alt+["]);
        assert!(config.general.enabled_on_start);

        let rewritten = std::fs::read_to_string(&path).unwrap();
        assert!(rewritten.contains("retreat"));
        assert!(rewritten.contains("min_level"));
    }

    #[test]
    fn test_save_and_reload() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");

        let mut config = Config::default();
        config.general.enabled_on_start = false;
        config.logging.file_path = Some("/tmp/namesake-test.log".to_string());
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded, config);
        assert_eq!(
            loaded.log_file_path().unwrap(),
            PathBuf::from("/tmp/namesake-test.log")
        );
    }

    #[test]
    fn test_invalid_content_is_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[general]\nenabled_on_start = \"yes\"\n").unwrap();

        assert!(Config::load_from(&path).is_err());
        assert!(Config::validate_content("not = [valid").is_err());
    }
}
