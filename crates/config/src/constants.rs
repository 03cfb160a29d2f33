//! Constants shared across namesake crates.

/// Config file name inside the config directory.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Log file name used when no explicit log path is configured.
pub const LOG_FILE_NAME: &str = "namesake.log";
