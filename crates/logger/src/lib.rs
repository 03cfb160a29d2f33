//! Logging infrastructure for namesake.
//!
//! A process-wide logger writing to a file and keeping the most recent
//! entries in memory. Until [`init`] is called every logging function is a
//! no-op, so library users that never initialize it pay nothing.

use chrono::Local;
use std::collections::VecDeque;
use std::fs::{self, OpenOptions};
use std::io::Write as IoWrite;
use std::path::PathBuf;
use std::sync::{Mutex, OnceLock};

/// Log entry
#[derive(Debug, Clone)]
pub struct LogEntry {
    /// Timestamp in HH:MM:SS format
    pub timestamp: String,
    /// Message level
    pub level: LogLevel,
    /// Message text
    pub message: String,
}

/// Log level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    /// Convert log level to string
    pub fn to_str(self) -> &'static str {
        match self {
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
        }
    }
}

impl std::str::FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(format!("Unknown log level: {}", s)),
        }
    }
}

#[derive(Debug)]
struct Logger {
    /// Most recent entries, oldest first
    entries: VecDeque<LogEntry>,
    max_entries: usize,
    min_level: LogLevel,
    file_path: PathBuf,
}

impl Logger {
    fn new(file_path: PathBuf, max_entries: usize, min_level: LogLevel) -> Self {
        if let Some(parent) = file_path.parent() {
            let _ = fs::create_dir_all(parent);
        }

        // Truncate on startup
        if let Ok(mut file) = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&file_path)
        {
            let _ = writeln!(file, "=== namesake log start ===");
        }

        Self {
            entries: VecDeque::new(),
            max_entries,
            min_level,
            file_path,
        }
    }

    fn add_entry(&mut self, level: LogLevel, message: String) {
        if level < self.min_level {
            return;
        }

        let timestamp = Local::now().format("%H:%M:%S").to_string();

        // Recreate the file if it was deleted while running
        if let Ok(mut file) = OpenOptions::new()
            .append(true)
            .create(true)
            .open(&self.file_path)
        {
            let _ = writeln!(file, "[{}] {}: {}", timestamp, level.to_str(), message);
        }

        self.entries.push_back(LogEntry {
            timestamp,
            level,
            message,
        });
        while self.entries.len() > self.max_entries {
            self.entries.pop_front();
        }
    }

    fn entries(&self) -> Vec<LogEntry> {
        self.entries.iter().cloned().collect()
    }
}

static LOGGER: OnceLock<Mutex<Logger>> = OnceLock::new();

fn log(level: LogLevel, message: String) {
    if let Some(Ok(mut logger)) = LOGGER.get().map(Mutex::lock) {
        logger.add_entry(level, message);
    }
}

/// Initialize the global logger.
///
/// Subsequent calls are ignored.
///
/// # Arguments
///
/// * `file_path` - Path to the log file, truncated on first call
/// * `max_entries` - Maximum number of log entries to keep in memory
/// * `min_level` - Minimum log level to record
pub fn init(file_path: PathBuf, max_entries: usize, min_level: LogLevel) {
    LOGGER.get_or_init(|| Mutex::new(Logger::new(file_path, max_entries, min_level)));
}

/// Whether [`init`] has been called.
pub fn is_initialized() -> bool {
    LOGGER.get().is_some()
}

/// Change the minimum level of the global logger.
pub fn set_min_level(level: LogLevel) {
    if let Some(Ok(mut logger)) = LOGGER.get().map(Mutex::lock) {
        logger.min_level = level;
    }
}

/// Log a debug message
pub fn debug(message: impl Into<String>) {
    log(LogLevel::Debug, message.into());
}

/// Log an informational message
pub fn info(message: impl Into<String>) {
    log(LogLevel::Info, message.into());
}

/// Log a warning message
pub fn warn(message: impl Into<String>) {
    log(LogLevel::Warn, message.into());
}

/// Log an error message
pub fn error(message: impl Into<String>) {
    log(LogLevel::Error, message.into());
}

/// Entries currently held in memory, oldest first.
pub fn entries() -> Vec<LogEntry> {
    match LOGGER.get().map(Mutex::lock) {
        Some(Ok(logger)) => logger.entries(),
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use tempfile::TempDir;

    #[test]
    fn test_log_level_from_str() {
        assert_eq!(LogLevel::from_str("debug"), Ok(LogLevel::Debug));
        assert_eq!(LogLevel::from_str("INFO"), Ok(LogLevel::Info));
        assert_eq!(LogLevel::from_str("warning"), Ok(LogLevel::Warn));
        assert_eq!(LogLevel::from_str("error"), Ok(LogLevel::Error));
        assert!(LogLevel::from_str("verbose").is_err());
    }

    #[test]
    fn test_logger_writes_file_and_memory() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("logs").join("namesake.log");
        let mut logger = Logger::new(path.clone(), 10, LogLevel::Info);

        logger.add_entry(LogLevel::Debug, "filtered".to_string());
        logger.add_entry(LogLevel::Info, "kept".to_string());

        let entries = logger.entries();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].message, "kept");

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("=== namesake log start ==="));
        assert!(content.contains("INFO: kept"));
        assert!(!content.contains("filtered"));
    }

    #[test]
    fn test_logger_caps_memory() {
        let dir = TempDir::new().unwrap();
        let mut logger = Logger::new(dir.path().join("capped.log"), 3, LogLevel::Debug);

        for i in 0..5 {
            logger.add_entry(LogLevel::Debug, format!("message {}", i));
        }

        let messages: Vec<String> = logger.entries().into_iter().map(|e| e.message).collect();
        assert_eq!(messages, vec!["message 2", "message 3", "message 4"]);
    }

    #[test]
    fn test_uninitialized_logging_is_noop() {
        // No test in this crate initializes the global logger
        assert!(!is_initialized());
        info("dropped");
        assert!(entries().is_empty());
    }
}
