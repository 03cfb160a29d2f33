mod cli;

use anyhow::Result;
use clap::Parser;
use std::io;
use std::str::FromStr;

use cli::Cli;
use namesake_config::{constants, Config};
use namesake_logger::LogLevel;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // An explicit config must be valid; the default one falls back to defaults
    let config = match cli.config {
        Some(ref path) => Config::load_from(path)?,
        None => Config::load().unwrap_or_default(),
    };

    init_logger(&config);
    namesake_logger::debug(format!("Running {:?}", cli.command));

    let stdin = io::stdin();
    let stdout = io::stdout();
    let result = cli::run(cli.command, stdin.lock(), &mut stdout.lock());

    if let Err(ref e) = result {
        namesake_logger::error(format!("{:#}", e));
    }
    result
}

fn init_logger(config: &Config) {
    let log_file_path = config
        .log_file_path()
        .unwrap_or_else(|_| std::env::temp_dir().join(constants::LOG_FILE_NAME));
    let (min_level, warning) = min_log_level(&config.logging.min_level);
    namesake_logger::init(log_file_path, config.logging.max_entries, min_level);
    if let Some(warning) = warning {
        namesake_logger::warn(warning);
    }
}

/// Parse the configured level, falling back to info with a warning.
fn min_log_level(name: &str) -> (LogLevel, Option<String>) {
    match LogLevel::from_str(name) {
        Ok(level) => (level, None),
        Err(e) => (LogLevel::Info, Some(format!("{}, using info", e))),
    }
}
