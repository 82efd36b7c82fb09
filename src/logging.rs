//! Logging configuration for the portfolio.
//!
//! The interactive UI owns the terminal, so logs go to a file there. Headless
//! runs log to stderr where test harnesses can capture them.

use std::fs::{self, File};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Directory name used under the platform state/config directories.
const APP_DIR: &str = "cr0m80-portfolio";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Initializes logging for the interactive UI.
///
/// Location: `~/.local/state/cr0m80-portfolio/portfolio.log` on Linux,
/// or the platform-appropriate state/config directory elsewhere.
pub fn init_file_logging() {
    let log_path = get_log_path();

    if let Some(parent) = log_path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            eprintln!("Warning: Could not create log directory: {e}");
            return;
        }
    }

    // Truncated on each run to avoid unbounded growth
    let log_file = match File::create(&log_path) {
        Ok(f) => f,
        Err(e) => {
            eprintln!("Warning: Could not create log file: {e}");
            return;
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(log_file)
        .with_ansi(false)
        .init();
}

/// Initializes logging for headless mode.
pub fn init_stderr_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .init();
}

/// Returns the path for the log file.
pub fn get_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        return state_dir.join(APP_DIR).join("portfolio.log");
    }

    if let Some(config_dir) = dirs::config_dir() {
        return config_dir.join(APP_DIR).join("portfolio.log");
    }

    std::env::temp_dir().join("portfolio.log")
}
