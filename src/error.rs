//! Error types for the portfolio.
//!
//! Shell-level problems (unknown commands, `cd`) are reported inline in the
//! scrollback and never surface here. This enum covers the application shell
//! around it: configuration, the host terminal, headless scripts.

use thiserror::Error;

/// Main error type for portfolio operations.
#[derive(Error, Debug)]
pub enum PortfolioError {
    /// Configuration errors (invalid config file, bad CLI values, etc.)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Host terminal errors (raw mode, alternate screen, drawing, etc.)
    #[error("Terminal error: {0}")]
    Terminal(String),

    /// Headless script errors (unreadable script, bad event syntax, etc.)
    #[error("Script error: {0}")]
    Script(String),

    /// Internal application errors (unexpected states, bugs, etc.)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl PortfolioError {
    /// Creates a configuration error with the given message.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Creates a terminal error with the given message.
    pub fn terminal(msg: impl Into<String>) -> Self {
        Self::Terminal(msg.into())
    }

    /// Creates a script error with the given message.
    pub fn script(msg: impl Into<String>) -> Self {
        Self::Script(msg.into())
    }

    /// Creates an internal error with the given message.
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// The message without the category prefix.
    pub fn message(&self) -> &str {
        match self {
            Self::Config(msg) | Self::Terminal(msg) | Self::Script(msg) | Self::Internal(msg) => {
                msg
            }
        }
    }

    /// Returns the error category as a string for display purposes.
    pub fn category(&self) -> &'static str {
        match self {
            Self::Config(_) => "Configuration Error",
            Self::Terminal(_) => "Terminal Error",
            Self::Script(_) => "Script Error",
            Self::Internal(_) => "Internal Error",
        }
    }
}

/// Result type alias using PortfolioError.
pub type Result<T> = std::result::Result<T, PortfolioError>;
