//! Configuration management for the portfolio.
//!
//! Loads settings from a TOML file. Every section is optional; a missing file
//! yields the defaults the site ships with.

use crate::error::{PortfolioError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    /// Identity shown in the shell prompt and error messages.
    #[serde(default)]
    pub profile: ProfileConfig,

    /// Loading transition played between views.
    #[serde(default)]
    pub loader: LoaderConfig,

    /// UI behaviour.
    #[serde(default)]
    pub ui: UiConfig,
}

/// Identity used by the simulated shell.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProfileConfig {
    /// User part of the prompt (`CR0M80` in `CR0M80@portfolio:~$`).
    #[serde(default = "default_user")]
    pub user: String,

    /// Host part of the prompt.
    #[serde(default = "default_host")]
    pub host: String,

    /// Shell name used as the prefix of error messages.
    #[serde(default = "default_shell")]
    pub shell: String,
}

fn default_user() -> String {
    "CR0M80".to_string()
}

fn default_host() -> String {
    "portfolio".to_string()
}

fn default_shell() -> String {
    "bash".to_string()
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            user: default_user(),
            host: default_host(),
            shell: default_shell(),
        }
    }
}

impl ProfileConfig {
    /// Returns the prompt label, e.g. `CR0M80@portfolio:~$`.
    pub fn prompt_label(&self) -> String {
        format!("{}@{}:~$", self.user, self.host)
    }
}

/// One step of the loading bar: wait `delay_ms`, then show `percent`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoaderStepConfig {
    pub percent: u8,
    pub delay_ms: u64,
}

/// Loading transition configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoaderConfig {
    /// Progress steps, played in order.
    #[serde(default = "default_steps")]
    pub steps: Vec<LoaderStepConfig>,

    /// Delay after the last step before the loader hides.
    #[serde(default = "default_settle_ms")]
    pub settle_ms: u64,
}

fn default_steps() -> Vec<LoaderStepConfig> {
    vec![
        LoaderStepConfig { percent: 30, delay_ms: 200 },
        LoaderStepConfig { percent: 60, delay_ms: 300 },
        LoaderStepConfig { percent: 90, delay_ms: 600 },
        LoaderStepConfig { percent: 100, delay_ms: 200 },
    ]
}

fn default_settle_ms() -> u64 {
    600
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            steps: default_steps(),
            settle_ms: default_settle_ms(),
        }
    }
}

/// Which view the application opens on.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum StartView {
    /// The mode selection screen.
    #[default]
    Selector,
    /// The simulated terminal.
    Terminal,
    /// The scrollable portfolio page.
    Gui,
}

impl std::str::FromStr for StartView {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "selector" => Ok(Self::Selector),
            "terminal" => Ok(Self::Terminal),
            "gui" => Ok(Self::Gui),
            _ => Err(format!(
                "Invalid view: {s}. Expected: selector, terminal, or gui"
            )),
        }
    }
}

/// UI configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UiConfig {
    /// View shown at startup.
    #[serde(default)]
    pub start_view: StartView,

    /// Event poll interval; also drives the typing animation.
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

fn default_tick_rate_ms() -> u64 {
    100
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            start_view: StartView::default(),
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}

impl UiConfig {
    /// Returns the tick rate as a duration.
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }
}

impl Config {
    /// Returns the default config file path for the current platform.
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("cr0m80-portfolio")
            .join("config.toml")
    }

    /// Loads configuration from a TOML file.
    ///
    /// A missing file is not an error; defaults are returned instead.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| PortfolioError::config(format!("Failed to read config file: {e}")))?;

        Self::parse_toml(&content, path)
    }

    /// Parses and validates configuration from a TOML string.
    fn parse_toml(content: &str, path: &Path) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(|e| {
            PortfolioError::config(format!(
                "Configuration error in {}:\n  {}",
                path.display(),
                e
            ))
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Checks invariants serde cannot express.
    pub fn validate(&self) -> Result<()> {
        if self.profile.user.trim().is_empty() || self.profile.host.trim().is_empty() {
            return Err(PortfolioError::config(
                "profile.user and profile.host must not be empty",
            ));
        }
        if self.profile.shell.trim().is_empty() {
            return Err(PortfolioError::config("profile.shell must not be empty"));
        }

        let mut previous = 0u8;
        for (i, step) in self.loader.steps.iter().enumerate() {
            if step.percent > 100 {
                return Err(PortfolioError::config(format!(
                    "loader step {} exceeds 100% ({}%)",
                    i + 1,
                    step.percent
                )));
            }
            if step.percent < previous {
                return Err(PortfolioError::config(format!(
                    "loader step {} goes backwards ({}% -> {}%)",
                    i + 1,
                    previous,
                    step.percent
                )));
            }
            previous = step.percent;
        }

        if self.ui.tick_rate_ms == 0 {
            return Err(PortfolioError::config("ui.tick_rate_ms must be positive"));
        }

        Ok(())
    }
}
