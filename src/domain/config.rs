//! # Configuration
//!
//! Manages the loading and parsing of the application's configuration file (`config.yaml`).
//! Every section is optional; missing fields fall back to defaults.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_PATH: &str = "data/config.yaml";

/// Main application configuration structure.
/// Matches the layout of `data/config.yaml`.
#[derive(Debug, Default, Deserialize, Clone)]
pub struct AppConfig {
    #[serde(default)]
    pub bot: BotConfig,
    #[serde(default)]
    pub dispatch: DispatchConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct BotConfig {
    #[serde(default = "default_name")]
    pub name: String,
    /// Text a message must start with to be treated as a command. Empty means every message.
    #[serde(default = "default_prefix")]
    pub prefix: String,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            prefix: default_prefix(),
        }
    }
}

/// Limits applied by the scheduler that runs command handlers.
#[derive(Debug, Deserialize, Clone)]
pub struct DispatchConfig {
    #[serde(default = "default_max_concurrent")]
    pub max_concurrent_tasks: usize,
    #[serde(default)]
    pub handler_timeout_secs: Option<u64>,
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            max_concurrent_tasks: default_max_concurrent(),
            handler_timeout_secs: None,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_log_dir")]
    pub directory: String,
    #[serde(default = "default_log_file")]
    pub file: String,
    #[serde(default = "default_log_filter")]
    pub filter: String,
    #[serde(default)]
    pub console: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            directory: default_log_dir(),
            file: default_log_file(),
            filter: default_log_filter(),
            console: false,
        }
    }
}

fn default_name() -> String {
    "Parley".to_string()
}
fn default_prefix() -> String {
    ".".to_string()
}
fn default_max_concurrent() -> usize {
    64
}
fn default_log_dir() -> String {
    "data".to_string()
}
fn default_log_file() -> String {
    "session.log".to_string()
}
fn default_log_filter() -> String {
    "info".to_string()
}

impl AppConfig {
    pub fn from_yaml(content: &str) -> Result<Self> {
        let config: AppConfig =
            serde_yaml::from_str(content).context("Failed to parse config.yaml")?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::from_yaml(&content)
    }

    /// Resolve the config file to use.
    ///
    /// An explicit path must exist. Otherwise `data/config.yaml`, then the user config
    /// directory, and finally the built-in defaults.
    pub fn discover(explicit: Option<&Path>) -> Result<(Self, Option<PathBuf>)> {
        if let Some(path) = explicit {
            return Ok((Self::load(path)?, Some(path.to_path_buf())));
        }

        let mut candidates = vec![PathBuf::from(DEFAULT_CONFIG_PATH)];
        if let Some(dir) = dirs::config_dir() {
            candidates.push(dir.join("parley").join("config.yaml"));
        }

        for candidate in candidates {
            if candidate.exists() {
                return Ok((Self::load(&candidate)?, Some(candidate)));
            }
        }

        Ok((Self::default(), None))
    }

    fn validate(&self) -> Result<()> {
        if self.dispatch.max_concurrent_tasks == 0 {
            anyhow::bail!("dispatch.max_concurrent_tasks must be at least 1");
        }
        if self.bot.prefix.chars().any(char::is_whitespace) {
            anyhow::bail!("bot.prefix must not contain whitespace");
        }
        Ok(())
    }
}
