//! Configuration loading and management
//!
//! Configuration is loaded from `~/.config/aluna/config.toml`
//!
//! This module follows the XDG Base Directory Specification:
//! - Config: `$XDG_CONFIG_HOME/aluna/` (~/.config/aluna/)
//! - Data: `$XDG_DATA_HOME/aluna/` (~/.local/share/aluna/)
//! - State/Logs: `$XDG_STATE_HOME/aluna/` (~/.local/state/aluna/)

use crate::error::{Error, Result};
use serde::Deserialize;
use std::path::PathBuf;

/// Default window, in days, for the consistency score and insight summaries.
pub const DEFAULT_CONSISTENCY_WINDOW: i64 = 30;

/// Returns a best-effort home directory path.
fn home_dir() -> PathBuf {
    std::env::var_os("HOME")
        .map(PathBuf::from)
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Returns XDG_CONFIG_HOME or ~/.config
fn xdg_config_home() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| home_dir().join(".config"))
}

/// Returns XDG_DATA_HOME or ~/.local/share
fn xdg_data_home() -> PathBuf {
    std::env::var("XDG_DATA_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| home_dir().join(".local/share"))
}

/// Returns XDG_STATE_HOME or ~/.local/state
fn xdg_state_home() -> PathBuf {
    std::env::var("XDG_STATE_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| home_dir().join(".local/state"))
}

/// Main configuration struct
#[derive(Debug, Deserialize, Default)]
pub struct Config {
    /// Analytics configuration
    #[serde(default)]
    pub analytics: AnalyticsConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Analytics and insights configuration
#[derive(Debug, Deserialize)]
pub struct AnalyticsConfig {
    /// Days covered by the consistency score and insight summaries
    #[serde(default = "default_consistency_window_days")]
    pub consistency_window_days: i64,

    /// Days covered by the default trend series
    #[serde(default = "default_trend_window_days")]
    pub trend_window_days: i64,

    /// Number of sensations listed in "most common sensations"
    #[serde(default = "default_top_sensations_limit")]
    pub top_sensations_limit: usize,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            consistency_window_days: default_consistency_window_days(),
            trend_window_days: default_trend_window_days(),
            top_sensations_limit: default_top_sensations_limit(),
        }
    }
}

fn default_consistency_window_days() -> i64 {
    DEFAULT_CONSISTENCY_WINDOW
}

fn default_trend_window_days() -> i64 {
    7
}

fn default_top_sensations_limit() -> usize {
    crate::analytics::DEFAULT_TOP_SENSATIONS
}

/// Logging configuration
#[derive(Debug, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Maximum number of log files to keep
    #[serde(default = "default_max_log_files")]
    pub max_files: usize,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            max_files: default_max_log_files(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_max_log_files() -> usize {
    5
}

impl Config {
    /// Load configuration from the default path
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        if !config_path.exists() {
            tracing::info!("No config file found at {:?}, using defaults", config_path);
            return Ok(Config::default());
        }

        Self::load_from(&config_path)
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &PathBuf) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("failed to read config file {:?}: {}", path, e)))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("failed to parse config: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration, returning error message if invalid
    pub fn validate(&self) -> Result<()> {
        if self.analytics.consistency_window_days <= 0 {
            return Err(Error::Config(
                "analytics.consistency_window_days must be positive".to_string(),
            ));
        }
        if self.analytics.trend_window_days <= 0 {
            return Err(Error::Config(
                "analytics.trend_window_days must be positive".to_string(),
            ));
        }
        if self.analytics.top_sensations_limit == 0 {
            return Err(Error::Config(
                "analytics.top_sensations_limit must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Returns the default config file path
    ///
    /// `$XDG_CONFIG_HOME/aluna/config.toml` (~/.config/aluna/config.toml)
    pub fn config_path() -> PathBuf {
        xdg_config_home().join("aluna").join("config.toml")
    }

    /// Returns the data directory path (for exported snapshots)
    ///
    /// `$XDG_DATA_HOME/aluna/` (~/.local/share/aluna/)
    pub fn data_dir() -> PathBuf {
        xdg_data_home().join("aluna")
    }

    /// Returns the state directory path (for logs)
    ///
    /// `$XDG_STATE_HOME/aluna/` (~/.local/state/aluna/)
    pub fn state_dir() -> PathBuf {
        xdg_state_home().join("aluna")
    }

    /// Returns the log file path
    ///
    /// `$XDG_STATE_HOME/aluna/aluna.log` (~/.local/state/aluna/aluna.log)
    pub fn log_path() -> PathBuf {
        Self::state_dir().join("aluna.log")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.analytics.consistency_window_days, 30);
        assert_eq!(config.analytics.trend_window_days, 7);
        assert_eq!(config.analytics.top_sensations_limit, 5);
        assert_eq!(config.logging.level, "info");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_config() {
        let toml = r#"
[analytics]
consistency_window_days = 14
top_sensations_limit = 3

[logging]
level = "debug"
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.analytics.consistency_window_days, 14);
        assert_eq!(config.analytics.top_sensations_limit, 3);
        assert_eq!(config.analytics.trend_window_days, 7);
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_validation_rejects_bad_windows() {
        let config: Config = toml::from_str("[analytics]\nconsistency_window_days = 0").unwrap();
        assert!(config.validate().is_err());

        let config: Config = toml::from_str("[analytics]\ntop_sensations_limit = 0").unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[logging]\nlevel = \"trace\"\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.logging.level, "trace");
    }

    #[test]
    fn test_load_from_missing_file_errors() {
        let path = PathBuf::from("/nonexistent/aluna/config.toml");
        assert!(Config::load_from(&path).is_err());
    }
}
