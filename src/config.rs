//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub insights: InsightsConfig,

    #[serde(default)]
    pub logging: LoggingConfig,

    /// File the settings came from, if any
    #[serde(skip)]
    pub source: Option<PathBuf>,

    /// Problems met while loading; logging is not set up yet at that point,
    /// so the caller reports them once it is
    #[serde(skip)]
    pub warnings: Vec<String>,
}

/// Chatbot backend configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

/// Default backend URL, matching the backend's development server
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

/// Insights dashboard configuration
#[derive(Debug, Clone, Deserialize)]
pub struct InsightsConfig {
    #[serde(default = "default_poll_interval")]
    pub poll_interval_ms: u64,

    /// Number of log lines to request; `None` leaves it to the backend
    #[serde(default)]
    pub log_lines: Option<u32>,
}

fn default_poll_interval() -> u64 {
    5000 // 5 seconds
}

impl Default for InsightsConfig {
    fn default() -> Self {
        Self {
            poll_interval_ms: default_poll_interval(),
            log_lines: None,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Self::parse(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })
    }

    fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.source = Some(path.to_path_buf());
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from default locations or environment
    ///
    /// Unreadable or malformed files are skipped and noted in `warnings`.
    pub fn load_default() -> Self {
        let config_paths = [
            dirs::config_dir().map(|p| p.join("diamond-chat").join("config.toml")),
            Some(PathBuf::from("./config.toml")),
        ];

        Self::load_first(config_paths.iter().flatten(), |key| std::env::var(key).ok())
    }

    /// First existing path that loads wins, then the overrides from `lookup`
    fn load_first<'a>(
        paths: impl IntoIterator<Item = &'a PathBuf>,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Self {
        let mut warnings = Vec::new();
        let mut config = None;

        for path in paths {
            if !path.exists() {
                continue;
            }
            match Self::load(path) {
                Ok(mut loaded) => {
                    loaded.source = Some(path.clone());
                    config = Some(loaded);
                    break;
                }
                Err(e) => warnings.push(format!("Skipping config file: {}", e)),
            }
        }

        let mut config = config.unwrap_or_default();
        config.warnings = warnings;
        config.apply_overrides(lookup);
        config
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(url) = lookup("DIAMOND_CHAT_API_URL") {
            self.api.base_url = url;
        }

        if let Some(interval) = lookup("DIAMOND_CHAT_POLL_INTERVAL_MS") {
            match interval.parse() {
                Ok(ms) => self.insights.poll_interval_ms = ms,
                Err(_) => self
                    .warnings
                    .push(format!("Ignoring invalid DIAMOND_CHAT_POLL_INTERVAL_MS: {}", interval)),
            }
        }

        if let Some(level) = lookup("DIAMOND_CHAT_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = lookup("DIAMOND_CHAT_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# Diamond Chat Configuration
#
# Environment variables override these settings:
# - DIAMOND_CHAT_API_URL
# - DIAMOND_CHAT_POLL_INTERVAL_MS
# - DIAMOND_CHAT_LOG_LEVEL
# - DIAMOND_CHAT_LOG_FORMAT

[api]
# Chatbot backend URL
base_url = "http://localhost:8000"

[insights]
# How often the insights dashboard refreshes (ms)
poll_interval_ms = 5000

# Number of log lines to request (backend default when unset)
# log_lines = 100

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}
