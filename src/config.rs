use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Prefix for environment overrides, e.g. `SIGNUP__LOGGING__LEVEL=debug`
pub const ENV_PREFIX: &str = "SIGNUP";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub paths: PathsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// EnvFilter directive (RUST_LOG takes precedence)
    #[serde(default = "default_log_level")]
    pub level: String,
    /// In TUI mode, write logs to a file instead of stderr
    #[serde(default = "default_true")]
    pub to_file: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            to_file: default_true(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// How long the event loop waits for input before redrawing
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
    /// Re-check a field on every keystroke
    #[serde(default = "default_true")]
    pub live_validation: bool,
    /// Show passwords in clear text on the review screen and in `--emit-json`
    #[serde(default)]
    pub reveal_password_in_summary: bool,
}

fn default_tick_rate() -> u64 {
    250
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate(),
            live_validation: true,
            reveal_password_in_summary: false,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Log directory; empty means the platform data directory
    #[serde(default)]
    pub logs: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            logging: LoggingConfig::default(),
            ui: UiConfig::default(),
            paths: PathsConfig::default(),
        }
    }
}

impl Config {
    /// Optional global config in ~/.config/signup/config.toml
    pub fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("signup").join("config.toml"))
    }

    /// Load configuration from embedded defaults, the user config file, an
    /// explicit file, and `SIGNUP__*` environment variables, in that order.
    pub fn load(config_path: Option<&str>) -> Result<Self> {
        let defaults = Config::default();
        let defaults_json =
            serde_json::to_string(&defaults).context("Failed to serialize default config")?;

        let mut builder = config::Config::builder().add_source(config::File::from_str(
            &defaults_json,
            config::FileFormat::Json,
        ));

        if let Some(user_config) = Self::user_config_path() {
            if user_config.exists() {
                builder = builder.add_source(config::File::from(user_config));
            }
        }

        // Explicit config file (CLI override)
        if let Some(path) = config_path {
            builder = builder.add_source(config::File::with_name(path));
        }

        builder = builder.add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build().context("Failed to load configuration")?;
        config
            .try_deserialize()
            .context("Failed to deserialize configuration")
    }

    /// Get absolute path to logs directory
    pub fn logs_path(&self) -> PathBuf {
        if !self.paths.logs.is_empty() {
            return PathBuf::from(&self.paths.logs);
        }
        dirs::data_local_dir()
            .unwrap_or_else(std::env::temp_dir)
            .join("signup")
            .join("logs")
    }
}
