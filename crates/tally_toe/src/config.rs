//! Application configuration.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Config file read from the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "tally_toe.toml";

/// Environment variable overriding the database path.
pub const DB_PATH_ENV: &str = "TALLY_TOE_DB_PATH";

/// Settings for the terminal app.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct AppConfig {
    /// SQLite file holding the scores.
    #[serde(default = "default_db_path")]
    db_path: String,

    /// File the terminal UI writes its log to.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,

    /// Tracing filter used when `RUST_LOG` is not set.
    #[serde(default = "default_log_filter")]
    log_filter: String,
}

#[instrument]
fn default_db_path() -> String {
    "tally_toe.db".to_string()
}

#[instrument]
fn default_log_file() -> PathBuf {
    PathBuf::from("tally_toe.log")
}

#[instrument]
fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            db_path: default_db_path(),
            log_file: default_log_file(),
            log_filter: default_log_filter(),
        }
    }
}

impl AppConfig {
    /// Parses configuration from TOML text. Missing fields take defaults.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        let config = Self::from_toml(&content)?;
        info!(db_path = %config.db_path, "Config loaded successfully");
        Ok(config)
    }

    /// Resolves the effective configuration from the process environment.
    ///
    /// An explicit `path` must exist. Without one, [`DEFAULT_CONFIG_FILE`]
    /// in the working directory is used if present, otherwise built-in
    /// defaults. Then [`DB_PATH_ENV`] overrides the database path, and
    /// `db_path` overrides both.
    #[instrument(skip_all)]
    pub fn load(path: Option<&Path>, db_path: Option<String>) -> Result<Self, ConfigError> {
        Self::resolve(
            path,
            Path::new(DEFAULT_CONFIG_FILE),
            std::env::var(DB_PATH_ENV).ok(),
            db_path,
        )
    }

    /// Same precedence as [`AppConfig::load`], with the fallback file and
    /// the environment override passed in.
    #[instrument(skip_all, fields(fallback = %fallback.display()))]
    pub fn resolve(
        path: Option<&Path>,
        fallback: &Path,
        env_db_path: Option<String>,
        db_path: Option<String>,
    ) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None if fallback.exists() => Self::from_file(fallback)?,
            None => {
                debug!("No config file, using defaults");
                Self::default()
            }
        };

        if let Some(env_path) = env_db_path {
            debug!(db_path = %env_path, "Database path taken from environment");
            config.db_path = env_path;
        }
        if let Some(db_path) = db_path {
            config.db_path = db_path;
        }
        Ok(config)
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
