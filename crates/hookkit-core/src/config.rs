// Rust guideline compliant 2026-10-18

//! Configuration management for hookkit.

use crate::conventional::default_types;
use crate::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// File name looked up in the repository directory.
pub const CONFIG_FILE: &str = ".hookkit.toml";

/// Configuration for the commit-message hook and logging.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Config {
    /// Commit types accepted in addition to `feat` and `fix`.
    #[serde(default = "default_types")]
    pub types: Vec<String>,

    /// Whether every commit must carry a `(scope)`.
    #[serde(default)]
    pub force_scope: bool,

    /// Log level (error, warn, info, debug). Logging is off when unset.
    #[serde(default)]
    pub log_level: Option<String>,

    /// Optional file receiving JSON log lines instead of stderr.
    #[serde(default)]
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            types: default_types(),
            force_scope: false,
            log_level: None,
            log_file: None,
        }
    }
}

impl Config {
    /// Loads configuration from file and environment variables.
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values
    /// 2. Configuration file at `<repo_dir>/.hookkit.toml`
    /// 3. Environment variables with `HOOKKIT_` prefix
    ///
    /// # Arguments
    ///
    /// * `repo_dir` - Repository root directory
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Configuration file exists but cannot be read
    /// - Configuration file contains invalid TOML
    /// - Configuration values fail validation
    pub fn load(repo_dir: &Path) -> Result<Self> {
        let mut config = Self::default();

        let config_path = repo_dir.join(CONFIG_FILE);
        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            config = toml::from_str(&content)
                .map_err(|e| Error::InvalidConfig(format!("{}: {}", config_path.display(), e)))?;
        }

        config.apply_env_overrides()?;
        config.validate()?;

        Ok(config)
    }

    /// Applies environment variable overrides to the configuration.
    ///
    /// Supported environment variables:
    /// - `HOOKKIT_TYPES` - Comma separated commit types
    /// - `HOOKKIT_FORCE_SCOPE` - Require a scope (true/false)
    /// - `HOOKKIT_LOG` - Log level
    /// - `HOOKKIT_LOG_FILE` - Log file path
    ///
    /// # Errors
    ///
    /// Returns an error if environment variable values are invalid.
    fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(val) = std::env::var("HOOKKIT_TYPES") {
            self.types = val
                .split(',')
                .map(|t| t.trim().to_string())
                .filter(|t| !t.is_empty())
                .collect();
        }

        if let Ok(val) = std::env::var("HOOKKIT_FORCE_SCOPE") {
            self.force_scope = val.parse().map_err(|_| {
                Error::InvalidConfig("HOOKKIT_FORCE_SCOPE must be true or false".to_string())
            })?;
        }

        if let Ok(val) = std::env::var("HOOKKIT_LOG") {
            self.log_level = Some(val);
        }

        if let Ok(val) = std::env::var("HOOKKIT_LOG_FILE") {
            self.log_file = Some(PathBuf::from(val));
        }

        Ok(())
    }

    /// Validates the configuration values.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - a commit type is empty or contains whitespace
    /// - the log level is unknown
    fn validate(&self) -> Result<()> {
        if let Some(bad) = self
            .types
            .iter()
            .find(|t| t.is_empty() || t.chars().any(char::is_whitespace))
        {
            return Err(Error::InvalidConfig(format!(
                "commit type {:?} must be a non-empty word",
                bad
            )));
        }

        if let Some(level) = &self.log_level {
            crate::logging::parse_log_level(level)?;
        }

        Ok(())
    }
}
