//! Engine configuration.
//!
//! Loaded from TOML; every key is optional.
//!
//! ```toml
//! ddl_enabled = true
//!
//! [refresh]
//! mode = "asynchronous"
//! thread_name = "branchline-refresh"
//! ```

use branchline_mutation::RefreshMode;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Post-mutation refresh settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RefreshConfig {
    /// Run refreshes before returning, or on a background thread.
    pub mode: RefreshMode,
    /// Name given to background refresh threads.
    pub thread_name: String,
}

impl Default for RefreshConfig {
    fn default() -> Self {
        Self {
            mode: RefreshMode::Synchronous,
            thread_name: "branchline-refresh".to_string(),
        }
    }
}

/// Engine settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// When false every DDL statement is refused with a failed result.
    pub ddl_enabled: bool,
    pub refresh: RefreshConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            ddl_enabled: true,
            refresh: RefreshConfig::default(),
        }
    }
}

impl EngineConfig {
    /// Parse and validate configuration from a TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: EngineConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path.as_ref()).map_err(|source| ConfigError::Io {
            path: path.as_ref().to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Validate configuration settings.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.refresh.thread_name.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "refresh.thread_name cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}
