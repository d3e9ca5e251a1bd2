//! Configuration management for facekit.
//!
//! Configuration is loaded from the platform config directory with sensible
//! defaults. Credentials are normally indirected through `${ENV_VAR}`
//! references so the file itself never has to hold secrets.

mod types;
mod validate;

pub use types::*;

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Root configuration structure for facekit.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// face.com account settings
    pub api: ApiConfig,

    /// HTTP transport settings
    pub http: HttpConfig,

    /// Output settings
    pub output: OutputConfig,

    /// Logging settings
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from the default location.
    ///
    /// Returns default configuration if the file doesn't exist.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::default_path();
        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Get the default config file path.
    ///
    /// Uses platform-appropriate directories:
    /// - macOS: ~/Library/Application Support/com.facekit.facekit/config.toml
    /// - Linux: ~/.config/facekit/config.toml
    /// - Windows: C:\Users\<User>\AppData\Roaming\facekit\config\config.toml
    ///
    /// Falls back to ~/.facekit/config.toml if directory detection fails.
    pub fn default_path() -> PathBuf {
        directories::ProjectDirs::from("com", "facekit", "facekit")
            .map(|dirs| dirs.config_dir().to_path_buf().join("config.toml"))
            .unwrap_or_else(|| {
                let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
                PathBuf::from(home).join(".facekit").join("config.toml")
            })
    }

    /// Resolve the API key, following `${ENV_VAR}` indirection.
    pub fn api_key(&self) -> Result<String, ConfigError> {
        resolve_env_var(&self.api.api_key).ok_or_else(|| {
            ConfigError::MissingCredential(
                "api.api_key is empty or unset. Set FACE_API_KEY env var.".to_string(),
            )
        })
    }

    /// Resolve the API secret, following `${ENV_VAR}` indirection.
    pub fn api_secret(&self) -> Result<String, ConfigError> {
        resolve_env_var(&self.api.api_secret).ok_or_else(|| {
            ConfigError::MissingCredential(
                "api.api_secret is empty or unset. Set FACE_API_SECRET env var.".to_string(),
            )
        })
    }

    /// Serialize the config to a pretty TOML string.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ValidationError(e.to_string()))
    }
}

/// Resolve `${ENV_VAR}` references in config strings.
///
/// Plain strings pass through, empty strings and unset variables yield `None`.
pub fn resolve_env_var(value: &str) -> Option<String> {
    if value.starts_with("${") && value.ends_with('}') {
        let var_name = &value[2..value.len() - 1];
        std::env::var(var_name).ok().filter(|v| !v.is_empty())
    } else if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}
