//! Sub-configuration structs and their defaults.

use crate::api::{Detector, DEFAULT_ENDPOINT};
use serde::{Deserialize, Serialize};

/// face.com account settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL of the REST API
    pub endpoint: String,

    /// Application API key (supports ${ENV_VAR} syntax)
    pub api_key: String,

    /// Application API secret (supports ${ENV_VAR} syntax)
    pub api_secret: String,

    /// Detector mode sent with every call
    pub detector: Detector,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            api_key: "${FACE_API_KEY}".to_string(),
            api_secret: "${FACE_API_SECRET}".to_string(),
            detector: Detector::Normal,
        }
    }
}

/// HTTP transport settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// Whole-request timeout in milliseconds
    pub timeout_ms: u64,

    /// User-Agent header
    pub user_agent: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_ms: 30_000,
            user_agent: format!("facekit/{}", crate::VERSION),
        }
    }
}

/// Output settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Pretty-print JSON results
    pub pretty: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { pretty: true }
    }
}

/// Logging settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level: error, warn, info, debug, trace
    pub level: String,

    /// Log format: "pretty" or "json"
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}
