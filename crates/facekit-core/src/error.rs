//! Error types for the face.com client.
//!
//! Failures split into two families that mirror who is at fault: client-side
//! problems (bad arguments, unreachable host, unparsable payloads) and
//! server-side rejections (non-2xx status or an explicit failure payload).
//! Neither family is retried; both surface to the caller unchanged.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level error type for facekit operations.
#[derive(Error, Debug)]
pub enum FaceError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Problems detected on this side of the wire
    #[error("Client error: {0}")]
    Client(#[from] ClientError),

    /// Failures reported by the remote service
    #[error("Server error: {0}")]
    Server(#[from] ServerError),

    /// General I/O errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the config file from disk
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    /// Failed to parse TOML configuration
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    /// Configuration values are invalid
    #[error("Invalid configuration: {0}")]
    ValidationError(String),

    /// A credential could not be resolved (empty, or `${VAR}` unset)
    #[error("Missing credential: {0}")]
    MissingCredential(String),
}

/// Errors raised before a request reaches the service, or while reading its reply.
#[derive(Error, Debug)]
pub enum ClientError {
    /// A required argument was empty or absent
    #[error("Missing required argument: {0}")]
    MissingArgument(&'static str),

    /// Image file for an upload does not exist
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    /// Connection, timeout or body-read failure
    #[error("Request to {url} failed: {message}")]
    Transport { url: String, message: String },

    /// Response body was not valid JSON or missed required fields
    #[error("Invalid response from {endpoint}: {message}")]
    InvalidResponse { endpoint: String, message: String },
}

/// Errors reported by the face.com service.
#[derive(Error, Debug)]
pub enum ServerError {
    /// Non-success HTTP status
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    /// JSON payload with `"status": "failure"`
    #[error("API error {}: {message}", display_code(*code))]
    Api { code: Option<i64>, message: String },
}

impl FaceError {
    /// Error code attached by the service, if this is an API failure payload.
    pub fn api_code(&self) -> Option<i64> {
        match self {
            FaceError::Server(ServerError::Api { code, .. }) => *code,
            _ => None,
        }
    }
}

fn display_code(code: Option<i64>) -> String {
    code.map_or_else(|| "?".to_string(), |c| c.to_string())
}

/// Convenience type alias for facekit results.
pub type Result<T> = std::result::Result<T, FaceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_display_with_code() {
        let err = ServerError::Api {
            code: Some(201),
            message: "API_KEY_DOES_NOT_EXIST".to_string(),
        };
        assert_eq!(err.to_string(), "API error 201: API_KEY_DOES_NOT_EXIST");
    }

    #[test]
    fn test_api_error_display_without_code() {
        let err = ServerError::Api {
            code: None,
            message: "unknown".to_string(),
        };
        assert_eq!(err.to_string(), "API error ?: unknown");
    }

    #[test]
    fn test_api_code_only_for_api_failures() {
        let err: FaceError = ServerError::Api {
            code: Some(30),
            message: "nope".to_string(),
        }
        .into();
        assert_eq!(err.api_code(), Some(30));

        let err: FaceError = ClientError::MissingArgument("uids").into();
        assert_eq!(err.api_code(), None);
        assert!(err.to_string().contains("uids"));
    }
}
