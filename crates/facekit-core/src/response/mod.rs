//! Response parsing.
//!
//! Every face.com reply is a JSON object carrying a `status` field. A
//! `"failure"` status is turned into [`ServerError::Api`]; anything else is
//! deserialized into the endpoint's typed response, with missing required
//! fields reported as [`ClientError::InvalidResponse`].

mod types;

pub use types::*;

use crate::api::Endpoint;
use crate::error::{ClientError, Result, ServerError};
use crate::model::Photo;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Parse a raw response body for `endpoint` into `T`.
pub fn parse<T: DeserializeOwned>(endpoint: Endpoint, body: &str) -> Result<T> {
    let value: Value = serde_json::from_str(body).map_err(|e| invalid(endpoint, e))?;

    tracing::debug!(
        "{} response: {}",
        endpoint,
        serde_json::to_string_pretty(&value).unwrap_or_else(|_| body.to_string())
    );

    if !value.is_object() {
        return Err(ClientError::InvalidResponse {
            endpoint: endpoint.to_string(),
            message: "expected a JSON object".to_string(),
        }
        .into());
    }
    check_status(&value)?;

    serde_json::from_value(value).map_err(|e| invalid(endpoint, e))
}

/// Reject payloads whose `status` is `"failure"`.
pub(crate) fn check_status(value: &Value) -> std::result::Result<(), ServerError> {
    if value.get("status").and_then(Value::as_str) != Some("failure") {
        return Ok(());
    }

    let code = value.get("error_code").and_then(|c| {
        c.as_i64()
            .or_else(|| c.as_str().and_then(|s| s.trim().parse().ok()))
    });
    let message = value
        .get("error_message")
        .and_then(Value::as_str)
        .unwrap_or("unknown error")
        .to_string();

    tracing::warn!("face.com reported failure {:?}: {}", code, message);
    Err(ServerError::Api { code, message })
}

fn invalid(endpoint: Endpoint, err: serde_json::Error) -> crate::error::FaceError {
    tracing::debug!("Failed to parse {} response: {}", endpoint, err);
    ClientError::InvalidResponse {
        endpoint: endpoint.to_string(),
        message: err.to_string(),
    }
    .into()
}

impl PhotoResponse {
    /// First photo; the only one for upload calls.
    pub fn photo(&self) -> Option<&Photo> {
        self.photos.first()
    }

    /// Fail unless the response carries at least one photo.
    pub(crate) fn require_photo(self, endpoint: Endpoint) -> Result<Self> {
        if self.photos.is_empty() {
            return Err(ClientError::InvalidResponse {
                endpoint: endpoint.to_string(),
                message: "response contained no photos".to_string(),
            }
            .into());
        }
        Ok(self)
    }
}
