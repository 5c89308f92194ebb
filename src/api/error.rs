//! Error types for monitor API calls.
//!
//! Errors are carried as data inside failure actions, so every variant can
//! be rendered as a JSON payload.

use serde_json::{json, Value};
use thiserror::Error;

/// Errors that can occur while calling the monitor API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP client could not be constructed
    #[error("HTTP client error: {0}")]
    Client(String),

    /// Base URL cannot be used to build request URLs
    #[error("Invalid API URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    /// Failed to reach the monitor
    #[error("Connection to '{url}' failed: {source}")]
    Connection {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Request exceeded total timeout
    #[error("Request timeout after {duration}s")]
    Timeout { duration: u64 },

    /// Monitor answered with a non-success status
    #[error("Monitor error: {status} - {message}")]
    Upstream { status: u16, message: String },

    /// Response body is not valid JSON
    #[error("Failed to decode response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Get error type string for JSON payloads
    pub fn error_type(&self) -> &'static str {
        match self {
            ApiError::Client(_) => "client_error",
            ApiError::InvalidUrl { .. } => "invalid_url",
            ApiError::Connection { .. } => "connection_error",
            ApiError::Timeout { .. } => "request_timeout",
            ApiError::Upstream { .. } => "upstream_error",
            ApiError::Decode(_) => "decode_error",
        }
    }

    /// Render this error as the opaque value stored in failure actions.
    pub fn to_payload(&self) -> Value {
        let mut payload = json!({
            "type": self.error_type(),
            "message": self.to_string(),
        });
        if let ApiError::Upstream { status, .. } = self {
            payload["status"] = json!(status);
        }
        payload
    }
}

impl From<&ApiError> for Value {
    fn from(err: &ApiError) -> Self {
        err.to_payload()
    }
}
