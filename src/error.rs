//! Error types for Zoom API operations.

use serde_json::Value;
use thiserror::Error;

use crate::JsonObject;

/// Errors that can occur during Zoom API operations.
#[derive(Debug, Error)]
pub enum ZoomError {
    /// Configuration is missing or incomplete.
    #[error("Zoom configuration required: {0}")]
    ConfigMissing(String),

    /// The base URL cannot carry a path (e.g. `mailto:` or `data:` URLs).
    #[error("Invalid base URL '{0}': must be an http(s) URL that can carry a path")]
    InvalidBaseUrl(String),

    /// A path segment is empty or a dot segment, so the URL would name a
    /// different resource than the one asked for.
    #[error("Invalid path segment in '{0}'")]
    InvalidPath(String),

    /// Unknown setting type name.
    #[error("Unknown setting type '{0}'")]
    InvalidSettingType(String),

    /// The API answered with a non-2xx status.
    #[error("Zoom API error ({status}): {message}")]
    ServerFault {
        status: u16,
        body: JsonObject,
        message: String,
    },

    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// JSON parsing error.
    #[error("Failed to parse response: {0}")]
    ParseError(#[from] serde_json::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    UrlError(#[from] url::ParseError),

    /// Pagination ran past the configured page bound.
    #[error("Pagination stopped after {max_pages} pages without an empty continuation token")]
    PageLimitExceeded { max_pages: u32 },
}

impl ZoomError {
    /// HTTP status of a server fault.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::ServerFault { status, .. } => Some(*status),
            Self::HttpError(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Returns true for a 404 server fault.
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    /// Zoom's numeric error code from the fault body, if present.
    pub fn error_code(&self) -> Option<i64> {
        match self {
            Self::ServerFault { body, .. } => body.get("code").and_then(Value::as_i64),
            _ => None,
        }
    }

    /// Build a fault from a status and raw response text.
    ///
    /// JSON object bodies are kept as-is. Anything else (plain text, HTML,
    /// a bare JSON scalar) is stored under a `message` key.
    pub(crate) fn from_response(status: u16, text: &str) -> Self {
        let body = match serde_json::from_str::<Value>(text) {
            Ok(Value::Object(map)) => map,
            Ok(other) => single_message(other),
            Err(_) => single_message(Value::String(text.to_string())),
        };

        let message = ["message", "error"]
            .iter()
            .find_map(|key| body.get(*key).and_then(Value::as_str))
            .map(str::to_string)
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| format!("HTTP {status}"));

        Self::ServerFault {
            status,
            body,
            message,
        }
    }
}

fn single_message(value: Value) -> JsonObject {
    let mut map = JsonObject::new();
    map.insert("message".to_string(), value);
    map
}

/// Result type alias for Zoom operations.
pub type Result<T> = core::result::Result<T, ZoomError>;
