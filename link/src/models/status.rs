//! Error body returned by the store on non-2xx responses.

use serde::{Deserialize, Serialize};

/// Wrapper object: `{"error": {...}}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: ErrorStatus,
}

/// Error detail inside the wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorStatus {
    /// Numeric code, mirrors the HTTP status
    #[serde(default)]
    pub code: u16,

    /// Human-readable description
    #[serde(default)]
    pub message: String,

    /// Canonical status name (e.g. "PERMISSION_DENIED")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl ErrorBody {
    /// Extract the server's message from a raw error body, falling back to
    /// the raw text when the body is not the expected shape.
    pub fn message_from(raw: &str) -> String {
        match serde_json::from_str::<ErrorBody>(raw) {
            Ok(body) if !body.error.message.is_empty() => body.error.message,
            _ => raw.to_string(),
        }
    }
}
