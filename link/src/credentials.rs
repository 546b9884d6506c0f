//! Service-account key file loading.
//!
//! The probe authenticates with a JSON key file (reference name
//! `firebase-key.json`) containing the project id and, usually, a bearer
//! token. Token exchange flows are out of scope; the key file carries a
//! token that is ready to use. A key without a token is valid for
//! endpoints that accept unauthenticated requests (emulators), or when
//! the token comes from a flag or the configuration file instead.

use crate::error::{LinkError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default database id when the key file does not name one.
pub const DEFAULT_DATABASE: &str = "(default)";

/// Service-account-style credentials for a document store.
///
/// # File Format
///
/// ```json
/// {
///   "project_id": "my-project",
///   "token": "ya29.a0Af...",
///   "database": "(default)",
///   "server_url": "http://localhost:8085",
///   "client_email": "probe@my-project.iam.gserviceaccount.com"
/// }
/// ```
///
/// `token`, `database`, `server_url`, and `client_email` are optional.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ServiceAccountKey {
    /// Project that owns the document store
    pub project_id: String,

    /// Bearer token presented on every request; absent for endpoints
    /// that accept unauthenticated requests (emulators)
    /// Note: key files should be protected with restrictive permissions
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,

    /// Database id, defaults to "(default)"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub database: Option<String>,

    /// Endpoint override (e.g., a local emulator)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub server_url: Option<String>,

    /// Service account identity, informational only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_email: Option<String>,
}

impl ServiceAccountKey {
    /// Parse a key from a JSON string
    pub fn from_json(contents: &str) -> Result<Self> {
        let key: ServiceAccountKey = serde_json::from_str(contents)
            .map_err(|e| LinkError::ConfigurationError(format!("Malformed key file: {}", e)))?;
        key.validate()?;
        Ok(key)
    }

    /// Load a key from a file path
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| {
            LinkError::ConfigurationError(format!(
                "Cannot read key file '{}': {}",
                path.display(),
                e
            ))
        })?;
        Self::from_json(&contents)
    }

    /// Get the database id, defaulting to "(default)"
    pub fn database(&self) -> &str {
        self.database.as_deref().unwrap_or(DEFAULT_DATABASE)
    }

    fn validate(&self) -> Result<()> {
        if self.project_id.trim().is_empty() {
            return Err(LinkError::ConfigurationError(
                "Key file is missing 'project_id'".into(),
            ));
        }
        if let Some(token) = &self.token {
            if token.trim().is_empty() {
                return Err(LinkError::ConfigurationError(
                    "Key file has an empty 'token'".into(),
                ));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_minimal_key() {
        let key = ServiceAccountKey::from_json(
            r#"{"project_id": "demo", "token": "tok_123"}"#,
        )
        .unwrap();

        assert_eq!(key.project_id, "demo");
        assert_eq!(key.token.as_deref(), Some("tok_123"));
        assert_eq!(key.database(), "(default)");
        assert_eq!(key.server_url, None);
    }

    #[test]
    fn test_key_without_token_is_valid() {
        let key = ServiceAccountKey::from_json(r#"{"project_id": "demo"}"#).unwrap();
        assert_eq!(key.project_id, "demo");
        assert_eq!(key.token, None);
    }

    #[test]
    fn test_parse_full_key() {
        let key = ServiceAccountKey::from_json(
            r#"{
                "project_id": "parking-prod",
                "token": "ya29.test",
                "database": "probe-db",
                "server_url": "http://localhost:8085",
                "client_email": "probe@parking-prod.iam.gserviceaccount.com"
            }"#,
        )
        .unwrap();

        assert_eq!(key.database(), "probe-db");
        assert_eq!(
            key.server_url.as_deref(),
            Some("http://localhost:8085")
        );
        assert_eq!(
            key.client_email.as_deref(),
            Some("probe@parking-prod.iam.gserviceaccount.com")
        );
    }

    #[test]
    fn test_malformed_json_is_configuration_error() {
        let err = ServiceAccountKey::from_json("{not json").unwrap_err();
        assert!(matches!(err, LinkError::ConfigurationError(_)));
        assert!(err.to_string().contains("Malformed key file"));
    }

    #[test]
    fn test_missing_required_fields() {
        let err =
            ServiceAccountKey::from_json(r#"{"project_id": "demo", "token": ""}"#).unwrap_err();
        assert!(err.to_string().contains("empty 'token'"));

        let err =
            ServiceAccountKey::from_json(r#"{"project_id": " ", "token": "t"}"#).unwrap_err();
        assert!(err.to_string().contains("missing 'project_id'"));
    }

    #[test]
    fn test_missing_file_is_configuration_error() {
        let err = ServiceAccountKey::from_file("/nonexistent/firebase-key.json").unwrap_err();
        assert!(matches!(err, LinkError::ConfigurationError(_)));
        assert!(err.to_string().contains("Cannot read key file"));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"project_id": "demo", "token": "tok", "server_url": "http://127.0.0.1:9099"}}"#
        )
        .unwrap();

        let key = ServiceAccountKey::from_file(file.path()).unwrap();
        assert_eq!(key.project_id, "demo");
        assert_eq!(key.server_url.as_deref(), Some("http://127.0.0.1:9099"));
    }
}
