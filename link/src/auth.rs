//! Authentication provider for the document-store client.
//!
//! Handles bearer tokens and HTTP Basic Auth, attaching the appropriate
//! Authorization header to outgoing requests.

use crate::error::Result;
use base64::{engine::general_purpose, Engine as _};

/// Authentication credentials for the document store.
///
/// The auth provider automatically attaches the appropriate Authorization
/// header to each request.
///
/// # Examples
///
/// ```rust
/// use firecheck_link::AuthProvider;
///
/// // Bearer token from a service-account key file
/// let auth = AuthProvider::bearer_token("ya29.a0Af...".to_string());
///
/// // HTTP Basic Auth (self-hosted stores)
/// let auth = AuthProvider::basic_auth("alice".to_string(), "secret".to_string());
///
/// // No authentication (local emulator)
/// let auth = AuthProvider::none();
/// ```
#[derive(Debug, Clone)]
pub enum AuthProvider {
    /// Bearer token authentication
    BearerToken(String),

    /// HTTP Basic Auth (username, password)
    BasicAuth(String, String),

    /// No authentication (emulator / localhost bypass)
    None,
}

impl AuthProvider {
    /// Create bearer token authentication
    pub fn bearer_token(token: String) -> Self {
        Self::BearerToken(token)
    }

    /// Create HTTP Basic Auth
    ///
    /// Encodes username:password as base64 for the Authorization: Basic
    /// header following RFC 7617.
    pub fn basic_auth(username: String, password: String) -> Self {
        Self::BasicAuth(username, password)
    }

    /// No authentication (for emulator connections)
    pub fn none() -> Self {
        Self::None
    }

    /// Attach authentication headers to an HTTP request builder
    ///
    /// - BearerToken: `Authorization: Bearer <token>`
    /// - BasicAuth: `Authorization: Basic <base64(username:password)>`
    /// - None: no headers
    pub fn apply_to_request(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<reqwest::RequestBuilder> {
        match self {
            Self::BearerToken(token) => Ok(request.bearer_auth(token)),
            Self::BasicAuth(username, password) => {
                let credentials = format!("{}:{}", username, password);
                let encoded = general_purpose::STANDARD.encode(credentials.as_bytes());
                Ok(request.header("Authorization", format!("Basic {}", encoded)))
            }
            Self::None => Ok(request),
        }
    }

    /// Check if authentication is configured
    pub fn is_authenticated(&self) -> bool {
        !matches!(self, Self::None)
    }
}
