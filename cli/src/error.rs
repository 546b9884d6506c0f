//! Error types for the firecheck terminal probe.
//!
//! Provides user-friendly messages for the common failure modes; at the
//! operator boundary all of these collapse into a single failure line.

use firecheck_link::LinkError;
use std::fmt;

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CLIError>;

/// Errors that can occur in the CLI
#[derive(Debug)]
pub enum CLIError {
    /// Error from the firecheck-link library
    LinkError(LinkError),

    /// Configuration file error
    ConfigurationError(String),
}

impl CLIError {
    fn format_link_error(err: &LinkError) -> String {
        match err {
            LinkError::NetworkError(msg) => Self::clean_nested_message(msg),
            LinkError::AuthenticationError(msg) => msg.clone(),
            LinkError::ConfigurationError(msg) => msg.clone(),
            LinkError::TimeoutError(msg) => msg.clone(),
            LinkError::SerializationError(msg) => msg.clone(),
            LinkError::ProbeFailed(msg) => msg.clone(),
            LinkError::ServerError {
                status_code,
                message,
            } => format!("Server error ({}): {}", status_code, message),
        }
    }

    fn clean_nested_message(message: &str) -> String {
        let mut cleaned = message.trim();
        let prefixes = [
            "Connection failed:",
            "connection failed:",
            "Network error:",
            "network error:",
            "error sending request:",
        ];

        loop {
            let mut stripped = false;
            for prefix in &prefixes {
                if let Some(rest) = cleaned.strip_prefix(prefix) {
                    cleaned = rest.trim_start();
                    stripped = true;
                    break;
                }
            }

            if !stripped {
                break;
            }
        }

        cleaned.to_string()
    }
}

impl fmt::Display for CLIError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CLIError::LinkError(e) => write!(f, "{}", Self::format_link_error(e)),
            CLIError::ConfigurationError(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for CLIError {}

impl From<LinkError> for CLIError {
    fn from(err: LinkError) -> Self {
        CLIError::LinkError(err)
    }
}

impl From<toml::de::Error> for CLIError {
    fn from(err: toml::de::Error) -> Self {
        CLIError::ConfigurationError(format!("TOML parse error: {}", err))
    }
}
