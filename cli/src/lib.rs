//! Library entry point for firecheck CLI components.
//!
//! Exposes reusable modules (config, error, formatter) so integration
//! tests can exercise CLI formatting and configuration without going
//! through the binary entry point.

pub mod config;
pub mod error;
pub mod formatter;

pub use config::CLIConfiguration;
pub use error::{CLIError, Result};
pub use formatter::{resolve_format, OutputFormat, ProbeFormatter};
