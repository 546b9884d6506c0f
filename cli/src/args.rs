use clap::Parser;
use firecheck_cli::OutputFormat;
use std::path::PathBuf;

/// firecheck - connectivity probe for a managed document store
///
/// Writes, reads back, and deletes a single probe document to verify that
/// credentials and network configuration allow access to the store.
#[derive(Parser, Debug)]
#[command(name = "firecheck")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Document store connectivity probe", long_about = None)]
pub struct Cli {
    /// Service-account key file
    #[arg(short = 'k', long = "key", default_value = "firebase-key.json")]
    pub key: PathBuf,

    /// Endpoint URL override (e.g. http://localhost:8085 for an emulator)
    #[arg(short = 'u', long = "url")]
    pub url: Option<String>,

    /// Project id override
    #[arg(long = "project")]
    pub project: Option<String>,

    /// Database id override
    #[arg(long = "database")]
    pub database: Option<String>,

    /// Bearer token override
    #[arg(long = "token")]
    pub token: Option<String>,

    /// HTTP request timeout in seconds (default: 30)
    #[arg(long = "timeout", value_name = "SECONDS")]
    pub timeout: Option<u64>,

    /// Connection timeout in seconds (TCP + TLS handshake, default: 10)
    #[arg(long = "connection-timeout", value_name = "SECONDS")]
    pub connection_timeout: Option<u64>,

    /// Output format (falls back to the config file's ui.format)
    #[arg(long = "format", value_enum)]
    pub format: Option<OutputFormat>,

    /// Enable JSON output (shorthand for --format=json)
    #[arg(long = "json", conflicts_with = "format")]
    pub json: bool,

    /// Disable colored output
    #[arg(long = "no-color")]
    pub no_color: bool,

    /// Configuration file path
    #[arg(long = "config", default_value = "~/.firecheck/config.toml")]
    pub config: PathBuf,

    /// Enable verbose logging
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}
