//! Output formatting for probe results.
//!
//! Renders the two operator-facing outcomes: a success marker line with
//! the read-back field mapping, or a failure marker line with the
//! underlying error's description.

use clap::ValueEnum;
use colored::Colorize;
use firecheck_link::ProbeReport;
use serde_json::json;

/// Output format for probe results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable marker lines
    Text,
    /// Machine-readable JSON object
    Json,
}

/// Resolve the output format from the `--json` shorthand, the `--format`
/// flag, and the config file's `ui.format`, in that order. Unrecognized
/// config values fall back to text.
pub fn resolve_format(
    json_flag: bool,
    format_flag: Option<OutputFormat>,
    config_format: &str,
) -> OutputFormat {
    if json_flag {
        return OutputFormat::Json;
    }
    if let Some(format) = format_flag {
        return format;
    }
    match config_format {
        "json" => OutputFormat::Json,
        _ => OutputFormat::Text,
    }
}

/// Formats probe outcomes for display
pub struct ProbeFormatter {
    format: OutputFormat,
    color: bool,
}

impl ProbeFormatter {
    /// Create a new formatter
    pub fn new(format: OutputFormat, color: bool) -> Self {
        Self { format, color }
    }

    /// Format a successful probe run
    pub fn format_success(&self, report: &ProbeReport) -> String {
        match self.format {
            OutputFormat::Text => {
                let marker = "✅ Document store connection successful!";
                let marker = if self.color {
                    marker.green().bold().to_string()
                } else {
                    marker.to_string()
                };
                format!("{}\nData: {}", marker, report.render_fields())
            }
            OutputFormat::Json => json!({
                "status": "ok",
                "document": report.document_path,
                "fields": report.fields,
                "commit_time": report.commit_time,
            })
            .to_string(),
        }
    }

    /// Format a failed probe run
    pub fn format_failure(&self, error: &impl std::fmt::Display) -> String {
        match self.format {
            OutputFormat::Text => {
                let marker = "❌ Document store connection failed:";
                let marker = if self.color {
                    marker.red().bold().to_string()
                } else {
                    marker.to_string()
                };
                format!("{} {}", marker, error)
            }
            OutputFormat::Json => json!({
                "status": "error",
                "message": error.to_string(),
            })
            .to_string(),
        }
    }
}
