//! firecheck - terminal connectivity probe for a managed document store
//!
//! # Usage
//!
//! ```bash
//! # Probe with the default key file (./firebase-key.json)
//! firecheck
//!
//! # Probe a local emulator with a specific key
//! firecheck --key /etc/probe/key.json -u http://localhost:8085
//!
//! # Machine-readable output
//! firecheck --json
//! ```

use clap::Parser;

use firecheck_cli::{resolve_format, CLIConfiguration, ProbeFormatter};
use firecheck_link::probe::run_probe;

mod args;
mod connect;

use args::Cli;
use connect::build_client;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Route link-library log macros to stderr; verbose turns on debug
    // for our own crates.
    let default_filter = if cli.verbose {
        "warn,firecheck_link=debug,firecheck_cli=debug,firecheck=debug"
    } else {
        "warn"
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let config = match CLIConfiguration::load(&cli.config) {
        Ok(config) => config,
        Err(e) => {
            // The config's ui section is unavailable here, so only the
            // flags decide the format.
            let format = resolve_format(cli.json, cli.format, "text");
            let formatter = ProbeFormatter::new(format, !cli.no_color);
            println!("{}", formatter.format_failure(&e));
            std::process::exit(1);
        }
    };
    log::debug!("[CLI] Configuration loaded from {}", cli.config.display());

    let ui = config.resolved_ui();
    let format = resolve_format(cli.json, cli.format, &ui.format);
    let color = !cli.no_color && ui.color;
    let formatter = ProbeFormatter::new(format, color);

    // Any failure anywhere (key loading, client construction, or any probe
    // step) collapses into the single failure line.
    let outcome: Result<_, firecheck_cli::CLIError> = match build_client(&cli, &config) {
        Ok(client) => run_probe(&client).await.map_err(Into::into),
        Err(e) => Err(e),
    };

    match outcome {
        Ok(report) => {
            println!("{}", formatter.format_success(&report));
        }
        Err(e) => {
            println!("{}", formatter.format_failure(&e));
            std::process::exit(1);
        }
    }
}
