//! LAP CLI - command-line access to the LAP procurement API.
//!
//! Responsibilities:
//! - Parse command-line arguments and environment variables.
//! - Execute API commands through the shared `lap-client` library.
//! - Render results as tables, JSON, or CSV and export record files.
//!
//! Does NOT handle:
//! - HTTP, retries, or response normalization (see `crates/client`).
//! - Interactive browsing (see `crates/tui`).
//!
//! Invariants:
//! - `load_dotenv()` runs BEFORE CLI parsing so `.env` can provide clap env defaults.
//! - Configuration precedence is CLI flag > environment > default.

mod args;
mod cancellation;
mod commands;
mod dispatch;
mod error;
mod formatters;

use std::time::Duration;

use args::{Cli, Commands};
use cancellation::{CancellationToken, is_cancelled_error, print_cancelled_message};
use clap::Parser;
use dispatch::run_command;
use error::{ExitCode, ExitCodeExt};
use lap_config::{Config, ConfigLoader};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn load_config(cli: &Cli) -> Result<Config, lap_config::ConfigError> {
    let mut loader = ConfigLoader::new().from_env()?;

    if let Some(ref url) = cli.base_url {
        loader = loader.with_base_url(url.clone());
    }
    if let Some(timeout_secs) = cli.timeout {
        loader = loader.with_timeout(Duration::from_secs(timeout_secs));
    }
    if let Some(retries) = cli.max_retries {
        loader = loader.with_max_retries(retries);
    }

    loader.build()
}

#[tokio::main]
async fn main() {
    // Load .env before parsing so clap env defaults can read its values
    if let Err(e) = ConfigLoader::new().load_dotenv() {
        eprintln!("Failed to load environment: {}", e);
        std::process::exit(ExitCode::ConfigError.as_i32());
    }

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // Completions never talk to the API
    let config = if matches!(cli.command, Commands::Completions { .. }) {
        Config::default()
    } else {
        match load_config(&cli) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Invalid configuration: {:#}", e);
                std::process::exit(ExitCode::ConfigError.as_i32());
            }
        }
    };

    let cancel = CancellationToken::new();
    let cancel_clone = cancel.clone();

    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            eprintln!("Failed to listen for Ctrl+C: {}", e);
            return;
        }
        cancel_clone.cancel();
    });

    let exit_code = match run_command(cli, config, &cancel).await {
        Ok(()) => ExitCode::Success,
        Err(e) if is_cancelled_error(&e) => {
            print_cancelled_message();
            ExitCode::Interrupted
        }
        Err(e) => {
            eprintln!("Error: {:#}", e);
            e.exit_code()
        }
    };

    std::process::exit(exit_code.as_i32());
}
