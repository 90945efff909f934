//! Command dispatch logic.
//!
//! Responsibilities:
//! - Route parsed CLI arguments to the matching command handler.
//! - Resolve the shared output and export options once per invocation.
//!
//! Does NOT handle:
//! - CLI structure definitions (see `args` module).
//! - Configuration loading (see `main()`).
//!
//! Invariants:
//! - Every API command receives the same cancellation token.
//! - `completions` runs without touching the API or the output options.

use anyhow::Result;
use lap_config::Config;

use crate::args::{Cli, Commands};
use crate::cancellation::CancellationToken;
use crate::commands::{self, OutputOptions};

/// Dispatch CLI commands to their respective handlers.
pub(crate) async fn run_command(
    cli: Cli,
    config: Config,
    cancel: &CancellationToken,
) -> Result<()> {
    if let Commands::Completions { shell } = cli.command {
        return commands::completions::run(shell);
    }

    let out = OutputOptions::from_cli(&cli)?;

    match cli.command {
        Commands::Dashboard => commands::dashboard::run(&config, &out, cancel).await,
        Commands::Licitacoes { command } => {
            commands::licitacoes::run(&config, command, &out, cancel).await
        }
        Commands::Anomalias { command } => {
            commands::anomalias::run(&config, command, &out, cancel).await
        }
        Commands::Fornecedores { command } => {
            commands::fornecedores::run(&config, command, &out, cancel).await
        }
        Commands::Municipios { command } => {
            commands::municipios::run(&config, command, &out, cancel).await
        }
        Commands::Itens { command } => commands::itens::run(&config, command, &out, cancel).await,
        Commands::Alertas { command } => {
            commands::alertas::run(&config, command, &out, cancel).await
        }
        Commands::Ceis { command } => commands::ceis::run(&config, command, &out, cancel).await,
        Commands::Governanca { command } => {
            commands::governanca::run(&config, command, &out, cancel).await
        }
        Commands::Relatorios { command } => {
            commands::relatorios::run(&config, command, &out, cancel).await
        }
        Commands::Completions { shell } => commands::completions::run(shell),
    }
}
