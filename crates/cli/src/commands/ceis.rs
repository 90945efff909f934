//! Debarment registry (CEIS/CNEP) commands.
//!
//! Responsibilities:
//! - List debarred companies by registry and state.
//! - Check one CNPJ.
//! - Ask the backend to reload the registry.
//!
//! Invariants:
//! - A failed check is printed as `check_failed`, never as a clear company.
//!   The command still exits 0 because the verdict itself was delivered.

use anyhow::Result;
use clap::Subcommand;
use lap_client::models::{Fonte, normalize_cnpj};
use lap_config::Config;
use tracing::{info, warn};

use crate::cancellation::{CancellationToken, Cancelled};
use crate::commands::{OutputOptions, build_client_from_config};
use crate::error::UsageError;
use crate::formatters::CnpjCheckOutput;

#[derive(Debug, Subcommand)]
pub enum CeisCommand {
    /// List debarred companies
    List {
        /// Registry (CEIS, CNEP)
        #[arg(long)]
        fonte: Option<String>,

        /// Two-letter state code
        #[arg(long)]
        uf: Option<String>,
    },
    /// Check whether a CNPJ is debarred
    Check {
        /// CNPJ, with or without punctuation
        #[arg(value_name = "CNPJ")]
        cnpj: String,
    },
    /// Reload the registry from the public sources
    Refresh,
}

pub async fn run(
    config: &Config,
    command: CeisCommand,
    out: &OutputOptions,
    cancel: &CancellationToken,
) -> Result<()> {
    let client = build_client_from_config(config)?;

    match command {
        CeisCommand::List { fonte, uf } => {
            let fonte = fonte
                .as_deref()
                .map(str::parse::<Fonte>)
                .transpose()
                .map_err(UsageError)?;
            info!(fonte = ?fonte, uf = ?uf, "Listing empresas impedidas");

            let page = cancel
                .run(client.list_empresas_impedidas(fonte.map(Fonte::as_str), uf.as_deref()))
                .await?;
            out.emit(&out.formatter().format_empresas_impedidas(&page.items)?)?;
            out.export(&page.items).await
        }
        CeisCommand::Check { cnpj } => {
            let digits = normalize_cnpj(&cnpj);
            if digits.is_empty() {
                return Err(UsageError(format!("CNPJ inválido '{cnpj}'")).into());
            }
            info!(cnpj = %digits, "Checking CNPJ");

            let check = tokio::select! {
                check = client.check_cnpj(&digits) => check,
                _ = cancel.cancelled() => return Err(Cancelled.into()),
            };
            if let lap_client::CnpjCheck::CheckFailed { reason } = &check {
                warn!(reason = %reason, "CNPJ check could not be completed");
            }

            let output = CnpjCheckOutput::new(digits, check);
            out.emit(&out.formatter().format_cnpj_check(&output)?)
        }
        CeisCommand::Refresh => {
            info!("Requesting registry refresh");
            cancel.run(client.refresh_ceis()).await?;
            out.note("Atualização da base CEIS/CNEP solicitada.");
            Ok(())
        }
    }
}
