//! Supplier ranking command.
//!
//! The ranking comes from the top-suppliers statistics endpoint; the `--porte`
//! filter is applied locally because the endpoint has no size parameter.

use anyhow::Result;
use clap::Subcommand;
use lap_client::models::Porte;
use lap_config::Config;
use lap_config::constants::DEFAULT_TOP_FORNECEDORES;
use tracing::info;

use crate::cancellation::CancellationToken;
use crate::commands::{OutputOptions, build_client_from_config};
use crate::error::UsageError;
use crate::formatters::FornecedoresOutput;

#[derive(Debug, Subcommand)]
pub enum FornecedoresCommand {
    /// List the suppliers with the most awarded value
    List {
        /// Only suppliers of this size (ME, EPP, Demais)
        #[arg(long)]
        porte: Option<String>,

        /// How many suppliers to request
        #[arg(short, long, default_value_t = DEFAULT_TOP_FORNECEDORES)]
        limite: u32,
    },
}

pub async fn run(
    config: &Config,
    command: FornecedoresCommand,
    out: &OutputOptions,
    cancel: &CancellationToken,
) -> Result<()> {
    match command {
        FornecedoresCommand::List { porte, limite } => {
            let porte = porte
                .as_deref()
                .map(str::parse::<Porte>)
                .transpose()
                .map_err(UsageError)?;
            info!(limite, porte = ?porte, "Listing fornecedores");

            let client = build_client_from_config(config)?;
            let page = cancel.run(client.top_fornecedores(limite)).await?;
            let page = match porte {
                Some(porte) => page.filtered(|f| f.porte_class() == porte),
                None => page,
            };

            let output = FornecedoresOutput::new(page.items);
            out.emit(&out.formatter().format_fornecedores(&output)?)?;
            out.export(&output.fornecedores).await
        }
    }
}
