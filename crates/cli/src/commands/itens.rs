//! Item price history command.

use anyhow::Result;
use clap::Subcommand;
use lap_config::Config;
use lap_config::constants::DEFAULT_PRICE_HISTORY_MONTHS;
use tracing::info;

use crate::cancellation::CancellationToken;
use crate::commands::{OutputOptions, build_client_from_config};
use crate::error::UsageError;

#[derive(Debug, Subcommand)]
pub enum ItensCommand {
    /// Show the price history of an item description
    Historico {
        /// Item description, matched by the API
        #[arg(value_name = "DESCRICAO")]
        descricao: String,

        /// How many months back to look
        #[arg(short, long, default_value_t = DEFAULT_PRICE_HISTORY_MONTHS)]
        meses: u32,
    },
}

pub async fn run(
    config: &Config,
    command: ItensCommand,
    out: &OutputOptions,
    cancel: &CancellationToken,
) -> Result<()> {
    match command {
        ItensCommand::Historico { descricao, meses } => {
            let descricao = descricao.trim();
            if descricao.is_empty() {
                return Err(UsageError("informe a descrição do item".to_string()).into());
            }
            info!(descricao, meses, "Fetching price history");

            let client = build_client_from_config(config)?;
            let historico = cancel.run(client.historico_precos(descricao, meses)).await?;

            out.emit(&out.formatter().format_historico_precos(&historico)?)?;
            out.export(&historico.historico).await
        }
    }
}
