//! Anomaly listing and summary.

use anyhow::Result;
use clap::Subcommand;
use lap_client::models::AnomaliaStatus;
use lap_config::Config;
use tracing::info;

use crate::cancellation::CancellationToken;
use crate::commands::licitacoes::build_query;
use crate::commands::{OutputOptions, build_client_from_config};
use crate::error::UsageError;
use crate::formatters::PageOutput;

#[derive(Debug, Subcommand)]
pub enum AnomaliasCommand {
    /// List detected anomalies, highest risk first as returned by the API
    List {
        /// Filter by status (pendente, analisada, descartada)
        #[arg(long)]
        status: Option<String>,

        /// Page number (starts at 1)
        #[arg(short, long, default_value = "1")]
        page: u32,

        /// Items per page (defaults to LAP_PER_PAGE)
        #[arg(long)]
        per_page: Option<u32>,
    },
    /// Show totals by status and type
    Stats,
}

pub async fn run(
    config: &Config,
    command: AnomaliasCommand,
    out: &OutputOptions,
    cancel: &CancellationToken,
) -> Result<()> {
    let client = build_client_from_config(config)?;

    match command {
        AnomaliasCommand::List {
            status,
            page,
            per_page,
        } => {
            let status = status
                .as_deref()
                .map(str::parse::<AnomaliaStatus>)
                .transpose()
                .map_err(UsageError)?;
            let query = build_query(
                config.list.per_page,
                per_page,
                &[("status", status.map(AnomaliaStatus::as_str))],
                page,
            );
            info!(page = query.page(), status = ?status, "Listing anomalias");

            let result = cancel.run(client.list_anomalias(&query)).await?;
            let output = PageOutput {
                items: result.items,
                total: result.total,
                page: query.page(),
                pages: result.pages,
            };
            out.emit(&out.formatter().format_anomalias(&output)?)?;
            out.export(&output.items).await
        }
        AnomaliasCommand::Stats => {
            info!("Fetching anomaly summary");
            let resumo = cancel.run(client.anomalias_resumo()).await?;
            out.emit(&out.formatter().format_anomalias_resumo(&resumo)?)
        }
    }
}
