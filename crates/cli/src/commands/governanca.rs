//! Municipal governance ranking.

use anyhow::Result;
use clap::Subcommand;
use lap_config::Config;
use tracing::info;

use crate::cancellation::CancellationToken;
use crate::commands::{OutputOptions, build_client_from_config};

#[derive(Debug, Subcommand)]
pub enum GovernancaCommand {
    /// Show municipalities ranked by governance score
    Ranking,
}

pub async fn run(
    config: &Config,
    command: GovernancaCommand,
    out: &OutputOptions,
    cancel: &CancellationToken,
) -> Result<()> {
    match command {
        GovernancaCommand::Ranking => {
            info!("Fetching governance ranking");
            let client = build_client_from_config(config)?;
            let page = cancel.run(client.ranking_governanca()).await?;
            out.emit(&out.formatter().format_ranking_governanca(&page.items)?)?;
            out.export(&page.items).await
        }
    }
}
