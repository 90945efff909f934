//! Municipality listing with the distance filter.

use anyhow::Result;
use clap::Subcommand;
use lap_client::models::snap_distance_km;
use lap_config::Config;
use lap_config::constants::MAX_DISTANCE_KM;
use tracing::info;

use crate::cancellation::CancellationToken;
use crate::commands::{OutputOptions, build_client_from_config};

#[derive(Debug, Subcommand)]
pub enum MunicipiosCommand {
    /// List municipalities within a distance of the reference city
    List {
        /// Two-letter state code
        #[arg(long)]
        uf: Option<String>,

        /// Maximum distance in km (50-200, snapped to steps of 10)
        #[arg(long, default_value_t = MAX_DISTANCE_KM)]
        max_distance: u32,
    },
}

pub async fn run(
    config: &Config,
    command: MunicipiosCommand,
    out: &OutputOptions,
    cancel: &CancellationToken,
) -> Result<()> {
    match command {
        MunicipiosCommand::List { uf, max_distance } => {
            let max_km = snap_distance_km(max_distance);
            info!(uf = ?uf, max_km, "Listing municípios");

            let client = build_client_from_config(config)?;
            let page = cancel.run(client.list_municipios(uf.as_deref())).await?;
            let municipios: Vec<_> = page
                .items
                .into_iter()
                .filter(|m| m.within_km(max_km))
                .collect();

            out.emit(&out.formatter().format_municipios(&municipios)?)?;
            out.export(&municipios).await
        }
    }
}
