//! Dashboard command: headline KPIs plus the recent monthly series.

use anyhow::Result;
use lap_config::Config;
use lap_config::constants::DASHBOARD_MONTHS_SHOWN;
use tracing::info;

use crate::cancellation::CancellationToken;
use crate::commands::{OutputOptions, build_client_from_config};
use crate::formatters::DashboardOutput;

pub async fn run(config: &Config, out: &OutputOptions, cancel: &CancellationToken) -> Result<()> {
    info!("Fetching dashboard indicators");
    let client = build_client_from_config(config)?;

    let (kpis, serie) = cancel
        .run(async { tokio::try_join!(client.get_kpis(), client.get_por_mes()) })
        .await?;

    let skip = serie.series.len().saturating_sub(DASHBOARD_MONTHS_SHOWN);
    let dashboard = DashboardOutput {
        kpis,
        por_mes: serie.series.into_iter().skip(skip).collect(),
    };

    out.emit(&out.formatter().format_dashboard(&dashboard)?)?;
    out.export(&dashboard.por_mes).await
}
