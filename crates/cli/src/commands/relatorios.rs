//! Report listing and generation.
//!
//! Download links are printed absolute so they can be passed straight to a
//! download tool.

use anyhow::Result;
use clap::Subcommand;
use lap_client::LapClient;
use lap_client::models::{
    FormatoRelatorio, PedidoRelatorio, Relatorio, TipoRelatorio, parse_report_date,
};
use lap_config::Config;
use tracing::info;

use crate::cancellation::CancellationToken;
use crate::commands::{OutputOptions, build_client_from_config};
use crate::error::UsageError;

#[derive(Debug, Subcommand)]
pub enum RelatoriosCommand {
    /// List generated reports
    List,
    /// Request a new report
    Generate {
        /// Report type (diario, licitacoes, fornecedores)
        #[arg(long, default_value = "diario")]
        tipo: String,

        /// File format (pdf, excel)
        #[arg(long, default_value = "pdf")]
        formato: String,

        /// First day covered (YYYY-MM-DD, defaults to today)
        #[arg(long, value_name = "DATE")]
        data_inicio: Option<String>,

        /// Last day covered (YYYY-MM-DD, defaults to today)
        #[arg(long, value_name = "DATE")]
        data_fim: Option<String>,
    },
}

fn with_absolute_links(client: &LapClient, relatorios: Vec<Relatorio>) -> Vec<Relatorio> {
    relatorios
        .into_iter()
        .map(|mut r| {
            r.download_url = client.download_url(&r);
            r
        })
        .collect()
}

fn parse_date(raw: Option<&str>) -> Result<Option<chrono::NaiveDate>> {
    match raw {
        Some(raw) => Ok(parse_report_date(raw).map_err(UsageError)?),
        None => Ok(None),
    }
}

pub async fn run(
    config: &Config,
    command: RelatoriosCommand,
    out: &OutputOptions,
    cancel: &CancellationToken,
) -> Result<()> {
    let client = build_client_from_config(config)?;

    match command {
        RelatoriosCommand::List => {
            info!("Listing relatórios");
            let page = cancel.run(client.list_relatorios()).await?;
            let relatorios = with_absolute_links(&client, page.items);
            out.emit(&out.formatter().format_relatorios(&relatorios)?)?;
            out.export(&relatorios).await
        }
        RelatoriosCommand::Generate {
            tipo,
            formato,
            data_inicio,
            data_fim,
        } => {
            let tipo = tipo.parse::<TipoRelatorio>().map_err(UsageError)?;
            let formato = formato.parse::<FormatoRelatorio>().map_err(UsageError)?;
            let inicio = parse_date(data_inicio.as_deref())?;
            let fim = parse_date(data_fim.as_deref())?;
            if let (Some(inicio), Some(fim)) = (inicio, fim)
                && inicio > fim
            {
                return Err(UsageError(
                    "a data inicial deve ser anterior ou igual à data final".to_string(),
                )
                .into());
            }

            let pedido = PedidoRelatorio::for_today(tipo, formato, inicio, fim);
            info!(tipo = %pedido.tipo, formato = %pedido.formato, "Requesting relatório");

            match cancel.run(client.generate_relatorio(&pedido)).await? {
                Some(relatorio) => {
                    let relatorios = with_absolute_links(&client, vec![relatorio]);
                    out.emit(&out.formatter().format_relatorios(&relatorios)?)
                }
                None => {
                    out.note("Relatório solicitado.");
                    Ok(())
                }
            }
        }
    }
}
