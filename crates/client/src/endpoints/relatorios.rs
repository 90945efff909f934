//! Report endpoints.

use reqwest::Method;
use tracing::info;

use crate::endpoints::request::{RequestContext, decode, get_json, send_json};
use crate::error::Result;
use crate::models::{Page, PedidoRelatorio, Relatorio};

pub const RELATORIOS_PATH: &str = "/api/v1/relatorios";

pub async fn list_relatorios(ctx: &RequestContext<'_>) -> Result<Page<Relatorio>> {
    let path = format!("{RELATORIOS_PATH}/listar");
    let value = get_json(ctx, &path, &[]).await?;
    Page::from_value(value, None)
}

/// Request a report. Returns the created report when the backend describes it.
pub async fn generate_relatorio(
    ctx: &RequestContext<'_>,
    pedido: &PedidoRelatorio,
) -> Result<Option<Relatorio>> {
    let path = format!("{RELATORIOS_PATH}/gerar");
    let value = send_json(ctx, Method::POST, &path, Some(pedido), RELATORIOS_PATH).await?;
    info!(tipo = %pedido.tipo, formato = %pedido.formato, "report requested");
    if value.get("id").is_some() {
        decode::<Relatorio>(value, &path).map(Some)
    } else {
        Ok(None)
    }
}
