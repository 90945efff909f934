//! Dashboard statistics endpoints.

use crate::endpoints::request::{RequestContext, decode, get_json};
use crate::error::Result;
use crate::models::{Fornecedor, Kpis, Page, SerieMensal};

pub const ESTATISTICAS_PATH: &str = "/api/v1/estatisticas";

pub async fn get_kpis(ctx: &RequestContext<'_>) -> Result<Kpis> {
    let path = format!("{ESTATISTICAS_PATH}/kpis");
    let value = get_json(ctx, &path, &[]).await?;
    decode(value, &path)
}

pub async fn get_por_mes(ctx: &RequestContext<'_>) -> Result<SerieMensal> {
    let path = format!("{ESTATISTICAS_PATH}/por-mes");
    let value = get_json(ctx, &path, &[]).await?;
    decode(value, &path)
}

/// Supplier ranking by wins, limited to `limite` rows.
pub async fn top_fornecedores(ctx: &RequestContext<'_>, limite: u32) -> Result<Page<Fornecedor>> {
    let path = format!("{ESTATISTICAS_PATH}/top-fornecedores");
    let query = [("limite".to_string(), limite.to_string())];
    let value = get_json(ctx, &path, &query).await?;
    Page::from_value(value, None)
}
