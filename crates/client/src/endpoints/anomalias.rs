//! Anomaly endpoints.

use crate::endpoints::request::{RequestContext, decode, get_json};
use crate::error::Result;
use crate::listing::ListQuery;
use crate::models::{Anomalia, AnomaliaResumo, Page};

pub const ANOMALIAS_PATH: &str = "/api/v1/anomalias/";
const RESUMO_PATH: &str = "/api/v1/anomalias/estatisticas/resumo";

/// List anomalies. Accepts the `status` filter.
pub async fn list_anomalias(ctx: &RequestContext<'_>, query: &ListQuery) -> Result<Page<Anomalia>> {
    let value = get_json(ctx, ANOMALIAS_PATH, &query.params()).await?;
    Page::from_value(value, Some(query.per_page()))
}

pub async fn anomalias_resumo(ctx: &RequestContext<'_>) -> Result<AnomaliaResumo> {
    let value = get_json(ctx, RESUMO_PATH, &[]).await?;
    decode(value, RESUMO_PATH)
}
