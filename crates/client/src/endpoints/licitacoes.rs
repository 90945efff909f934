//! Procurement notice endpoints.

use tracing::debug;

use crate::endpoints::request::{RequestContext, get_json};
use crate::error::Result;
use crate::listing::ListQuery;
use crate::models::{Licitacao, Page};

pub const LICITACOES_PATH: &str = "/api/v1/licitacoes/";

/// List notices. Accepts the `search` filter.
pub async fn list_licitacoes(
    ctx: &RequestContext<'_>,
    query: &ListQuery,
) -> Result<Page<Licitacao>> {
    let value = get_json(ctx, LICITACOES_PATH, &query.params()).await?;
    let page = Page::from_value(value, Some(query.per_page()))?;
    debug!(count = page.len(), total = page.total, "loaded licitacoes");
    Ok(page)
}
