//! Municipality endpoint.

use crate::endpoints::request::{RequestContext, get_json};
use crate::error::Result;
use crate::models::{Municipio, Page};

pub const MUNICIPIOS_PATH: &str = "/api/v1/municipios";

/// Row limit requested from the municipality list, which is not paginated.
pub const MUNICIPIOS_LIMIT: u32 = 100;

/// List municipalities, optionally restricted to one state.
pub async fn list_municipios(ctx: &RequestContext<'_>, uf: Option<&str>) -> Result<Page<Municipio>> {
    let mut query = vec![("limit".to_string(), MUNICIPIOS_LIMIT.to_string())];
    if let Some(uf) = uf.map(str::trim).filter(|uf| !uf.is_empty()) {
        query.push(("uf".to_string(), uf.to_uppercase()));
    }
    let value = get_json(ctx, MUNICIPIOS_PATH, &query).await?;
    Page::from_value(value, None)
}
