use crate::endpoints::request::{RequestContext, get_json};
use crate::error::Result;
use crate::models::{Page, RankingGovernanca};

pub const GOVERNANCA_PATH: &str = "/api/v1/governanca";

pub async fn ranking_governanca(ctx: &RequestContext<'_>) -> Result<Page<RankingGovernanca>> {
    let path = format!("{GOVERNANCA_PATH}/ranking");
    let value = get_json(ctx, &path, &[]).await?;
    Page::from_value(value, None)
}
