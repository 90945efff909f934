//! Item price history endpoint.

use crate::endpoints::request::{RequestContext, decode, get_json};
use crate::error::{ClientError, Result};
use crate::models::HistoricoPrecos;

pub const PRECOS_PATH: &str = "/api/v1/precos";

pub async fn historico_precos(
    ctx: &RequestContext<'_>,
    descricao: &str,
    periodo_meses: u32,
) -> Result<HistoricoPrecos> {
    let descricao = descricao.trim();
    if descricao.is_empty() {
        return Err(ClientError::Validation(
            "informe a descrição do item".to_string(),
        ));
    }
    let path = format!("{PRECOS_PATH}/historico");
    let query = [
        ("descricao".to_string(), descricao.to_string()),
        ("periodo_meses".to_string(), periodo_meses.to_string()),
    ];
    let value = get_json(ctx, &path, &query).await?;
    decode(value, &path)
}
