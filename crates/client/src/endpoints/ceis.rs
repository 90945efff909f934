//! Debarment registry endpoints.

use reqwest::Method;
use tracing::{info, warn};

use crate::endpoints::request::{RequestContext, decode, get_json, send_json};
use crate::error::{ClientError, Result};
use crate::models::{CnpjCheck, EmpresaImpedida, Page, VerificacaoCnpj, normalize_cnpj};

pub const CEIS_PATH: &str = "/api/v1/ceis-cnep";

/// List debarred companies, filtered by `fonte` and `uf` when given.
pub async fn list_empresas_impedidas(
    ctx: &RequestContext<'_>,
    fonte: Option<&str>,
    uf: Option<&str>,
) -> Result<Page<EmpresaImpedida>> {
    let mut query = Vec::new();
    for (key, value) in [("fonte", fonte), ("uf", uf)] {
        if let Some(value) = value.map(str::trim).filter(|v| !v.is_empty()) {
            query.push((key.to_string(), value.to_uppercase()));
        }
    }
    let value = get_json(ctx, CEIS_PATH, &query).await?;
    Page::from_value(value, None)
}

async fn fetch_verificacao(ctx: &RequestContext<'_>, cnpj: &str) -> Result<VerificacaoCnpj> {
    let digits = normalize_cnpj(cnpj);
    if digits.is_empty() {
        return Err(ClientError::Validation("CNPJ inválido".to_string()));
    }
    let path = format!("{CEIS_PATH}/verificar/{digits}");
    let value = get_json(ctx, &path, &[]).await?;
    decode(value, &path)
}

/// Check a tax id. Never fails: errors become [`CnpjCheck::CheckFailed`].
pub async fn check_cnpj(ctx: &RequestContext<'_>, cnpj: &str) -> CnpjCheck {
    let result = fetch_verificacao(ctx, cnpj).await;
    if let Err(err) = &result {
        warn!(error = %err, "CNPJ check failed, reporting as unverified");
    }
    CnpjCheck::from_response(result)
}

/// Ask the backend to reload the registry.
pub async fn refresh_ceis(ctx: &RequestContext<'_>) -> Result<()> {
    let path = format!("{CEIS_PATH}/atualizar");
    send_json::<()>(ctx, Method::POST, &path, None, CEIS_PATH).await?;
    info!("debarment registry refresh requested");
    Ok(())
}
