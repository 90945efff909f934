//! Alert subscription endpoints.

use reqwest::Method;
use tracing::info;

use crate::endpoints::request::{RequestContext, get_json, send_json};
use crate::error::Result;
use crate::models::{Alerta, AlertaToggle, NovoAlerta, Page};

pub const ALERTAS_PATH: &str = "/api/v1/alertas";

pub async fn list_alertas(ctx: &RequestContext<'_>) -> Result<Page<Alerta>> {
    let value = get_json(ctx, ALERTAS_PATH, &[]).await?;
    Page::from_value(value, None)
}

/// Create a subscription. The form is validated, then posted verbatim.
pub async fn create_alerta(ctx: &RequestContext<'_>, form: &NovoAlerta) -> Result<()> {
    form.validate()?;
    send_json(ctx, Method::POST, ALERTAS_PATH, Some(form), ALERTAS_PATH).await?;
    info!(nome = %form.nome, canal = %form.canal, "alert created");
    Ok(())
}

/// Flip a subscription's active flag; `ativo` is the current state.
pub async fn toggle_alerta(ctx: &RequestContext<'_>, id: &str, ativo: bool) -> Result<()> {
    let path = format!("{ALERTAS_PATH}/{id}");
    let body = AlertaToggle::flip(ativo);
    send_json(ctx, Method::PATCH, &path, Some(&body), ALERTAS_PATH).await?;
    info!(id, ativo = body.ativo, "alert toggled");
    Ok(())
}
