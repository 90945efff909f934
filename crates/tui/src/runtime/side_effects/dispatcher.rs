//! Side effect dispatcher.
//!
//! Routes each action to its handler in the domain submodules. Actions without
//! a side effect fall through silently.

use std::time::Instant;

use tokio::sync::mpsc::Sender;
use tracing::{Instrument, info_span};

use crate::action::Action;
use crate::runtime::side_effects::{
    SharedClient, alertas, ceis, export, listas, painel, relatorios, territorio,
};

/// Handle side effects (async API calls) for actions.
///
/// # Arguments
///
/// * `action` - The action to handle
/// * `client` - The shared LAP client
/// * `tx` - The action channel sender for sending results
pub async fn handle_side_effects(action: Action, client: SharedClient, tx: Sender<Action>) {
    let start = Instant::now();
    let span = info_span!(
        "tui.handle_action",
        action_type = action.name(),
        duration_ms = tracing::field::Empty,
    );

    async move {
        handle_action(action, client, tx).await;
        let duration = start.elapsed().as_millis() as i64;
        tracing::Span::current().record("duration_ms", duration);
    }
    .instrument(span)
    .await;
}

async fn handle_action(action: Action, client: SharedClient, tx: Sender<Action>) {
    match action {
        Action::Refresh => {
            client.clear_cache();
            tracing::debug!("response cache cleared");
        }
        Action::LoadDashboard => painel::handle_load_dashboard(client, tx).await,
        Action::LoadFornecedores { seq, limite } => {
            painel::handle_load_fornecedores(client, tx, seq, limite).await;
        }
        Action::LoadGovernanca { seq } => painel::handle_load_governanca(client, tx, seq).await,
        Action::LoadLicitacoes { seq, query } => {
            listas::handle_load_licitacoes(client, tx, seq, query).await;
        }
        Action::LoadAnomalias { seq, query } => {
            listas::handle_load_anomalias(client, tx, seq, query).await;
        }
        Action::LoadAnomaliasResumo => listas::handle_load_anomalias_resumo(client, tx).await,
        Action::LoadMunicipios { seq, uf } => {
            territorio::handle_load_municipios(client, tx, seq, uf).await;
        }
        Action::LoadHistoricoPrecos {
            seq,
            descricao,
            meses,
        } => territorio::handle_load_historico(client, tx, seq, descricao, meses).await,
        Action::LoadAlertas { seq } => alertas::handle_load_alertas(client, tx, seq).await,
        Action::CreateAlerta(form) => alertas::handle_create_alerta(client, tx, form).await,
        Action::ToggleAlerta { id, ativo } => {
            alertas::handle_toggle_alerta(client, tx, id, ativo).await;
        }
        Action::LoadEmpresasImpedidas { seq, fonte, uf } => {
            ceis::handle_load_empresas(client, tx, seq, fonte, uf).await;
        }
        Action::CheckCnpj { seq, cnpj } => ceis::handle_check_cnpj(client, tx, seq, cnpj).await,
        Action::RefreshCeis => ceis::handle_refresh_ceis(client, tx).await,
        Action::LoadRelatorios { seq } => {
            relatorios::handle_load_relatorios(client, tx, seq).await;
        }
        Action::GenerateRelatorio(pedido) => {
            relatorios::handle_generate_relatorio(client, tx, pedido).await;
        }
        Action::ExportData {
            records,
            dir,
            filename,
            format,
        } => export::handle_export_data(records, dir, filename, format, tx).await,
        _ => {}
    }
}
