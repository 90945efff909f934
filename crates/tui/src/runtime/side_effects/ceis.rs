//! Debarment registry handlers: list, CNPJ check and registry refresh.

use tokio::sync::mpsc::Sender;

use crate::action::Action;
use crate::app::CurrentScreen;
use crate::ui::ToastLevel;

use super::{SharedClient, api_result, finish};

pub async fn handle_load_empresas(
    client: SharedClient,
    tx: Sender<Action>,
    seq: u64,
    fonte: Option<String>,
    uf: Option<String>,
) {
    let _ = tx.send(Action::Loading(true)).await;
    tokio::spawn(async move {
        let result = client
            .list_empresas_impedidas(fonte.as_deref(), uf.as_deref())
            .await;
        finish(
            &tx,
            [Action::EmpresasImpedidasLoaded {
                seq,
                result: api_result(result),
            }],
        )
        .await;
    });
}

/// The check never fails as an action; failures arrive as `CnpjCheck::CheckFailed`.
pub async fn handle_check_cnpj(client: SharedClient, tx: Sender<Action>, seq: u64, cnpj: String) {
    let _ = tx.send(Action::Loading(true)).await;
    tokio::spawn(async move {
        let check = client.check_cnpj(&cnpj).await;
        finish(&tx, [Action::CnpjChecked { seq, cnpj, check }]).await;
    });
}

pub async fn handle_refresh_ceis(client: SharedClient, tx: Sender<Action>) {
    let _ = tx.send(Action::Loading(true)).await;
    tokio::spawn(async move {
        let actions = match client.refresh_ceis().await {
            Ok(()) => vec![
                Action::Notify(
                    ToastLevel::Success,
                    "Base CEIS/CNEP atualizada.".to_string(),
                ),
                Action::Reload(CurrentScreen::Ceis),
            ],
            Err(e) => {
                tracing::warn!(error = %e, "registry refresh failed");
                vec![Action::ShowError(format!(
                    "Erro ao atualizar base CEIS/CNEP: {}",
                    e.user_message()
                ))]
            }
        };
        finish(&tx, actions).await;
    });
}
