//! Alert subscription handlers: list, create and toggle.

use lap_client::NovoAlerta;
use tokio::sync::mpsc::Sender;

use crate::action::Action;
use crate::app::CurrentScreen;
use crate::ui::ToastLevel;

use super::{SharedClient, api_result, finish};

pub async fn handle_load_alertas(client: SharedClient, tx: Sender<Action>, seq: u64) {
    let _ = tx.send(Action::Loading(true)).await;
    tokio::spawn(async move {
        let result = client.list_alertas().await;
        finish(
            &tx,
            [Action::AlertasLoaded {
                seq,
                result: api_result(result),
            }],
        )
        .await;
    });
}

pub async fn handle_create_alerta(client: SharedClient, tx: Sender<Action>, form: NovoAlerta) {
    let _ = tx.send(Action::Loading(true)).await;
    tokio::spawn(async move {
        let result = client.create_alerta(&form).await;
        let ok = result.is_ok();
        if let Err(e) = &result {
            tracing::warn!(error = %e, "alert creation failed");
        }
        let mut actions = vec![Action::AlertaCreated(api_result(result))];
        if ok {
            actions.push(Action::Reload(CurrentScreen::Alertas));
        }
        finish(&tx, actions).await;
    });
}

/// Flip an alert; `ativo` is the value shown when the user pressed the key.
pub async fn handle_toggle_alerta(client: SharedClient, tx: Sender<Action>, id: String, ativo: bool) {
    let _ = tx.send(Action::Loading(true)).await;
    tokio::spawn(async move {
        let actions = match client.toggle_alerta(&id, ativo).await {
            Ok(()) => {
                let message = if ativo {
                    "Alerta desativado."
                } else {
                    "Alerta ativado."
                };
                vec![
                    Action::Notify(ToastLevel::Success, message.to_string()),
                    Action::Reload(CurrentScreen::Alertas),
                ]
            }
            Err(e) => {
                tracing::warn!(%id, error = %e, "alert toggle failed");
                vec![Action::ShowError(format!(
                    "Erro ao alterar alerta: {}",
                    e.user_message()
                ))]
            }
        };
        finish(&tx, actions).await;
    });
}
