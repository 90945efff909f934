//! Report handlers: list and generate.

use lap_client::PedidoRelatorio;
use tokio::sync::mpsc::Sender;

use crate::action::Action;
use crate::app::CurrentScreen;

use super::{SharedClient, api_result, finish};

/// Load reports with download links resolved against the API base URL.
pub async fn handle_load_relatorios(client: SharedClient, tx: Sender<Action>, seq: u64) {
    let _ = tx.send(Action::Loading(true)).await;
    tokio::spawn(async move {
        let result = client.list_relatorios().await.map(|page| {
            page.map(|mut relatorio| {
                relatorio.download_url = client.download_url(&relatorio);
                relatorio
            })
        });
        finish(
            &tx,
            [Action::RelatoriosLoaded {
                seq,
                result: api_result(result),
            }],
        )
        .await;
    });
}

pub async fn handle_generate_relatorio(
    client: SharedClient,
    tx: Sender<Action>,
    pedido: PedidoRelatorio,
) {
    let _ = tx.send(Action::Loading(true)).await;
    tokio::spawn(async move {
        let result = client.generate_relatorio(&pedido).await;
        let ok = result.is_ok();
        if let Err(e) = &result {
            tracing::warn!(tipo = %pedido.tipo, error = %e, "report generation failed");
        }
        let mut actions = vec![Action::RelatorioGenerated(api_result(result))];
        if ok {
            actions.push(Action::Reload(CurrentScreen::Relatorios));
        }
        finish(&tx, actions).await;
    });
}
