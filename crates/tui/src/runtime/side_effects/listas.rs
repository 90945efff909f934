//! Paginated notice and anomaly list handlers.

use lap_client::ListQuery;
use tokio::sync::mpsc::Sender;

use crate::action::Action;

use super::{SharedClient, api_result, finish};

pub async fn handle_load_licitacoes(
    client: SharedClient,
    tx: Sender<Action>,
    seq: u64,
    query: ListQuery,
) {
    let _ = tx.send(Action::Loading(true)).await;
    tokio::spawn(async move {
        let result = client.list_licitacoes(&query).await;
        finish(
            &tx,
            [Action::LicitacoesLoaded {
                seq,
                result: api_result(result),
            }],
        )
        .await;
    });
}

pub async fn handle_load_anomalias(
    client: SharedClient,
    tx: Sender<Action>,
    seq: u64,
    query: ListQuery,
) {
    let _ = tx.send(Action::Loading(true)).await;
    tokio::spawn(async move {
        let result = client.list_anomalias(&query).await;
        finish(
            &tx,
            [Action::AnomaliasLoaded {
                seq,
                result: api_result(result),
            }],
        )
        .await;
    });
}

pub async fn handle_load_anomalias_resumo(client: SharedClient, tx: Sender<Action>) {
    let _ = tx.send(Action::Loading(true)).await;
    tokio::spawn(async move {
        let result = client.anomalias_resumo().await;
        finish(&tx, [Action::AnomaliasResumoLoaded(api_result(result))]).await;
    });
}
