//! Dashboard, supplier ranking and governance ranking handlers.

use tokio::sync::mpsc::Sender;

use crate::action::{Action, DashboardData};

use super::{SharedClient, api_result, finish};

/// Load KPIs and the monthly series together; either failure fails the dashboard.
pub async fn handle_load_dashboard(client: SharedClient, tx: Sender<Action>) {
    let _ = tx.send(Action::Loading(true)).await;
    tokio::spawn(async move {
        let (kpis, por_mes) = tokio::join!(client.get_kpis(), client.get_por_mes());
        let result = kpis.and_then(|kpis| por_mes.map(|por_mes| DashboardData { kpis, por_mes }));
        finish(&tx, [Action::DashboardLoaded(api_result(result))]).await;
    });
}

pub async fn handle_load_fornecedores(
    client: SharedClient,
    tx: Sender<Action>,
    seq: u64,
    limite: u32,
) {
    let _ = tx.send(Action::Loading(true)).await;
    tokio::spawn(async move {
        let result = client.top_fornecedores(limite).await;
        finish(
            &tx,
            [Action::FornecedoresLoaded {
                seq,
                result: api_result(result),
            }],
        )
        .await;
    });
}

pub async fn handle_load_governanca(client: SharedClient, tx: Sender<Action>, seq: u64) {
    let _ = tx.send(Action::Loading(true)).await;
    tokio::spawn(async move {
        let result = client.ranking_governanca().await;
        finish(
            &tx,
            [Action::GovernancaLoaded {
                seq,
                result: api_result(result),
            }],
        )
        .await;
    });
}
