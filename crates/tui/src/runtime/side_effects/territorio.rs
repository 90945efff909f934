//! Municipality and item price history handlers.

use tokio::sync::mpsc::Sender;

use crate::action::Action;

use super::{SharedClient, api_result, finish};

pub async fn handle_load_municipios(
    client: SharedClient,
    tx: Sender<Action>,
    seq: u64,
    uf: Option<String>,
) {
    let _ = tx.send(Action::Loading(true)).await;
    tokio::spawn(async move {
        let result = client.list_municipios(uf.as_deref()).await;
        finish(
            &tx,
            [Action::MunicipiosLoaded {
                seq,
                result: api_result(result),
            }],
        )
        .await;
    });
}

pub async fn handle_load_historico(
    client: SharedClient,
    tx: Sender<Action>,
    seq: u64,
    descricao: String,
    meses: u32,
) {
    let _ = tx.send(Action::Loading(true)).await;
    tokio::spawn(async move {
        let result = client.historico_precos(&descricao, meses).await;
        finish(
            &tx,
            [Action::HistoricoPrecosLoaded {
                seq,
                result: api_result(result),
            }],
        )
        .await;
    });
}
