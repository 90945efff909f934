//! Async side effect handlers for TUI actions.
//!
//! Responsibilities:
//! - Run the API calls triggered by actions.
//! - Spawn a background task per call so the UI never blocks.
//! - Send results back via the action channel for state updates.
//!
//! Does NOT handle:
//! - Direct application state modification (sends actions to do that).
//! - UI rendering or terminal management.
//!
//! Invariants:
//! - Every API call runs in its own tokio task.
//! - `Loading(true)` is sent before the task starts and `Loading(false)` after
//!   its result.
//! - List results carry the sequence number of the request that produced them.
//! - A successful write is followed by a `Reload` of the screen it touches.

mod alertas;
mod ceis;
mod dispatcher;
mod export;
mod listas;
mod painel;
mod relatorios;
mod territorio;
mod types;

pub use dispatcher::handle_side_effects;
pub use types::SharedClient;

use std::sync::Arc;

use tokio::sync::mpsc::Sender;

use crate::action::{Action, ApiResult};

/// Wrap a client result for transport in an action.
pub(crate) fn api_result<T>(result: lap_client::Result<T>) -> ApiResult<T> {
    result.map_err(Arc::new)
}

/// Send the result actions of a finished task, then clear the loading flag.
pub(crate) async fn finish(tx: &Sender<Action>, actions: impl IntoIterator<Item = Action>) {
    for action in actions {
        let _ = tx.send(action).await;
    }
    let _ = tx.send(Action::Loading(false)).await;
}
