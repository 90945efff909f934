//! Runtime components for the TUI application.
//!
//! This module contains the runtime infrastructure for the TUI:
//! - Terminal management (`TerminalGuard`)
//! - Client creation and configuration loading
//! - Async side effect handlers for API calls
//! - The action dispatcher driven by the event loop
//!
//! Does NOT handle:
//! - UI rendering or input handling (see `lap_tui::app` and `lap_tui::ui`).
//! - API details (see `lap_client`).
//!
//! Invariants:
//! - Actions are processed in order; follow-up actions produced while handling
//!   one are queued behind it.
//! - Side effects run in separate tokio tasks to avoid blocking the UI.

pub mod client;
pub mod config;
pub mod side_effects;
pub mod terminal;

use std::collections::VecDeque;
use std::ops::ControlFlow;

use tokio::sync::mpsc::Sender;

use crate::action::{Action, RedactedAction};
use crate::app::App;
use crate::runtime::side_effects::{SharedClient, handle_side_effects};

/// Apply `action` and everything it leads to.
///
/// Returns `Break` when the app should quit.
pub async fn dispatch(
    app: &mut App,
    action: Action,
    client: &SharedClient,
    tx: &Sender<Action>,
) -> ControlFlow<()> {
    let mut queue = VecDeque::from([action]);
    while let Some(action) = queue.pop_front() {
        match action {
            Action::Quit => return ControlFlow::Break(()),
            Action::Input(key) => queue.extend(app.handle_input(key)),
            Action::Tick => {
                app.update(Action::Tick);
                queue.extend(app.handle_tick());
            }
            Action::Reload(screen) => queue.extend(app.reload_actions(screen)),
            action => {
                tracing::debug!(action = ?RedactedAction(&action), "dispatch");
                let loads_screen = matches!(action, Action::NavigateTo(_) | Action::Refresh);
                app.update(action.clone());
                handle_side_effects(action, client.clone(), tx.clone()).await;
                if loads_screen {
                    queue.extend(app.load_actions_for_screen());
                }
            }
        }
    }
    ControlFlow::Continue(())
}
