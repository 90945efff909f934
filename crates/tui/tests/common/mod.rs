//! Common test utilities for TUI side effects tests.
//!
//! The harness runs `handle_side_effects` against a wiremock server standing in
//! for the LAP API and collects every action the spawned tasks send back.
//!
//! # Invariants
//! - Fixtures are loaded from the client's fixtures directory
//! - Each test gets its own isolated mock server and action channel
//! - The client under test has caching and retries disabled

#![allow(dead_code)]

use std::sync::Arc;

use tokio::sync::mpsc;

pub use lap_client::testing::{load_fixture, uncached_client};
pub use lap_tui::action::Action;
pub use lap_tui::runtime::side_effects::{SharedClient, handle_side_effects};
pub use tokio::sync::mpsc::{Receiver, Sender};
pub use wiremock::{Mock, MockServer, ResponseTemplate};

/// Mock server, action channel and shared client for one test.
pub struct SideEffectsTestHarness {
    pub mock_server: MockServer,
    pub action_rx: Receiver<Action>,
    pub action_tx: Sender<Action>,
    pub client: SharedClient,
}

impl SideEffectsTestHarness {
    pub async fn new() -> Self {
        let mock_server = MockServer::start().await;
        let (action_tx, action_rx) = mpsc::channel::<Action>(100);
        let client = Arc::new(uncached_client(&mock_server.uri()));
        Self {
            mock_server,
            action_rx,
            action_tx,
            client,
        }
    }

    /// Handle an action and collect all resulting actions.
    ///
    /// `handle_side_effects` must return promptly: API calls belong in spawned
    /// tasks, so a handler that awaits the network here fails the test.
    pub async fn handle_and_collect(&mut self, action: Action, timeout_secs: u64) -> Vec<Action> {
        let handle_future =
            handle_side_effects(action, self.client.clone(), self.action_tx.clone());
        if tokio::time::timeout(tokio::time::Duration::from_millis(100), handle_future)
            .await
            .is_err()
        {
            panic!("handle_side_effects timed out - it may be blocking on network I/O");
        }

        tokio::task::yield_now().await;

        let mut actions = Vec::new();
        let deadline = tokio::time::Instant::now() + tokio::time::Duration::from_secs(timeout_secs);
        while tokio::time::Instant::now() < deadline {
            match tokio::time::timeout(
                tokio::time::Duration::from_millis(100),
                self.action_rx.recv(),
            )
            .await
            {
                Ok(Some(action)) => {
                    let done = matches!(action, Action::Loading(false));
                    actions.push(action);
                    if done {
                        break;
                    }
                }
                Ok(None) => break,
                Err(_) => tokio::task::yield_now().await,
            }
        }
        actions
    }
}

/// Position of the first action matching `pred`.
pub fn position_of(actions: &[Action], pred: impl Fn(&Action) -> bool) -> Option<usize> {
    actions.iter().position(pred)
}

/// Assert the loading flag brackets the results: set first, cleared last.
pub fn assert_loading_brackets(actions: &[Action]) {
    assert!(
        matches!(actions.first(), Some(Action::Loading(true))),
        "first action should be Loading(true), got {actions:?}"
    );
    assert!(
        matches!(actions.last(), Some(Action::Loading(false))),
        "last action should be Loading(false), got {actions:?}"
    );
}
