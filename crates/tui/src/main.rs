//! LAP TUI - terminal dashboard for the LAP procurement API.
//!
//! Responsibilities:
//! - Orchestrate application startup and shutdown.
//! - Initialize terminal, logging, and async runtime.
//! - Run the main event loop.
//!
//! Does NOT handle:
//! - REST API details (see `crates/client`).
//! - Configuration parsing (see `crates/config`).
//! - Async API calls (see `runtime::side_effects`).
//!
//! Invariants:
//! - Logs go to a daily rolling file; the terminal belongs to ratatui.
//! - The persisted state is saved when the loop ends.

use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{Event, EventStream, KeyEventKind};
use futures_util::StreamExt;
use lap_config::constants::{DEFAULT_CHANNEL_CAPACITY, DEFAULT_TICK_MS};
use lap_tui::action::Action;
use lap_tui::app::{App, CurrentScreen};
use lap_tui::cli::Cli;
use lap_tui::runtime::{
    client::create_client,
    config::{load_config, load_persisted_state, log_dir, save_persisted_state, state_store},
    dispatch,
    terminal::TerminalGuard,
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::sync::mpsc::channel;
use tracing_appender::non_blocking;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_dir = log_dir(&cli);
    std::fs::create_dir_all(&log_dir)
        .with_context(|| format!("failed to create log dir {}", log_dir.display()))?;
    let file_appender = tracing_appender::rolling::daily(&log_dir, "lap-tui.log");
    let (non_blocking, _guard) = non_blocking(file_appender);
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(fmt::layer().with_writer(non_blocking).with_ansi(false))
        .init();
    // _guard must live for the whole of main() so buffered logs are flushed.

    let config = load_config(&cli)?;
    let client = create_client(&config)?;

    let store = state_store();
    let persisted = load_persisted_state(&cli, store.as_ref());
    let route = cli
        .route
        .clone()
        .or_else(|| persisted.as_ref().and_then(|p| p.last_route.clone()));
    let initial = route
        .as_deref()
        .map(CurrentScreen::from_route)
        .unwrap_or(CurrentScreen::Dashboard);

    let mut app = App::with_per_page(persisted, initial, config.list.per_page);
    app.export_dir = cli.export_dir.clone();
    app.api_base_url = client.base_url().to_string();
    tracing::info!(screen = initial.route(), "starting lap-tui");

    let guard = TerminalGuard::enter().context("failed to set up the terminal")?;
    let mut terminal = Terminal::new(CrosstermBackend::new(std::io::stdout()))?;
    terminal.clear()?;

    let (tx, mut rx) = channel::<Action>(DEFAULT_CHANNEL_CAPACITY);

    let tx_input = tx.clone();
    tokio::spawn(async move {
        let mut reader = EventStream::new();
        while let Some(event) = reader.next().await {
            let action = match event {
                Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => Action::Input(key),
                Ok(Event::Resize(width, height)) => Action::Resize(width, height),
                Ok(_) => continue,
                Err(e) => {
                    tracing::error!(error = %e, "terminal event stream failed");
                    break;
                }
            };
            if tx_input.send(action).await.is_err() {
                break;
            }
        }
    });

    let mut tick = tokio::time::interval(Duration::from_millis(DEFAULT_TICK_MS));

    // Initial load for the opening screen.
    for action in app.load_actions_for_screen() {
        let _ = dispatch(&mut app, action, &client, &tx).await;
    }

    loop {
        terminal.draw(|f| app.render(f))?;

        let action = tokio::select! {
            Some(action) = rx.recv() => action,
            _ = tick.tick() => Action::Tick,
        };
        if dispatch(&mut app, action, &client, &tx).await.is_break() {
            break;
        }
    }

    save_persisted_state(store.as_ref(), &app.persisted_state());
    drop(guard);
    terminal.show_cursor()?;
    tracing::info!("lap-tui exited");
    Ok(())
}

