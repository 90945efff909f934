//! Configuration loading and persistence for the TUI.
//!
//! Responsibilities:
//! - Load configuration with CLI and environment variable overrides.
//! - Load and save the persisted UI state.
//! - Resolve the log directory.
//!
//! Invariants:
//! - Configuration precedence: CLI args > env vars (and `.env`) > defaults.
//! - A missing or unreadable state file never blocks startup.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use directories::ProjectDirs;
use lap_config::{Config, ConfigLoader, PersistedState, StateStore};

use crate::cli::Cli;

/// Build the configuration from `.env`, the environment and CLI flags.
pub fn load_config(cli: &Cli) -> Result<Config> {
    let mut loader = ConfigLoader::new()
        .load_dotenv()
        .context("failed to read .env")?
        .from_env()
        .context("invalid LAP_* environment variable")?;
    if let Some(url) = &cli.base_url {
        loader = loader.with_base_url(url.clone());
    }
    if let Some(secs) = cli.timeout {
        loader = loader.with_timeout(Duration::from_secs(secs));
    }
    if let Some(retries) = cli.max_retries {
        loader = loader.with_max_retries(retries);
    }
    if let Some(per_page) = cli.per_page {
        loader = loader.with_per_page(per_page);
    }
    loader.build().context("invalid configuration")
}

/// State store at the default path, or `None` when no config dir is available.
pub fn state_store() -> Option<StateStore> {
    match StateStore::at_default_path() {
        Ok(store) => Some(store),
        Err(e) => {
            tracing::warn!(error = %e, "state persistence disabled");
            None
        }
    }
}

/// Persisted state to start from; `--fresh` ignores it.
pub fn load_persisted_state(cli: &Cli, store: Option<&StateStore>) -> Option<PersistedState> {
    if cli.fresh {
        return None;
    }
    store.map(StateStore::load)
}

pub fn save_persisted_state(store: Option<&StateStore>, state: &PersistedState) {
    let Some(store) = store else {
        return;
    };
    if let Err(e) = store.save(state) {
        tracing::warn!(error = %e, path = %store.path().display(), "failed to save state");
    }
}

/// `--log-dir`, else the platform data dir, else `./logs`.
pub fn log_dir(cli: &Cli) -> PathBuf {
    cli.log_dir.clone().unwrap_or_else(|| {
        ProjectDirs::from("br", "lap", "lap-tui")
            .map(|dirs| dirs.data_dir().join("logs"))
            .unwrap_or_else(|| PathBuf::from("logs"))
    })
}
