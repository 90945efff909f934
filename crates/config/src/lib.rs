//! Configuration management for the LAP procurement dashboard.
//!
//! This crate provides the connection settings shared by the CLI and TUI
//! (loaded from `.env`, environment variables, and command-line overrides),
//! the terminal color themes, and the small amount of UI state persisted
//! between TUI sessions.

pub mod constants;
mod loader;
pub mod persistence;
pub mod types;

pub use loader::{ConfigError, ConfigLoader, env_var_or_none};
pub use persistence::{PersistedState, StateStore};
pub use types::{ColorTheme, Config, ConnectionConfig, ListDefaults, Theme};

#[cfg(test)]
pub(crate) mod test_util {
    use std::sync::{Mutex, OnceLock};

    pub fn global_test_lock() -> &'static Mutex<()> {
        static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
        LOCK.get_or_init(|| Mutex::new(()))
    }
}
