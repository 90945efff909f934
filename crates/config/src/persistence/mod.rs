//! Persistence of TUI preferences between sessions.
//!
//! Responsibilities:
//! - Locate the state file under the platform config directory.
//! - Read `PersistedState`, falling back to defaults on missing or corrupt files.
//! - Write state atomically (temp file + rename).
//!
//! Does NOT handle:
//! - Connection settings, which always come from env/flags (see `loader`).
//!
//! Invariants:
//! - A corrupt state file is renamed to `*.corrupt.{timestamp}` before defaults are used.
//! - Loading never fails; saving reports `ConfigError::StatePersistence`.

use std::path::{Path, PathBuf};

mod path;
mod state;

pub use path::default_state_path;
pub use state::{PersistedState, StateStore};

/// Rename a corrupt state file out of the way, returning the backup path.
pub(crate) fn create_corrupt_backup(path: &Path) -> Result<PathBuf, std::io::Error> {
    let timestamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();

    let backup_path = path.with_extension(format!("corrupt.{timestamp}"));
    std::fs::rename(path, &backup_path)?;
    Ok(backup_path)
}
