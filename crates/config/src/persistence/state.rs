//! Persisted state type and its file store.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::create_corrupt_backup;
use crate::loader::ConfigError;
use crate::types::ColorTheme;

/// Preferences remembered between TUI sessions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersistedState {
    /// Selected color theme.
    pub color_theme: ColorTheme,
    /// Route of the screen open when the TUI last exited (e.g. `/licitacoes`).
    pub last_route: Option<String>,
}

/// Reads and writes `PersistedState` at a fixed path.
#[derive(Debug, Clone)]
pub struct StateStore {
    path: PathBuf,
}

impl StateStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Store at the platform default location.
    pub fn at_default_path() -> anyhow::Result<Self> {
        Ok(Self::new(super::default_state_path()?))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the persisted state, returning defaults when the file is missing or unreadable.
    pub fn load(&self) -> PersistedState {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return PersistedState::default();
            }
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "Failed to read state file");
                return PersistedState::default();
            }
        };

        match serde_json::from_str(&content) {
            Ok(state) => state,
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "State file is corrupt");
                match create_corrupt_backup(&self.path) {
                    Ok(backup) => {
                        tracing::warn!(backup = %backup.display(), "Corrupt state file backed up")
                    }
                    Err(e) => tracing::warn!(error = %e, "Could not back up corrupt state file"),
                }
                PersistedState::default()
            }
        }
    }

    /// Write the state atomically.
    pub fn save(&self, state: &PersistedState) -> Result<(), ConfigError> {
        let fail = |message: String| ConfigError::StatePersistence {
            path: self.path.clone(),
            message,
        };

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| fail(format!("cannot create directory: {e}")))?;
        }

        let content =
            serde_json::to_string_pretty(state).map_err(|e| fail(format!("serialize: {e}")))?;
        let temp_path = self.path.with_extension("tmp");
        std::fs::write(&temp_path, content).map_err(|e| fail(format!("write: {e}")))?;
        std::fs::rename(&temp_path, &self.path).map_err(|e| fail(format!("rename: {e}")))?;

        tracing::debug!(path = %self.path.display(), "UI state saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let store = StateStore::new(dir.path().join("state.json"));
        assert_eq!(store.load(), PersistedState::default());
    }

    #[test]
    fn save_then_load_preserves_values() {
        let dir = TempDir::new().unwrap();
        let store = StateStore::new(dir.path().join("nested").join("state.json"));
        let state = PersistedState {
            color_theme: ColorTheme::Light,
            last_route: Some("/anomalias".to_string()),
        };

        store.save(&state).unwrap();
        assert_eq!(store.load(), state);
        assert!(!dir.path().join("nested").join("state.tmp").exists());
    }

    #[test]
    fn corrupt_file_is_backed_up_and_defaults_returned() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("state.json");
        std::fs::write(&path, "{ not json").unwrap();

        let store = StateStore::new(path.clone());
        assert_eq!(store.load(), PersistedState::default());
        assert!(!path.exists());

        let backups = std::fs::read_dir(dir.path())
            .unwrap()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_name().to_string_lossy().contains("corrupt"))
            .count();
        assert_eq!(backups, 1);
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let state: PersistedState =
            serde_json::from_str(r#"{"color_theme":"monochrome","extra":1}"#).unwrap();
        assert_eq!(state.color_theme, ColorTheme::Monochrome);
        assert_eq!(state.last_route, None);
    }
}
