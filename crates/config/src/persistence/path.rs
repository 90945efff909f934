//! Path helpers for the persisted state file.

use std::path::PathBuf;

use anyhow::Context;

/// Returns the default path of the TUI state file.
///
/// - Linux: `~/.config/lap/state.json`
/// - macOS: `~/Library/Application Support/lap/state.json`
/// - Windows: `%AppData%\lap\state.json`
pub fn default_state_path() -> anyhow::Result<PathBuf> {
    let proj_dirs = directories::ProjectDirs::from("", "", "lap")
        .context("Failed to determine project directories")?;

    Ok(proj_dirs.config_dir().join("state.json"))
}
