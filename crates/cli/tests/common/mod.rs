//! Shared test utilities for lap-cli integration tests.
//!
//! Invariants:
//! - Every command built here ignores the host's `.env` and `LAP_*` variables.

use assert_cmd::Command;

/// Returns a hermetic `lap-cli` command for integration testing.
pub fn lap_cmd() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("lap-cli");

    // Hermeticity: prevent loading local .env
    cmd.env("DOTENV_DISABLED", "1");

    cmd.env_remove("LAP_API_URL")
        .env_remove("LAP_TIMEOUT")
        .env_remove("LAP_MAX_RETRIES")
        .env_remove("LAP_PER_PAGE")
        .env_remove("LAP_CACHE_TTL")
        .env_remove("RUST_LOG");

    cmd
}

/// Hermetic command pointed at `base_url` with retries disabled.
#[allow(dead_code)]
pub fn lap_cmd_with_base_url(base_url: &str) -> Command {
    let mut cmd = lap_cmd();
    cmd.env("LAP_API_URL", base_url);
    cmd.env("LAP_MAX_RETRIES", "0");
    cmd
}
