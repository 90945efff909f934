//! Environment variable parsing for configuration.
//!
//! Responsibilities:
//! - Read the `LAP_*` variables and apply them to a `ConfigLoader`.
//! - Treat empty or whitespace-only variables as unset.
//!
//! Does NOT handle:
//! - `.env` file loading (handled by `ConfigLoader::load_dotenv`).
//! - Range validation of the final values (handled by `ConfigLoader::build`).

use std::time::Duration;

use super::builder::ConfigLoader;
use super::error::ConfigError;
use crate::constants::MAX_MAX_RETRIES;

pub const ENV_API_URL: &str = "LAP_API_URL";
pub const ENV_TIMEOUT: &str = "LAP_TIMEOUT";
pub const ENV_MAX_RETRIES: &str = "LAP_MAX_RETRIES";
pub const ENV_PER_PAGE: &str = "LAP_PER_PAGE";
pub const ENV_CACHE_TTL: &str = "LAP_CACHE_TTL";

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
/// Returns the trimmed value if present.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

fn parse_number<T: std::str::FromStr>(var: &str, raw: &str, hint: &str) -> Result<T, ConfigError> {
    raw.parse().map_err(|_| ConfigError::InvalidValue {
        var: var.to_string(),
        message: hint.to_string(),
    })
}

/// Apply environment variable configuration to the loader.
pub fn apply_env(loader: &mut ConfigLoader) -> Result<(), ConfigError> {
    if let Some(url) = env_var_or_none(ENV_API_URL) {
        loader.set_base_url(Some(url));
    }
    if let Some(timeout) = env_var_or_none(ENV_TIMEOUT) {
        let secs: u64 = parse_number(ENV_TIMEOUT, &timeout, "must be a number of seconds")?;
        loader.set_timeout(Some(Duration::from_secs(secs)));
    }
    if let Some(retries) = env_var_or_none(ENV_MAX_RETRIES) {
        let value: usize =
            parse_number(ENV_MAX_RETRIES, &retries, "must be a non-negative integer")?;
        if value > MAX_MAX_RETRIES {
            return Err(ConfigError::InvalidMaxRetries {
                value,
                max: MAX_MAX_RETRIES,
            });
        }
        loader.set_max_retries(Some(value));
    }
    if let Some(per_page) = env_var_or_none(ENV_PER_PAGE) {
        let value: u32 = parse_number(ENV_PER_PAGE, &per_page, "must be a positive integer")?;
        loader.set_per_page(Some(value));
    }
    if let Some(ttl) = env_var_or_none(ENV_CACHE_TTL) {
        let secs: u64 = parse_number(ENV_CACHE_TTL, &ttl, "must be a number of seconds")?;
        loader.set_cache_ttl(Some(Duration::from_secs(secs)));
    }
    Ok(())
}
