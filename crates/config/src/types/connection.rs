//! Connection configuration types.
//!
//! Responsibilities:
//! - Define the API connection settings (URL, timeout, retries, cache TTL).
//! - Define list defaults shared by the CLI and TUI.
//!
//! Does NOT handle:
//! - Loading from env or flags (see `loader`).
//! - Opening connections (see the client crate).
//!
//! Invariants:
//! - Duration fields serialize as whole seconds.
//! - `base_url` never ends with a slash once built by `ConfigLoader`.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_BASE_URL, DEFAULT_CACHE_TTL_SECS, DEFAULT_MAX_RETRIES, DEFAULT_PER_PAGE,
    DEFAULT_TIMEOUT_SECS,
};

mod duration_seconds {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        duration.as_secs().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let secs = u64::deserialize(deserializer)?;
        Ok(Duration::from_secs(secs))
    }
}

/// Connection settings for the procurement API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionConfig {
    /// Base URL of the API, e.g. `http://localhost:8000`.
    pub base_url: String,
    /// Per-request timeout.
    #[serde(with = "duration_seconds")]
    pub timeout: Duration,
    /// Automatic retries after the first attempt.
    pub max_retries: usize,
    /// Lifetime of cached GET responses; zero disables the cache.
    #[serde(with = "duration_seconds")]
    pub cache_ttl: Duration,
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            max_retries: DEFAULT_MAX_RETRIES,
            cache_ttl: Duration::from_secs(DEFAULT_CACHE_TTL_SECS),
        }
    }
}

/// Defaults for paginated list pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListDefaults {
    pub per_page: u32,
}

impl Default for ListDefaults {
    fn default() -> Self {
        Self {
            per_page: DEFAULT_PER_PAGE,
        }
    }
}

/// Fully resolved configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    pub connection: ConnectionConfig,
    pub list: ListDefaults,
}

impl Config {
    /// Configuration pointing at `base_url` with every other value defaulted.
    ///
    /// The URL is used as given; callers wanting validation go through `ConfigLoader`.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            connection: ConnectionConfig {
                base_url: base_url.into(),
                ..ConnectionConfig::default()
            },
            list: ListDefaults::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn durations_round_trip_as_seconds() {
        let config = Config::with_base_url("http://localhost:8000");
        let json = serde_json::to_value(&config).unwrap();
        assert_eq!(json["connection"]["timeout"], 30);
        assert_eq!(json["connection"]["cache_ttl"], 30);

        let back: Config = serde_json::from_value(json).unwrap();
        assert_eq!(back, config);
    }
}
