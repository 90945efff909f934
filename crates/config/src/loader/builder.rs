//! Configuration loader builder.
//!
//! Responsibilities:
//! - Collect connection settings from defaults, environment, and CLI overrides.
//! - Validate and normalize the API base URL.
//! - Produce the immutable `Config` consumed by the client crate.
//!
//! Does NOT handle:
//! - Parsing individual environment variables (see `env.rs`).
//! - Persisted UI state (see `persistence`).

use std::time::Duration;

use super::env::apply_env;
use super::error::ConfigError;
use crate::constants::{
    DEFAULT_BASE_URL, DEFAULT_CACHE_TTL_SECS, DEFAULT_MAX_RETRIES, DEFAULT_PER_PAGE,
    DEFAULT_TIMEOUT_SECS, MAX_MAX_RETRIES, MAX_PER_PAGE, MAX_TIMEOUT_SECS,
};
use crate::types::{Config, ConnectionConfig, ListDefaults};

/// Configuration loader that builds config from multiple sources.
///
/// Later calls override earlier ones, so the usual chain is
/// `new().load_dotenv()?.from_env()?.with_base_url(cli_flag)`.
#[derive(Debug, Default, Clone)]
pub struct ConfigLoader {
    base_url: Option<String>,
    timeout: Option<Duration>,
    max_retries: Option<usize>,
    per_page: Option<u32>,
    cache_ttl: Option<Duration>,
}

impl ConfigLoader {
    /// Create a new configuration loader with nothing set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `.env` loading is disabled through `DOTENV_DISABLED`.
    fn dotenv_disabled() -> bool {
        matches!(
            std::env::var("DOTENV_DISABLED").as_deref(),
            Ok("1") | Ok("true") | Ok("TRUE") | Ok("yes")
        )
    }

    /// Load environment variables from a `.env` file in the working directory.
    ///
    /// Missing `.env` files are silently ignored.
    pub fn load_dotenv(self) -> Result<Self, ConfigError> {
        if Self::dotenv_disabled() {
            return Ok(self);
        }

        match dotenvy::dotenv() {
            Ok(_) => Ok(self),
            Err(e) if Self::is_not_found(&e) => Ok(self),
            Err(dotenvy::Error::LineParse(_, idx)) => {
                Err(ConfigError::DotenvParse { error_index: idx })
            }
            Err(dotenvy::Error::Io(io_err)) => Err(ConfigError::DotenvIo {
                kind: io_err.kind(),
            }),
            Err(_) => Err(ConfigError::DotenvUnknown),
        }
    }

    fn is_not_found(err: &dotenvy::Error) -> bool {
        matches!(
            err,
            dotenvy::Error::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound
        )
    }

    /// Read configuration from `LAP_*` environment variables.
    pub fn from_env(mut self) -> Result<Self, ConfigError> {
        apply_env(&mut self)?;
        Ok(self)
    }

    pub fn with_base_url(mut self, url: String) -> Self {
        self.base_url = Some(url);
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn with_max_retries(mut self, retries: usize) -> Self {
        self.max_retries = Some(retries);
        self
    }

    pub fn with_per_page(mut self, per_page: u32) -> Self {
        self.per_page = Some(per_page);
        self
    }

    pub fn with_cache_ttl(mut self, ttl: Duration) -> Self {
        self.cache_ttl = Some(ttl);
        self
    }

    pub(crate) fn set_base_url(&mut self, url: Option<String>) {
        self.base_url = url;
    }

    pub(crate) fn set_timeout(&mut self, timeout: Option<Duration>) {
        self.timeout = timeout;
    }

    pub(crate) fn set_max_retries(&mut self, retries: Option<usize>) {
        self.max_retries = retries;
    }

    pub(crate) fn set_per_page(&mut self, per_page: Option<u32>) {
        self.per_page = per_page;
    }

    pub(crate) fn set_cache_ttl(&mut self, ttl: Option<Duration>) {
        self.cache_ttl = ttl;
    }

    /// Build the final configuration, validating every value.
    pub fn build(self) -> Result<Config, ConfigError> {
        let base_url = validate_and_normalize_base_url(
            self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL),
        )?;

        let timeout = self
            .timeout
            .unwrap_or(Duration::from_secs(DEFAULT_TIMEOUT_SECS));
        validate_timeout(timeout)?;

        let max_retries = self.max_retries.unwrap_or(DEFAULT_MAX_RETRIES);
        if max_retries > MAX_MAX_RETRIES {
            return Err(ConfigError::InvalidMaxRetries {
                value: max_retries,
                max: MAX_MAX_RETRIES,
            });
        }

        let per_page = self.per_page.unwrap_or(DEFAULT_PER_PAGE);
        if per_page == 0 || per_page > MAX_PER_PAGE {
            return Err(ConfigError::InvalidValue {
                var: "per_page".to_string(),
                message: format!("must be between 1 and {MAX_PER_PAGE}, got {per_page}"),
            });
        }

        Ok(Config {
            connection: ConnectionConfig {
                base_url,
                timeout,
                max_retries,
                cache_ttl: self
                    .cache_ttl
                    .unwrap_or(Duration::from_secs(DEFAULT_CACHE_TTL_SECS)),
            },
            list: ListDefaults { per_page },
        })
    }
}

fn validate_timeout(timeout: Duration) -> Result<(), ConfigError> {
    let secs = timeout.as_secs();
    if secs == 0 {
        return Err(ConfigError::InvalidTimeout {
            message: "timeout must be greater than 0 seconds".to_string(),
        });
    }
    if secs > MAX_TIMEOUT_SECS {
        return Err(ConfigError::InvalidTimeout {
            message: format!("timeout exceeds maximum allowed value of {MAX_TIMEOUT_SECS} seconds"),
        });
    }
    Ok(())
}

/// Validate that `raw` is an absolute http(s) URL with a host and strip trailing slashes.
pub(crate) fn validate_and_normalize_base_url(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim();
    let invalid = |message: String| ConfigError::InvalidBaseUrl {
        url: trimmed.to_string(),
        message,
    };

    if trimmed.is_empty() {
        return Err(invalid("URL is empty".to_string()));
    }

    let parsed = url::Url::parse(trimmed).map_err(|e| {
        invalid(format!(
            "must be an absolute http(s) URL with a host (e.g. http://localhost:8000): {e}"
        ))
    })?;

    let scheme = parsed.scheme();
    if scheme != "http" && scheme != "https" {
        return Err(invalid(format!("scheme must be http or https, got: {scheme}")));
    }

    if parsed.host_str().is_none() {
        return Err(invalid("host is required".to_string()));
    }

    Ok(parsed.as_str().trim_end_matches('/').to_string())
}
