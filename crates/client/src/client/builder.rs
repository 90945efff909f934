//! Client builder for constructing [`LapClient`] instances.
//!
//! This module is responsible for:
//! - Providing a fluent builder API for client configuration
//! - Validating and normalizing the base URL
//! - Configuring the underlying HTTP client (timeout, redirect limit)
//! - Sizing the response cache
//!
//! # Invariants
//! - The base URL must be an absolute `http`/`https` URL
//! - The base URL is always normalized to have no trailing slashes

use std::time::Duration;

use lap_config::{
    Config,
    constants::{
        DEFAULT_BASE_URL, DEFAULT_CACHE_CAPACITY, DEFAULT_CACHE_TTL_SECS, DEFAULT_MAX_REDIRECTS,
        DEFAULT_MAX_RETRIES, DEFAULT_TIMEOUT_SECS,
    },
};

use crate::client::{LapClient, ResponseCache};
use crate::error::{ClientError, Result};
use crate::metrics::MetricsCollector;

/// Builder for [`LapClient`].
#[derive(Debug)]
pub struct LapClientBuilder {
    base_url: String,
    timeout: Duration,
    max_retries: usize,
    cache_ttl: Duration,
    cache_capacity: u64,
    metrics: Option<MetricsCollector>,
}

impl Default for LapClientBuilder {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            max_retries: DEFAULT_MAX_RETRIES,
            cache_ttl: Duration::from_secs(DEFAULT_CACHE_TTL_SECS),
            cache_capacity: DEFAULT_CACHE_CAPACITY,
            metrics: None,
        }
    }
}

impl LapClientBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn base_url(mut self, url: String) -> Self {
        self.base_url = url;
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn max_retries(mut self, retries: usize) -> Self {
        self.max_retries = retries;
        self
    }

    /// Lifetime of cached GET responses. Zero disables caching.
    pub fn cache_ttl(mut self, ttl: Duration) -> Self {
        self.cache_ttl = ttl;
        self
    }

    pub fn cache_capacity(mut self, capacity: u64) -> Self {
        self.cache_capacity = capacity;
        self
    }

    pub fn metrics(mut self, metrics: MetricsCollector) -> Self {
        self.metrics = Some(metrics);
        self
    }

    pub fn from_config(mut self, config: &Config) -> Self {
        self.base_url = config.connection.base_url.clone();
        self.timeout = config.connection.timeout;
        self.max_retries = config.connection.max_retries;
        self.cache_ttl = config.connection.cache_ttl;
        self
    }

    fn normalize_base_url(url: &str) -> Result<String> {
        let trimmed = url.trim().trim_end_matches('/');
        if trimmed.is_empty() {
            return Err(ClientError::InvalidUrl("base_url is required".to_string()));
        }
        let parsed = reqwest::Url::parse(trimmed)
            .map_err(|e| ClientError::InvalidUrl(format!("{trimmed}: {e}")))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ClientError::InvalidUrl(format!(
                "{trimmed}: scheme must be http or https"
            )));
        }
        Ok(trimmed.to_string())
    }

    pub fn build(self) -> Result<LapClient> {
        let base_url = Self::normalize_base_url(&self.base_url)?;

        let http = reqwest::Client::builder()
            .timeout(self.timeout)
            .redirect(reqwest::redirect::Policy::limited(DEFAULT_MAX_REDIRECTS))
            .build()?;

        let cache = ResponseCache::new(self.cache_capacity, self.cache_ttl)
            .with_metrics(self.metrics.clone());

        tracing::debug!(
            %base_url,
            timeout_secs = self.timeout.as_secs(),
            max_retries = self.max_retries,
            cache_enabled = cache.is_enabled(),
            "built API client"
        );

        Ok(LapClient {
            http,
            base_url,
            max_retries: self.max_retries,
            timeout: self.timeout,
            cache,
            metrics: self.metrics,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slashes_are_removed() {
        let client = LapClientBuilder::new()
            .base_url("http://localhost:8000///".to_string())
            .build()
            .unwrap();
        assert_eq!(client.base_url(), "http://localhost:8000");
    }

    #[test]
    fn invalid_urls_are_rejected() {
        for url in ["", "localhost:8000/api", "ftp://host", "not a url"] {
            let err = LapClientBuilder::new()
                .base_url(url.to_string())
                .build()
                .unwrap_err();
            assert!(matches!(err, ClientError::InvalidUrl(_)), "{url}");
        }
    }

    #[test]
    fn zero_ttl_disables_cache() {
        let client = LapClientBuilder::new()
            .cache_ttl(Duration::ZERO)
            .build()
            .unwrap();
        assert!(!client.cache().is_enabled());
    }

    #[test]
    fn defaults_match_constants() {
        let client = LapClientBuilder::new().build().unwrap();
        assert_eq!(client.base_url(), DEFAULT_BASE_URL);
        assert_eq!(client.max_retries, DEFAULT_MAX_RETRIES);
        assert_eq!(client.timeout(), Duration::from_secs(DEFAULT_TIMEOUT_SECS));
    }
}
