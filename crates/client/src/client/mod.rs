//! Main LAP API client.
//!
//! [`LapClient`] owns the HTTP connection pool, the response cache, and the retry
//! settings. The resource methods live in the submodules and delegate to
//! [`crate::endpoints`].
//!
//! # Submodules
//! - [`builder`]: client construction and configuration
//! - [`cache`]: in-memory GET response cache
//! - `painel`: dashboard statistics and governance ranking
//! - `licitacoes`: notices and anomalies
//! - `territorio`: municipalities and item price history
//! - `alertas`, `ceis`, `relatorios`: alert rules, debarment registry, reports
//!
//! # Invariants
//! - `base_url` never ends with a slash.
//! - Writes invalidate the cached reads of the resource they touch.

pub mod builder;
pub mod cache;

mod alertas;
mod ceis;
mod licitacoes;
mod painel;
mod relatorios;
mod territorio;

use std::time::Duration;

use lap_config::Config;

use crate::endpoints::RequestContext;
use crate::error::Result;
use crate::metrics::MetricsCollector;

pub use builder::LapClientBuilder;
pub use cache::ResponseCache;

/// LAP REST API client.
///
/// ```rust,ignore
/// use lap_client::{LapClient, ListQuery};
///
/// let client = LapClient::builder()
///     .base_url("http://localhost:8000".to_string())
///     .build()?;
/// let page = client.list_licitacoes(&ListQuery::default()).await?;
/// ```
#[derive(Debug, Clone)]
pub struct LapClient {
    pub(crate) http: reqwest::Client,
    pub(crate) base_url: String,
    pub(crate) max_retries: usize,
    pub(crate) timeout: Duration,
    pub(crate) cache: ResponseCache,
    pub(crate) metrics: Option<MetricsCollector>,
}

impl LapClient {
    pub fn builder() -> LapClientBuilder {
        LapClientBuilder::new()
    }

    /// Build a client from loaded configuration.
    pub fn from_config(config: &Config) -> Result<Self> {
        Self::builder().from_config(config).build()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub(crate) fn ctx(&self) -> RequestContext<'_> {
        RequestContext {
            http: &self.http,
            base_url: &self.base_url,
            max_retries: self.max_retries,
            timeout: self.timeout,
            cache: &self.cache,
            metrics: self.metrics.as_ref(),
        }
    }

    /// Drop every cached response so the next reads hit the API.
    pub fn clear_cache(&self) {
        self.cache.invalidate_all();
    }

    pub fn cache(&self) -> &ResponseCache {
        &self.cache
    }

    /// Resolve a server-relative link (such as a report download URL) against the base URL.
    pub fn absolute_url(&self, link: &str) -> String {
        if link.starts_with("http://") || link.starts_with("https://") {
            link.to_string()
        } else if link.starts_with('/') {
            format!("{}{link}", self.base_url)
        } else {
            format!("{}/{link}", self.base_url)
        }
    }
}
