//! Client-side response caching for API reads.
//!
//! Purpose: keep recent GET bodies in memory so revisiting a screen is instant.
//! Non-scope: persistent storage or server-directed caching headers.
//!
//! # Invariants
//! - Only GET bodies are cached, keyed by path and query parameters sorted by key.
//! - Every mutating request invalidates the entries under its resource prefix.
//! - A zero TTL disables the cache entirely.
//! - A read that started before an invalidation never repopulates the cache.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use moka::future::Cache as MokaCache;
use tracing::debug;

use crate::metrics::MetricsCollector;

/// Cache key: request path plus query parameters in sorted order.
#[derive(Clone, Debug, Hash, Eq, PartialEq)]
pub struct CacheKey {
    pub path: String,
    pub query_params: Vec<(String, String)>,
}

impl CacheKey {
    pub fn new(path: impl Into<String>, query_params: &[(String, String)]) -> Self {
        let mut query_params = query_params.to_vec();
        query_params.sort();
        Self {
            path: path.into(),
            query_params,
        }
    }
}

/// In-memory cache of successful GET response bodies.
#[derive(Clone, Debug)]
pub struct ResponseCache {
    inner: Option<MokaCache<CacheKey, Arc<Vec<u8>>>>,
    metrics: Option<MetricsCollector>,
    /// Bumped on every invalidation.
    generation: Arc<AtomicU64>,
}

impl ResponseCache {
    pub fn new(capacity: u64, ttl: Duration) -> Self {
        if ttl.is_zero() {
            return Self::disabled();
        }
        let inner = MokaCache::builder()
            .max_capacity(capacity)
            .time_to_live(ttl)
            .support_invalidation_closures()
            .build();
        Self {
            inner: Some(inner),
            metrics: None,
            generation: Arc::default(),
        }
    }

    pub fn disabled() -> Self {
        Self {
            inner: None,
            metrics: None,
            generation: Arc::default(),
        }
    }

    pub fn with_metrics(mut self, metrics: Option<MetricsCollector>) -> Self {
        self.metrics = metrics;
        self
    }

    pub fn is_enabled(&self) -> bool {
        self.inner.is_some()
    }

    pub async fn get(&self, key: &CacheKey) -> Option<Arc<Vec<u8>>> {
        let inner = self.inner.as_ref()?;
        let hit = inner.get(key).await;
        if let Some(metrics) = &self.metrics {
            metrics.record_cache(&key.path, hit.is_some());
        }
        hit
    }

    pub async fn insert(&self, key: CacheKey, body: Vec<u8>) {
        if let Some(inner) = &self.inner {
            inner.insert(key, Arc::new(body)).await;
        }
    }

    /// Current invalidation generation; capture it before issuing a read.
    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::Acquire)
    }

    /// Insert a body read under `generation`, unless an invalidation happened since.
    pub async fn insert_if_current(&self, key: CacheKey, body: Vec<u8>, generation: u64) {
        let Some(inner) = &self.inner else {
            return;
        };
        if self.generation() != generation {
            debug!(path = %key.path, "skipping cache insert for a read older than the last write");
            return;
        }
        inner.insert(key.clone(), Arc::new(body)).await;
        if self.generation() != generation {
            inner.invalidate(&key).await;
        }
    }

    /// Drop every entry whose path starts with `prefix`.
    pub fn invalidate_prefix(&self, prefix: &str) {
        let Some(inner) = &self.inner else {
            return;
        };
        self.generation.fetch_add(1, Ordering::AcqRel);
        let prefix_owned = prefix.to_string();
        // Predicate invalidation only fails when support was not enabled at build time.
        if let Err(e) = inner.invalidate_entries_if(move |key, _| key.path.starts_with(&prefix_owned))
        {
            debug!(error = %e, "predicate invalidation unavailable, clearing cache");
            inner.invalidate_all();
        }
        debug!(prefix, "invalidated cached responses");
    }

    pub fn invalidate_all(&self) {
        if let Some(inner) = &self.inner {
            self.generation.fetch_add(1, Ordering::AcqRel);
            inner.invalidate_all();
            debug!("invalidated all cached responses");
        }
    }

    pub async fn entry_count(&self) -> u64 {
        match &self.inner {
            Some(inner) => {
                inner.run_pending_tasks().await;
                inner.entry_count()
            }
            None => 0,
        }
    }
}

impl Default for ResponseCache {
    fn default() -> Self {
        use lap_config::constants::{DEFAULT_CACHE_CAPACITY, DEFAULT_CACHE_TTL_SECS};
        Self::new(
            DEFAULT_CACHE_CAPACITY,
            Duration::from_secs(DEFAULT_CACHE_TTL_SECS),
        )
    }
}
