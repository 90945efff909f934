//! Metrics collection for API calls.
//!
//! Records request counts, latencies, retries, errors, and cache hits through the
//! `metrics` facade. Recording is a no-op unless the binary installs a recorder.
//!
//! # Invariants
//! - Labels are always `endpoint`, `method`, and where relevant `status` or `error_category`.
//! - Recording never fails and never affects the request outcome.

use std::time::Duration;

use crate::error::ClientError;

pub const METRIC_REQUEST_DURATION: &str = "lap_api_request_duration_seconds";
pub const METRIC_REQUESTS_TOTAL: &str = "lap_api_requests_total";
pub const METRIC_RETRIES_TOTAL: &str = "lap_api_retries_total";
pub const METRIC_ERRORS_TOTAL: &str = "lap_api_errors_total";
pub const METRIC_CACHE_HITS: &str = "lap_api_cache_hits_total";
pub const METRIC_CACHE_MISSES: &str = "lap_api_cache_misses_total";

/// Error categories used as the `error_category` label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Transport,
    Http4xx,
    Http5xx,
    Timeout,
    Decode,
    Unknown,
}

impl ErrorCategory {
    pub const fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::Transport => "transport",
            ErrorCategory::Http4xx => "http_4xx",
            ErrorCategory::Http5xx => "http_5xx",
            ErrorCategory::Timeout => "timeout",
            ErrorCategory::Decode => "decode",
            ErrorCategory::Unknown => "unknown",
        }
    }
}

impl From<&ClientError> for ErrorCategory {
    fn from(error: &ClientError) -> Self {
        match error {
            ClientError::Timeout(_) => ErrorCategory::Timeout,
            ClientError::HttpError(e) if e.is_timeout() => ErrorCategory::Timeout,
            ClientError::HttpError(e) if e.is_connect() => ErrorCategory::Transport,
            ClientError::NotFound(_) => ErrorCategory::Http4xx,
            ClientError::ApiError { status, .. } if (400..500).contains(status) => {
                ErrorCategory::Http4xx
            }
            ClientError::ApiError { status, .. } if (500..600).contains(status) => {
                ErrorCategory::Http5xx
            }
            ClientError::InvalidResponse(_) => ErrorCategory::Decode,
            ClientError::MaxRetriesExceeded(_, inner) => ErrorCategory::from(inner.as_ref()),
            _ => ErrorCategory::Unknown,
        }
    }
}

/// Records API call metrics when enabled.
#[derive(Debug, Clone, Default)]
pub struct MetricsCollector {
    enabled: bool,
}

impl MetricsCollector {
    pub fn new() -> Self {
        Self { enabled: true }
    }

    pub fn disabled() -> Self {
        Self { enabled: false }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn record_request(&self, endpoint: &str, method: &str) {
        if !self.enabled {
            return;
        }
        metrics::counter!(METRIC_REQUESTS_TOTAL,
            "endpoint" => endpoint.to_string(),
            "method" => method.to_string(),
        )
        .increment(1);
    }

    pub fn record_request_duration(
        &self,
        endpoint: &str,
        method: &str,
        duration: Duration,
        status: Option<u16>,
    ) {
        if !self.enabled {
            return;
        }
        let status_label = status.map_or_else(|| "error".to_string(), |s| s.to_string());
        metrics::histogram!(METRIC_REQUEST_DURATION,
            "endpoint" => endpoint.to_string(),
            "method" => method.to_string(),
            "status" => status_label,
        )
        .record(duration.as_secs_f64());
    }

    pub fn record_retry(&self, endpoint: &str, method: &str, attempt: usize) {
        if !self.enabled {
            return;
        }
        metrics::counter!(METRIC_RETRIES_TOTAL,
            "endpoint" => endpoint.to_string(),
            "method" => method.to_string(),
            "attempt" => attempt.to_string(),
        )
        .increment(1);
    }

    pub fn record_error(&self, endpoint: &str, method: &str, error: &ClientError) {
        if !self.enabled {
            return;
        }
        metrics::counter!(METRIC_ERRORS_TOTAL,
            "endpoint" => endpoint.to_string(),
            "method" => method.to_string(),
            "error_category" => ErrorCategory::from(error).as_str(),
        )
        .increment(1);
    }

    pub fn record_cache(&self, endpoint: &str, hit: bool) {
        if !self.enabled {
            return;
        }
        let name = if hit {
            METRIC_CACHE_HITS
        } else {
            METRIC_CACHE_MISSES
        };
        metrics::counter!(name, "endpoint" => endpoint.to_string()).increment(1);
    }
}
