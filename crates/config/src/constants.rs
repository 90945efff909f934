//! Centralized constants for the LAP workspace.
//!
//! Defaults shared by the client, CLI, and TUI live here so that every
//! front end agrees on page sizes, thresholds, and timeouts.

// =============================================================================
// Connection & Timeout Defaults
// =============================================================================

/// Base URL used when neither `LAP_API_URL` nor a CLI flag is provided.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Default HTTP request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Maximum allowed request timeout in seconds (10 minutes).
pub const MAX_TIMEOUT_SECS: u64 = 600;

/// Default number of automatic retries for failed requests.
///
/// One retry at the transport layer, matching the dashboard's query client.
pub const DEFAULT_MAX_RETRIES: usize = 1;

/// Upper bound accepted for `LAP_MAX_RETRIES`.
pub const MAX_MAX_RETRIES: usize = 10;

/// Base delay for exponential retry backoff in milliseconds.
pub const DEFAULT_RETRY_BACKOFF_MS: u64 = 200;

/// Default maximum number of HTTP redirects to follow.
pub const DEFAULT_MAX_REDIRECTS: usize = 5;

// =============================================================================
// Response Cache
// =============================================================================

/// Default TTL for cached GET responses in seconds. Zero disables caching.
pub const DEFAULT_CACHE_TTL_SECS: u64 = 30;

/// Default number of cached responses.
pub const DEFAULT_CACHE_CAPACITY: u64 = 100;

// =============================================================================
// Listing
// =============================================================================

/// Default page size for paginated list endpoints.
pub const DEFAULT_PER_PAGE: u32 = 20;

/// Largest page size the backend accepts.
pub const MAX_PER_PAGE: u32 = 100;

/// Number of suppliers requested for the Fornecedores page.
pub const DEFAULT_TOP_FORNECEDORES: u32 = 50;

/// Months of price history requested by default.
pub const DEFAULT_PRICE_HISTORY_MONTHS: u32 = 24;

/// Number of monthly buckets shown on the dashboard chart.
pub const DASHBOARD_MONTHS_SHOWN: usize = 12;

/// Bars shown on the top suppliers chart.
pub const TOP_FORNECEDORES_CHART_LEN: usize = 10;

/// Maximum characters kept from a supplier name on chart labels.
pub const CHART_LABEL_MAX_CHARS: usize = 20;

// =============================================================================
// Municipality distance filter
// =============================================================================

pub const MIN_DISTANCE_KM: u32 = 50;
pub const MAX_DISTANCE_KM: u32 = 200;
pub const DISTANCE_STEP_KM: u32 = 10;

// =============================================================================
// Map
// =============================================================================

/// Map center (Goiânia) as (latitude, longitude).
pub const MAP_DEFAULT_CENTER: (f64, f64) = (-16.6869, -49.2648);

/// Marker is green below this total value (BRL).
pub const MAP_VALUE_LOW: f64 = 1_000_000.0;

/// Marker is yellow below this total value (BRL), red at or above it.
pub const MAP_VALUE_HIGH: f64 = 10_000_000.0;

pub const MAP_MIN_RADIUS: f64 = 5.0;
pub const MAP_MAX_RADIUS: f64 = 30.0;

// =============================================================================
// Score thresholds
// =============================================================================

/// Scores at or above this are "high" risk / "good" governance.
pub const SCORE_HIGH_THRESHOLD: f64 = 70.0;

/// Scores at or above this (and below the high mark) are "medium".
pub const SCORE_MEDIUM_THRESHOLD: f64 = 50.0;

// =============================================================================
// TUI
// =============================================================================

/// Capacity of the TUI action channel.
pub const DEFAULT_CHANNEL_CAPACITY: usize = 256;

/// Tick interval driving the spinner and search debounce, in milliseconds.
pub const DEFAULT_TICK_MS: u64 = 100;

/// Idle time after the last keystroke before a search filter is applied.
pub const DEFAULT_SEARCH_DEBOUNCE_MS: u64 = 300;

/// Seconds a toast notification stays visible.
pub const DEFAULT_TOAST_SECS: u64 = 5;
