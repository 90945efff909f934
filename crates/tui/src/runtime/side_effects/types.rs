//! Shared types for side effect handlers.

use std::sync::Arc;

use lap_client::LapClient;

/// Shared client handle for async tasks.
///
/// `LapClient` only needs `&self` for requests, so tasks share it without a lock.
pub type SharedClient = Arc<LapClient>;
