//! Test helpers for the LAP client.
//!
//! Available when running tests or when the `test-utils` feature is enabled.
//! Fixtures are JSON captures of API responses stored under `fixtures/`.

use std::path::Path;

use crate::client::LapClient;

/// Load a JSON fixture file from the fixtures directory.
///
/// # Panics
/// - If the fixture file cannot be read
/// - If the file content is not valid JSON
pub fn load_fixture(fixture_path: &str) -> serde_json::Value {
    let full_path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("fixtures")
        .join(fixture_path);
    let content = std::fs::read_to_string(&full_path)
        .unwrap_or_else(|_| panic!("Failed to load fixture: {}", full_path.display()));
    serde_json::from_str(&content).expect("Invalid JSON in fixture")
}

/// A client pointed at `base_url` with caching and retries disabled, so every
/// call reaches the mock server exactly once.
pub fn uncached_client(base_url: &str) -> LapClient {
    LapClient::builder()
        .base_url(base_url.to_string())
        .cache_ttl(std::time::Duration::ZERO)
        .max_retries(0)
        .build()
        .expect("mock server URL is valid")
}
