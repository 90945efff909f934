//! Shared helpers for the client integration tests.
//!
//! Fixtures are loaded from `fixtures/` relative to the crate root. Mock servers
//! are set up with wiremock directly in each test.

#[allow(unused_imports)]
pub use lap_client::testing::{load_fixture, uncached_client};
#[allow(unused_imports)]
pub use lap_client::{ClientError, LapClient, ListEvent, ListQuery};
#[allow(unused_imports)]
pub use wiremock::{Mock, MockServer, ResponseTemplate};

/// A caching client with retries disabled.
#[allow(dead_code)]
pub fn cached_client(base_url: &str) -> LapClient {
    LapClient::builder()
        .base_url(base_url.to_string())
        .max_retries(0)
        .build()
        .expect("mock server URL is valid")
}

/// Requests received by the mock server whose path equals `p`.
#[allow(dead_code)]
pub async fn requests_to(server: &MockServer, p: &str) -> Vec<wiremock::Request> {
    server
        .received_requests()
        .await
        .unwrap_or_default()
        .into_iter()
        .filter(|r| r.url.path() == p)
        .collect()
}
