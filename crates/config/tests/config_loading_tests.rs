//! Integration tests for configuration loading through the public API.

use std::time::Duration;

use lap_config::{Config, ConfigError, ConfigLoader, constants};
use proptest::prelude::*;

#[test]
fn test_loader_chain_used_by_frontends() {
    let config = ConfigLoader::new()
        .with_base_url("http://127.0.0.1:8000/".to_string())
        .with_timeout(Duration::from_secs(10))
        .build()
        .expect("config should build");

    assert_eq!(config.connection.base_url, "http://127.0.0.1:8000");
    assert_eq!(config.connection.max_retries, constants::DEFAULT_MAX_RETRIES);
}

#[test]
fn test_invalid_url_error_mentions_url() {
    let err = ConfigLoader::new()
        .with_base_url("mailto:someone@example.com".to_string())
        .build()
        .unwrap_err();

    assert!(matches!(err, ConfigError::InvalidBaseUrl { .. }));
    assert!(err.to_string().contains("mailto:someone@example.com"));
}

#[test]
fn test_config_default_matches_constants() {
    let config = Config::default();
    assert_eq!(config.connection.base_url, constants::DEFAULT_BASE_URL);
    assert_eq!(config.list.per_page, constants::DEFAULT_PER_PAGE);
}

proptest! {
    #[test]
    fn normalized_urls_never_end_with_slash(
        port in 1u16..=65535,
        segments in proptest::collection::vec("[a-z]{1,8}", 0..3),
        trailing in 0usize..3,
    ) {
        let mut raw = format!("http://api.local:{port}");
        for s in &segments {
            raw.push('/');
            raw.push_str(s);
        }
        raw.push_str(&"/".repeat(trailing));

        let config = ConfigLoader::new().with_base_url(raw).build().unwrap();
        prop_assert!(!config.connection.base_url.ends_with('/'));
        prop_assert!(config.connection.base_url.starts_with("http://api.local"));
    }
}
