//! Tests for API key accessors

use cellrepair_config::{Config, API_KEY_ENV, API_KEY_URL};

#[test]
fn test_api_key_none_when_empty() {
    let config = Config::default();
    assert_eq!(config.api_key(), None);
    assert!(!config.has_api_key());
}

#[test]
fn test_api_key_returned_when_set() {
    let mut config = Config::default();
    config.collaborate.api_key = "stored-key".to_string();

    assert_eq!(config.api_key(), Some("stored-key".to_string()));
    assert!(config.has_api_key());
}

#[test]
fn test_api_key_cleared() {
    let mut config = Config::default();
    config.collaborate.api_key = "stored-key".to_string();
    config.collaborate.api_key.clear();

    assert_eq!(config.api_key(), None);
}

#[test]
fn test_key_constants() {
    assert_eq!(API_KEY_ENV, "CELLREPAIR_API_KEY");
    assert!(API_KEY_URL.starts_with("https://"));
}
