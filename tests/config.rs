//! Configuration loading round-trips.

use request_view::config::validation::{validate_config, ValidationError};
use request_view::ViewConfig;

#[test]
fn toml_round_trip() {
    let config: ViewConfig = toml::from_str("relative_url_root = \"/app\"").unwrap();
    assert_eq!(config.relative_url_root.as_deref(), Some("/app"));

    let serialized = toml::to_string(&config).unwrap();
    let reparsed: ViewConfig = toml::from_str(&serialized).unwrap();
    assert_eq!(
        reparsed.relative_url_root.as_deref(),
        config.relative_url_root.as_deref()
    );
}

#[test]
fn json_deserializes_with_defaults() {
    let config: ViewConfig = serde_json::from_str("{}").unwrap();
    assert!(config.relative_url_root.is_none());

    let config: ViewConfig =
        serde_json::from_str("{\"relative_url_root\": \"/mounted\"}").unwrap();
    assert_eq!(config.relative_url_root.as_deref(), Some("/mounted"));
}

#[test]
fn validation_collects_all_errors() {
    let config = ViewConfig::with_relative_url_root("app/");
    let errors = validate_config(&config).unwrap_err();
    assert_eq!(errors.len(), 2);
    assert!(errors.contains(&ValidationError::RelativeRootNotAbsolute("app/".to_string())));
    assert!(errors.contains(&ValidationError::RelativeRootTrailingSlash("app/".to_string())));
}
