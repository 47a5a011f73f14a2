//! Configuration schema definitions.
//!
//! This module defines the deployment configuration for the request view.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Deployment configuration for request views.
///
/// Built once at application startup and shared (`Arc`) into every view.
/// Immutable after construction, so per-request derivation stays pure.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ViewConfig {
    /// Explicit mount-point prefix under which the application is deployed,
    /// e.g. `"/app"`. When set it replaces auto-detection from the script
    /// path for every request; when unset, detection runs per request and
    /// only for apache-style deployments.
    pub relative_url_root: Option<String>,
}

impl ViewConfig {
    /// Config with an explicit mount-point override.
    pub fn with_relative_url_root(root: impl Into<String>) -> Self {
        Self {
            relative_url_root: Some(root.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ViewConfig::default();
        assert!(config.relative_url_root.is_none());
    }

    #[test]
    fn test_override_constructor() {
        let config = ViewConfig::with_relative_url_root("/app");
        assert_eq!(config.relative_url_root.as_deref(), Some("/app"));
    }
}
