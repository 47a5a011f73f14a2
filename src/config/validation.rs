//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check the mount-point override is a usable URL prefix
//!
//! # Design Decisions
//! - Returns all validation errors, not just the first
//! - Validation is a pure function: ViewConfig → Result<(), Vec<ValidationError>>
//! - Runs before the config is accepted into the system

use thiserror::Error;

use crate::config::schema::ViewConfig;

/// A single semantic problem found in a config.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// The mount-point override must be empty or start with `/`.
    #[error("relative_url_root must be empty or start with '/', got {0:?}")]
    RelativeRootNotAbsolute(String),

    /// A trailing slash would make prefix-length stripping eat into the path.
    #[error("relative_url_root must not end with '/', got {0:?}")]
    RelativeRootTrailingSlash(String),
}

/// Validate a config, collecting every error.
pub fn validate_config(config: &ViewConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if let Some(root) = config.relative_url_root.as_deref() {
        if !root.is_empty() && !root.starts_with('/') {
            errors.push(ValidationError::RelativeRootNotAbsolute(root.to_string()));
        }
        if root.len() > 1 && root.ends_with('/') {
            errors.push(ValidationError::RelativeRootTrailingSlash(root.to_string()));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(validate_config(&ViewConfig::default()).is_ok());
    }

    #[test]
    fn test_valid_override() {
        let config = ViewConfig::with_relative_url_root("/app");
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_empty_override_is_valid() {
        let config = ViewConfig::with_relative_url_root("");
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_relative_root_rejected() {
        let config = ViewConfig::with_relative_url_root("app");
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(
            errors,
            vec![ValidationError::RelativeRootNotAbsolute("app".to_string())]
        );
    }

    #[test]
    fn test_trailing_slash_rejected() {
        let config = ViewConfig::with_relative_url_root("/app/");
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(
            errors,
            vec![ValidationError::RelativeRootTrailingSlash("/app/".to_string())]
        );
    }
}
