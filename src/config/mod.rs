//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → ViewConfig (validated, immutable)
//!     → shared via Arc to every RequestView
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; it carries deployment-constant values
//!   (the mount-point override) so no request ever recomputes or mutates them
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::ViewConfig;
