//! HTTP request abstraction layer.
//!
//! Derives a normalized, queryable view of one inbound request from the
//! raw server environment map a transport adapter supplies.
//!
//! # Architecture Overview
//!
//! ```text
//! transport adapter ──▶ Environment map + parsed params
//!                            │
//!                            ▼
//!                      RequestView (one per request)
//!                            │
//!        ┌──────────┬────────┼─────────┬───────────┐
//!        ▼          ▼        ▼         ▼           ▼
//!      method   post format  remote IP  host/port   path/params
//!    (verbs)   (body class)  (proxy     (domain,    (mount point,
//!                             trust)    protocol)   merged params)
//! ```
//!
//! Session storage, cookie jars, body parsing and routing are external
//! collaborators reached through the [`adapter::RequestAdapter`] trait;
//! this crate only derives answers from what they hand it.

// Core derivation
pub mod env;
pub mod params;
pub mod view;

// Collaborator boundary
pub mod adapter;

// Cross-cutting concerns
pub mod config;
pub mod error;

pub use adapter::{RequestAdapter, StaticRequest};
pub use config::ViewConfig;
pub use env::Environment;
pub use error::{RequestError, RequestResult};
pub use params::ParamMap;
pub use view::{PostFormat, RequestView, Verb};
