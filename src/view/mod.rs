//! Request view core.
//!
//! # Data Flow
//! ```text
//! transport adapter (environment map, parsed params)
//!     → RequestView::new (one per inbound request)
//!     → routing collaborator calls set_path_parameters once
//!     → accessors derive method / format / remote IP / host / path / params
//!     → view is dropped at end of request processing
//! ```
//!
//! # Design Decisions
//! - Every derivation is synchronous string work over the environment map
//! - Missing headers degrade to documented defaults, never to errors
//! - Memo cells are single-threaded (`Rc`/`RefCell`/`OnceCell`); a view
//!   never crosses threads, matching the one-view-per-request model

mod format;
mod host;
mod method;
mod path;
mod remote_ip;

use std::cell::{OnceCell, RefCell};
use std::rc::Rc;
use std::sync::Arc;

use crate::adapter::RequestAdapter;
use crate::config::ViewConfig;
use crate::env::{keys, Environment};
use crate::params::ParamMap;

pub use format::PostFormat;
pub use method::Verb;

/// Normalized, queryable view over one inbound request.
///
/// Thin derivation layer: the adapter owns the raw request data, the view
/// computes (and memoizes) normalized answers from it.
pub struct RequestView<A: RequestAdapter> {
    adapter: A,
    config: Arc<ViewConfig>,
    path_parameters: ParamMap,

    // Derived caches, invalidated when path parameters change.
    parameters: RefCell<Option<Rc<ParamMap>>>,
    symbolized_path_parameters: RefCell<Option<Rc<ParamMap>>>,
    relative_url_root: OnceCell<Option<String>>,
}

impl<A: RequestAdapter> RequestView<A> {
    /// Create a view with default configuration.
    pub fn new(adapter: A) -> Self {
        Self::with_config(adapter, Arc::new(ViewConfig::default()))
    }

    /// Create a view sharing a deployment config built at startup.
    pub fn with_config(adapter: A, config: Arc<ViewConfig>) -> Self {
        Self {
            adapter,
            config,
            path_parameters: ParamMap::new(),
            parameters: RefCell::new(None),
            symbolized_path_parameters: RefCell::new(None),
            relative_url_root: OnceCell::new(),
        }
    }

    /// The environment map backing this view.
    pub fn env(&self) -> &Environment {
        self.adapter.env()
    }

    /// The deployment config this view was built with.
    pub fn config(&self) -> &ViewConfig {
        &self.config
    }

    /// The host name serving the request, from the adapter.
    pub fn host(&self) -> String {
        self.adapter.host()
    }

    /// Parameters parsed from the query string, from the adapter.
    pub fn query_parameters(&self) -> ParamMap {
        self.adapter.query_parameters()
    }

    /// Parameters parsed from the request body, from the adapter.
    pub fn request_parameters(&self) -> ParamMap {
        self.adapter.request_parameters()
    }

    /// The unparsed request body, for callers speaking XML-RPC or
    /// SOAP-style protocols over POST.
    pub fn raw_post(&self) -> Option<&str> {
        self.env().get(keys::RAW_POST_DATA)
    }

    /// Parameters extracted by URL-pattern routing.
    pub fn path_parameters(&self) -> &ParamMap {
        &self.path_parameters
    }

    /// Install the routed path parameters.
    ///
    /// Called once by the routing collaborator after route resolution;
    /// invalidates the merged-parameters and symbolized caches so the next
    /// read reflects the new mapping.
    pub fn set_path_parameters(&mut self, parameters: ParamMap) {
        self.path_parameters = parameters;
        self.parameters.replace(None);
        self.symbolized_path_parameters.replace(None);
    }

    /// Body, query-string, and path parameters merged into a single map.
    ///
    /// Precedence on key collision: path overrides query overrides body.
    /// Memoized until the path parameters change.
    pub fn parameters(&self) -> Rc<ParamMap> {
        if let Some(cached) = self.parameters.borrow().as_ref() {
            return Rc::clone(cached);
        }

        let mut merged = self.request_parameters();
        merged.merge(&self.query_parameters());
        merged.merge(&self.path_parameters);

        let merged = Rc::new(merged);
        *self.parameters.borrow_mut() = Some(Rc::clone(&merged));
        merged
    }

    /// Path parameters with every key in canonical form. Memoized.
    pub fn symbolized_path_parameters(&self) -> Rc<ParamMap> {
        if let Some(cached) = self.symbolized_path_parameters.borrow().as_ref() {
            return Rc::clone(cached);
        }

        let symbolized = Rc::new(
            self.path_parameters
                .iter()
                .collect::<ParamMap>(),
        );
        *self.symbolized_path_parameters.borrow_mut() = Some(Rc::clone(&symbolized));
        symbolized
    }

    /// Cookies sent with the request, from the adapter.
    pub fn cookies(&self) -> ParamMap {
        self.adapter.cookies()
    }

    /// The session store bound to this request, from the adapter.
    pub fn session(&self) -> ParamMap {
        self.adapter.session()
    }

    /// Abandon the current session, through the adapter.
    pub fn reset_session(&mut self) {
        self.adapter.reset_session();
    }
}
