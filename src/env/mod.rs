//! Server environment map.
//!
//! # Responsibilities
//! - Hold the transport-supplied key/value snapshot of one request
//! - Provide read-only, by-name access to headers and server metadata
//! - Define the well-known environment key names
//!
//! # Design Decisions
//! - The map is immutable after construction; derivations never write to it
//! - Missing keys are `None`, never an error (malformed requests are routine)
//! - Values are already-decoded strings; no wire parsing happens here

use std::collections::HashMap;

/// Well-known environment keys, CGI-style.
pub mod keys {
    /// Raw HTTP request method, e.g. `"GET"`.
    pub const REQUEST_METHOD: &str = "REQUEST_METHOD";
    /// Direct peer address of the connection.
    pub const REMOTE_ADDR: &str = "REMOTE_ADDR";
    /// Content-Type header of the request body.
    pub const CONTENT_TYPE: &str = "CONTENT_TYPE";
    /// Client IP set by a trusted proxy; overrides all other IP sources.
    pub const HTTP_CLIENT_IP: &str = "HTTP_CLIENT_IP";
    /// Comma-separated proxy chain, closest-to-client first.
    pub const HTTP_X_FORWARDED_FOR: &str = "HTTP_X_FORWARDED_FOR";
    /// Set to `"XMLHttpRequest"` by browser ajax libraries.
    pub const HTTP_X_REQUESTED_WITH: &str = "HTTP_X_REQUESTED_WITH";
    /// Legacy body-format override header.
    pub const HTTP_X_POST_DATA_FORMAT: &str = "HTTP_X_POST_DATA_FORMAT";
    /// `"on"` when the request arrived over SSL.
    pub const HTTPS: &str = "HTTPS";
    /// Port the server accepted the request on.
    pub const SERVER_PORT: &str = "SERVER_PORT";
    /// Server software identification string, e.g. `"Apache/2.4.57"`.
    pub const SERVER_SOFTWARE: &str = "SERVER_SOFTWARE";
    /// Path to the dispatching script within the server namespace.
    pub const SCRIPT_NAME: &str = "SCRIPT_NAME";
    /// Path portion of the URL as seen by the server.
    pub const PATH_INFO: &str = "PATH_INFO";
    /// Raw query string, without the leading `?`.
    pub const QUERY_STRING: &str = "QUERY_STRING";
    /// Unparsed request body.
    pub const RAW_POST_DATA: &str = "RAW_POST_DATA";
    /// Explicit Host header, possibly including a port.
    pub const HTTP_HOST: &str = "HTTP_HOST";
    /// Full request URI; some servers embed the absolute `scheme://host` form.
    pub const REQUEST_URI: &str = "REQUEST_URI";
}

/// Immutable snapshot of one request's environment.
#[derive(Debug, Clone, Default)]
pub struct Environment {
    vars: HashMap<String, String>,
}

impl Environment {
    /// Create an empty environment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a value by key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }

    /// Returns true if the key is present, even with an empty value.
    pub fn contains(&self, key: &str) -> bool {
        self.vars.contains_key(key)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.vars.len()
    }

    /// Returns true if no entries are present.
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for Environment
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
