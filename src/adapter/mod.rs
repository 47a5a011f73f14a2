//! Transport collaborator interface.
//!
//! # Responsibilities
//! - Define the capability set a concrete transport must supply
//! - Provide a map-backed harness implementation for tests
//!
//! # Design Decisions
//! - The view core never parses wire data; the adapter hands it decoded
//!   strings and pre-parsed parameter maps
//! - One trait covers both production transports and test harnesses
//! - Session and cookie stores are pass-through contract surface only

use crate::env::Environment;
use crate::params::ParamMap;

/// Capability set supplied by a concrete request transport.
///
/// A production adapter wraps the server's native request type; the
/// [`StaticRequest`] harness backs the same surface with plain maps.
pub trait RequestAdapter {
    /// The environment map for this request.
    fn env(&self) -> &Environment;

    /// The host name serving the request, without a port.
    fn host(&self) -> String;

    /// Parameters parsed from the query string.
    fn query_parameters(&self) -> ParamMap;

    /// Parameters parsed from the request body.
    fn request_parameters(&self) -> ParamMap;

    /// Cookies sent with the request.
    fn cookies(&self) -> ParamMap;

    /// The session store bound to this request.
    fn session(&self) -> ParamMap;

    /// Abandon the current session.
    fn reset_session(&mut self);
}

/// Map-backed request adapter.
///
/// Used by this crate's own tests and by downstream test suites; every
/// capability is a plain field set up front.
#[derive(Debug, Clone, Default)]
pub struct StaticRequest {
    env: Environment,
    host: String,
    query: ParamMap,
    body: ParamMap,
    cookies: ParamMap,
    session: ParamMap,
}

impl StaticRequest {
    /// Create a harness around an environment map.
    pub fn new(env: Environment) -> Self {
        Self {
            env,
            ..Self::default()
        }
    }

    /// Set the host name.
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    /// Set the parsed query-string parameters.
    pub fn with_query_parameters(mut self, query: ParamMap) -> Self {
        self.query = query;
        self
    }

    /// Set the parsed body parameters.
    pub fn with_request_parameters(mut self, body: ParamMap) -> Self {
        self.body = body;
        self
    }

    /// Set the request cookies.
    pub fn with_cookies(mut self, cookies: ParamMap) -> Self {
        self.cookies = cookies;
        self
    }

    /// Set the session contents.
    pub fn with_session(mut self, session: ParamMap) -> Self {
        self.session = session;
        self
    }
}

impl RequestAdapter for StaticRequest {
    fn env(&self) -> &Environment {
        &self.env
    }

    fn host(&self) -> String {
        self.host.clone()
    }

    fn query_parameters(&self) -> ParamMap {
        self.query.clone()
    }

    fn request_parameters(&self) -> ParamMap {
        self.body.clone()
    }

    fn cookies(&self) -> ParamMap {
        self.cookies.clone()
    }

    fn session(&self) -> ParamMap {
        self.session.clone()
    }

    fn reset_session(&mut self) {
        self.session = ParamMap::new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::keys;

    #[test]
    fn test_static_request_surfaces() {
        let env = Environment::from_iter([(keys::REQUEST_METHOD, "GET")]);
        let adapter = StaticRequest::new(env)
            .with_host("example.com")
            .with_query_parameters(ParamMap::from_iter([("q", "1")]))
            .with_cookies(ParamMap::from_iter([("token", "abc")]));

        assert_eq!(adapter.env().get(keys::REQUEST_METHOD), Some("GET"));
        assert_eq!(adapter.host(), "example.com");
        assert_eq!(adapter.query_parameters().get("q"), Some("1"));
        assert_eq!(adapter.cookies().get("token"), Some("abc"));
    }

    #[test]
    fn test_reset_session_clears_store() {
        let mut adapter = StaticRequest::new(Environment::new())
            .with_session(ParamMap::from_iter([("user_id", "7")]));
        assert_eq!(adapter.session().get("user_id"), Some("7"));

        adapter.reset_session();
        assert!(adapter.session().is_empty());
    }
}
