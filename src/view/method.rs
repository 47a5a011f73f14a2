//! HTTP verb classification.

use crate::adapter::RequestAdapter;
use crate::env::keys;
use crate::error::{RequestError, RequestResult};

use super::RequestView;

/// HTTP request verb, case-normalized.
///
/// Unlisted verbs are carried in [`Verb::Other`] so new methods pass
/// through without a code change; callers that treat them as errors use
/// [`Verb::require_known`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verb {
    Get,
    Post,
    Put,
    Delete,
    Head,
    Other(String),
}

impl Verb {
    /// Classify a raw request-method string, normalizing case.
    pub fn parse(raw: &str) -> Self {
        match raw.to_ascii_lowercase().as_str() {
            "get" => Verb::Get,
            "post" => Verb::Post,
            "put" => Verb::Put,
            "delete" => Verb::Delete,
            "head" => Verb::Head,
            other => Verb::Other(other.to_string()),
        }
    }

    /// The lower-cased verb name.
    pub fn as_str(&self) -> &str {
        match self {
            Verb::Get => "get",
            Verb::Post => "post",
            Verb::Put => "put",
            Verb::Delete => "delete",
            Verb::Head => "head",
            Verb::Other(name) => name,
        }
    }

    /// Reject unlisted verbs, for callers whose dispatch layer treats
    /// unknown methods as routing failures.
    pub fn require_known(self) -> RequestResult<Self> {
        match self {
            Verb::Other(name) => Err(RequestError::UnrecognizedVerb(name)),
            known => Ok(known),
        }
    }
}

impl std::fmt::Display for Verb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<A: RequestAdapter> RequestView<A> {
    /// The request method as a case-normalized verb.
    pub fn method(&self) -> Verb {
        Verb::parse(self.env().get(keys::REQUEST_METHOD).unwrap_or(""))
    }

    /// Is this a GET request?
    pub fn is_get(&self) -> bool {
        self.method() == Verb::Get
    }

    /// Is this a POST request?
    pub fn is_post(&self) -> bool {
        self.method() == Verb::Post
    }

    /// Is this a PUT request?
    pub fn is_put(&self) -> bool {
        self.method() == Verb::Put
    }

    /// Is this a DELETE request?
    pub fn is_delete(&self) -> bool {
        self.method() == Verb::Delete
    }

    /// Is this a HEAD request?
    pub fn is_head(&self) -> bool {
        self.method() == Verb::Head
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::StaticRequest;
    use crate::env::Environment;

    fn view_with_method(method: &str) -> RequestView<StaticRequest> {
        let env = Environment::from_iter([(keys::REQUEST_METHOD, method)]);
        RequestView::new(StaticRequest::new(env))
    }

    #[test]
    fn test_method_case_normalized() {
        for raw in ["post", "POST", "Post"] {
            let view = view_with_method(raw);
            assert_eq!(view.method(), Verb::Post);
            assert!(view.is_post());
            assert!(!view.is_get());
        }
    }

    #[test]
    fn test_known_verbs() {
        assert_eq!(Verb::parse("GET"), Verb::Get);
        assert_eq!(Verb::parse("PUT"), Verb::Put);
        assert_eq!(Verb::parse("DELETE"), Verb::Delete);
        assert_eq!(Verb::parse("HEAD"), Verb::Head);
    }

    #[test]
    fn test_unknown_verb_passes_through() {
        let view = view_with_method("PROPFIND");
        assert_eq!(view.method(), Verb::Other("propfind".to_string()));
        assert_eq!(view.method().as_str(), "propfind");
    }

    #[test]
    fn test_require_known() {
        assert!(Verb::parse("get").require_known().is_ok());
        let err = Verb::parse("brew").require_known().unwrap_err();
        assert_eq!(err.to_string(), "unrecognized HTTP verb: brew");
    }

    #[test]
    fn test_display() {
        assert_eq!(Verb::Delete.to_string(), "delete");
    }
}
