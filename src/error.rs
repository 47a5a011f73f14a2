//! Error definitions for request derivation.

use thiserror::Error;

/// Errors surfaced by the request view.
///
/// Most derivations degrade to documented defaults instead of failing;
/// only policies a caller opts into can error.
#[derive(Debug, Error)]
pub enum RequestError {
    /// The request method is not one of the known HTTP verbs.
    /// Returned only by [`crate::view::Verb::require_known`]; the
    /// permissive accessors pass unknown verbs through.
    #[error("unrecognized HTTP verb: {0}")]
    UnrecognizedVerb(String),
}

/// Result type for request derivation operations.
pub type RequestResult<T> = Result<T, RequestError>;
