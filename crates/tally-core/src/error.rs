//! Shared error type across tally crates.

use thiserror::Error;

/// Shared result type.
pub type Result<T> = std::result::Result<T, TallyError>;

/// Unified error type used by the store client and the HTTP layer.
///
/// Absence of a counter is usually modeled as an empty result
/// (`Option::None`), not an error; `NotFound` exists so the HTTP layer can
/// turn an empty result into a 404 response.
#[derive(Debug, Error)]
pub enum TallyError {
    /// The store connection could not be established or has failed.
    #[error("store connection failed: {0}")]
    Connection(String),
    /// Malformed input (bad config value, unusable request data).
    #[error("bad request: {0}")]
    BadRequest(String),
    /// Creation requested for a name that already exists.
    #[error("counter already exists: {0}")]
    Conflict(String),
    /// Requested counter is absent.
    #[error("counter not found: {0}")]
    NotFound(String),
    /// Anything else; the store is the only fallible dependency, so this
    /// surfaces as service-unavailable.
    #[error("internal: {0}")]
    Internal(String),
}

impl TallyError {
    /// HTTP status code for the client-facing response (stable API).
    pub fn status(&self) -> u16 {
        match self {
            TallyError::Connection(_) => 503,
            TallyError::BadRequest(_) => 400,
            TallyError::Conflict(_) => 409,
            TallyError::NotFound(_) => 404,
            TallyError::Internal(_) => 503,
        }
    }

    /// Short reason phrase used in JSON error bodies.
    pub fn reason(&self) -> &'static str {
        match self {
            TallyError::Connection(_) => "Service is unavailable",
            TallyError::BadRequest(_) => "Bad Request",
            TallyError::Conflict(_) => "Conflict",
            TallyError::NotFound(_) => "Not Found",
            TallyError::Internal(_) => "Service is unavailable",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn connection_errors_map_to_503() {
        let err = TallyError::Connection("store unreachable".into());
        assert_eq!(err.status(), 503);
        assert_eq!(err.reason(), "Service is unavailable");
    }

    #[test]
    fn conflict_maps_to_409() {
        let err = TallyError::Conflict("foo".into());
        assert_eq!(err.status(), 409);
        assert_eq!(err.reason(), "Conflict");
    }

    #[test]
    fn display_carries_the_detail() {
        let err = TallyError::NotFound("foo".into());
        assert_eq!(err.to_string(), "counter not found: foo");
    }
}
