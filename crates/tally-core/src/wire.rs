//! Client-facing JSON bodies other than the counter itself.

use serde::{Deserialize, Serialize};

use crate::error::TallyError;

/// Structured error body used for every non-2xx response:
/// `{"status": 503, "error": "Service is unavailable", "message": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub status: u16,
    pub error: String,
    pub message: String,
}

impl ErrorBody {
    pub fn new(status: u16, error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            status,
            error: error.into(),
            message: message.into(),
        }
    }
}

impl From<&TallyError> for ErrorBody {
    fn from(err: &TallyError) -> Self {
        Self::new(err.status(), err.reason(), err.to_string())
    }
}

/// `GET /health` body, independent of store reachability.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthBody {
    pub status: String,
}

impl HealthBody {
    pub fn ok() -> Self {
        Self {
            status: "OK".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]

    use super::*;

    #[test]
    fn error_body_from_store_failure() {
        let err = TallyError::Connection("connection refused".into());
        let body = ErrorBody::from(&err);
        assert_eq!(body.status, 503);
        assert_eq!(body.error, "Service is unavailable");
        assert!(body.message.contains("connection refused"));
    }

    #[test]
    fn health_body_shape() {
        let json = serde_json::to_value(HealthBody::ok()).expect("serialize");
        assert_eq!(json, serde_json::json!({"status": "OK"}));
    }
}
