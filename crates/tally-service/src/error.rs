//! HTTP mapping for service errors.
//!
//! Store-layer failures are never left to crash a worker: every
//! [`TallyError`] flowing out of a handler is turned into a response with
//! the structured body `{"status", "error", "message"}`.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::error;

use tally_core::error::TallyError;
use tally_core::wire::ErrorBody;

/// Wrapper so store-layer errors can flow out of handlers with `?`.
#[derive(Debug)]
pub struct ApiError(pub TallyError);

impl From<TallyError> for ApiError {
    fn from(err: TallyError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let err = self.0;
        error!(error = %err, "request failed");
        let status =
            StatusCode::from_u16(err.status()).unwrap_or(StatusCode::SERVICE_UNAVAILABLE);
        (status, Json(ErrorBody::from(&err))).into_response()
    }
}
