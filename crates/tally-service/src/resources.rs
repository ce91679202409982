//! Counter resource handlers.
//!
//! Each handler is one store round trip plus status mapping. The store is
//! the source of truth; nothing is cached in-process.

use axum::extract::{Path, State};
use axum::http::{header, StatusCode, Uri};
use axum::response::{Html, IntoResponse, Response};
use axum::Json;
use tracing::info;

use tally_core::error::TallyError;
use tally_core::wire::{ErrorBody, HealthBody};
use tally_core::Counter;

use crate::app_state::AppState;
use crate::error::ApiError;

static INDEX_HTML: &str = include_str!("../static/index.html");

/// GET / - landing page.
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// GET /health - liveness, independent of store reachability.
pub async fn health() -> Json<HealthBody> {
    Json(HealthBody::ok())
}

/// GET /counters - every counter currently in the store.
pub async fn list_counters(
    State(state): State<AppState>,
) -> Result<Json<Vec<Counter>>, ApiError> {
    info!("request to list counters");
    let counters = state.store()?.list_all().await?;
    Ok(Json(counters))
}

/// GET /counters/{name} - 404 if absent.
pub async fn read_counter(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<Counter>, ApiError> {
    info!(%name, "request to read counter");
    let counter = state
        .store()?
        .find(&name)
        .await?
        .ok_or(TallyError::NotFound(name))?;
    Ok(Json(counter))
}

/// POST /counters/{name} - create at zero. Never overwrites: an existing
/// name answers 409 and the stored value is left untouched.
pub async fn create_counter(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Response, ApiError> {
    info!(%name, "request to create counter");
    let store = state.store()?;
    if store.find(&name).await?.is_some() {
        return Err(TallyError::Conflict(name).into());
    }
    store.set(&name, 0).await?;

    let location = format!("/counters/{name}");
    let counter = Counter::new(name);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(counter),
    )
        .into_response())
}

/// PUT /counters/{name} - increment an existing counter; 404 if absent.
pub async fn update_counter(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<Counter>, ApiError> {
    info!(%name, "request to increment counter");
    let store = state.store()?;
    if store.find(&name).await?.is_none() {
        return Err(TallyError::NotFound(name).into());
    }
    let value = store.increment(&name).await?;
    Ok(Json(Counter::with_value(name, value)))
}

/// DELETE /counters/{name} - idempotent: 204 whether or not it existed.
pub async fn delete_counter(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<StatusCode, ApiError> {
    info!(%name, "request to delete counter");
    let store = state.store()?;
    if store.find(&name).await?.is_some() {
        store.delete(&name).await?;
    }
    Ok(StatusCode::NO_CONTENT)
}

/// Fallback for unmatched paths: same JSON body shape as every other
/// error response.
pub async fn not_found_fallback(uri: Uri) -> Response {
    let body = ErrorBody::new(404, "Not Found", format!("no route for {uri}"));
    (StatusCode::NOT_FOUND, Json(body)).into_response()
}
