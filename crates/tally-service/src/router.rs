//! Axum router wiring.
//!
//! Known path + wrong verb answers 405 via axum's method routing;
//! unmatched paths fall through to the JSON 404 handler.

use axum::routing::get;
use axum::Router;

use crate::{app_state::AppState, resources};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(resources::index))
        .route("/health", get(resources::health))
        .route("/counters", get(resources::list_counters))
        .route(
            "/counters/:name",
            get(resources::read_counter)
                .post(resources::create_counter)
                .put(resources::update_counter)
                .delete(resources::delete_counter),
        )
        .fallback(resources::not_found_fallback)
        .with_state(state)
}
