//! Axum router wiring.
//!
//! `/metrics/` is also served without the trailing slash.

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::{api, app_state::AppState, ops};

pub fn build_router(state: AppState) -> Router {
    let body_limit = state.cfg().server.max_body_bytes;

    Router::new()
        .route("/metrics/", post(api::metrics::process_metrics))
        .route("/metrics", post(api::metrics::process_metrics))
        .route("/health", get(ops::health))
        .route("/ops/metrics", get(ops::metrics))
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}
