//! HTTP router and handlers.

use crate::app::AppState;
use axum::{Router, extract::DefaultBodyLimit, routing::post};

pub mod log;

/// Assemble the HTTP router. `/log` is the only route; its body size is
/// not capped.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/log", post(log::ingest_log))
        .layer(DefaultBodyLimit::disable())
        .with_state(state)
}
