/**
 * Router Configuration
 *
 * This module provides the main router creation function that combines
 * all route configurations into a single Axum router.
 *
 * # Route Order
 *
 * 1. `/api/...` - JSON API, with its own 404 fallback
 * 2. Everything else - files from the static directory, falling back to
 *    `index.html` so the frontend's client-side routes load
 *
 * Every request passes through `TraceLayer`, which logs method, path,
 * status and latency.
 */

use axum::Router;
use tower_http::{
    services::{ServeDir, ServeFile},
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use crate::backend::routes::api_routes::api_routes;
use crate::backend::server::state::AppState;

/// Create the Axum router with all routes configured
pub fn create_router(app_state: AppState) -> Router<()> {
    let static_dir = app_state.config.static_dir.clone();
    let index = static_dir.join("index.html");
    tracing::info!("Serving frontend from {}", static_dir.display());

    let frontend = ServeDir::new(&static_dir).fallback(ServeFile::new(index));

    Router::new()
        .nest("/api", api_routes(app_state.clone()))
        .fallback_service(frontend)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .with_state(app_state)
}
