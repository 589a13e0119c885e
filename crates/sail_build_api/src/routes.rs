//! HTTP routing configuration
//!
//! Two routes, matching the public contract:
//!
//! - GET /        - 302 redirect to the documentation
//! - GET /{name}  - render the install script

use axum::{routing::get, Router};
use std::time::Duration;
use tower_http::{
    timeout::TimeoutLayer,
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};

use crate::{handlers, AppState};

#[cfg(test)]
#[path = "routes_tests.rs"]
mod tests;

/// Create the complete router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    // Configure request tracing
    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new())
        .on_response(DefaultOnResponse::new());

    // Script rendering is pure computation; the timeout only guards against
    // stuck connections.
    let timeout_layer = TimeoutLayer::new(Duration::from_secs(10));

    Router::new()
        .route("/", get(handlers::docs_redirect))
        .route("/:name", get(handlers::render_script))
        .layer(timeout_layer)
        .layer(trace_layer)
        .with_state(state)
}
