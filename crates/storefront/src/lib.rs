//! Emporium Storefront library.
//!
//! The storefront is a single page backed by HTMX fragments:
//!
//! - Askama templates render the product grid and the cart
//! - Typed UI events go through [`services::Dispatcher`]
//! - The cart is persisted in the browser's session (tower-sessions, stored
//!   in `SQLite` by the binary)
//!
//! [`app`] builds the complete router so the binary and the integration
//! tests serve exactly the same stack.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod db;
pub mod error;
pub mod filters;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;
pub mod views;

use axum::{Router, body::Body, http::Request, routing::get};
use tower_http::{services::ServeDir, trace::TraceLayer};
use tower_sessions::SessionStore;

use state::AppState;

/// Directory static assets (CSS, JS, product images) are served from.
pub const STATIC_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/static");

/// Build the storefront router with its middleware stack, keeping sessions
/// in `session_store`.
///
/// Sentry layers are added by the binary, outside this stack.
pub fn app<S: SessionStore + Clone>(state: AppState, session_store: S) -> Router {
    let session_layer = middleware::create_session_layer(session_store, state.config());

    Router::new()
        .route("/health", get(health))
        .merge(routes::routes())
        .nest_service("/static", ServeDir::new(STATIC_DIR))
        .layer(session_layer)
        .with_state(state)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<Body>| middleware::make_request_span(request)),
        )
        .layer(axum::middleware::from_fn(middleware::request_id_middleware))
}

/// Liveness health check endpoint.
async fn health() -> &'static str {
    "ok"
}
