//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `POST|OPTIONS /shorten` - Shortening endpoint with CORS headers
//! - `GET  /health`          - Store and cache health
//! - `GET  /{code}`          - Short link redirect
//! - anything else           - 404 JSON error
//!
//! `/shorten` and `/health` are static segments and win over `/{code}`;
//! derived codes are 8 hex characters and can never collide with them.
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **CORS** - On `/shorten` only

use crate::api;
use crate::api::handlers::{health_handler, not_found_handler, redirect_handler};
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use axum::routing::get;

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .merge(api::routes::shorten_routes())
        .route("/health", get(health_handler))
        .route("/{code}", get(redirect_handler))
        .fallback(not_found_handler)
        .with_state(state)
        .layer(tracing::layer())
}
