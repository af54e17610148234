//! API route configuration.

use crate::api::handlers::{
    shorten_handler, shorten_method_not_allowed_handler, shorten_preflight_handler,
};
use crate::api::middleware::cors;
use crate::state::AppState;
use axum::{Router, middleware, routing::post};

/// The shortening endpoint, wrapped in CORS headers.
///
/// # Endpoints
///
/// - `POST    /shorten` - Create a short URL
/// - `OPTIONS /shorten` - CORS preflight (empty 200)
/// - any other method   - 405 Method Not Allowed
///
/// The CORS layer sits on the method router itself so the 405 fallback is
/// covered as well.
pub fn shorten_routes() -> Router<AppState> {
    Router::new().route(
        "/shorten",
        post(shorten_handler)
            .options(shorten_preflight_handler)
            .fallback(shorten_method_not_allowed_handler)
            .layer(middleware::from_fn(cors::layer)),
    )
}
