//! CORS headers for the shortening endpoint.

use axum::{
    extract::Request,
    http::{HeaderValue, header},
    middleware::Next,
    response::Response,
};

/// Stamps CORS and content-type headers onto every response it wraps.
///
/// Unlike a preflight-only CORS layer, the headers are added to all outcomes
/// (200, 400, 405 and the `OPTIONS` reply) so browser clients can read error
/// bodies too.
///
/// # Headers
///
/// ```text
/// Access-Control-Allow-Origin: *
/// Access-Control-Allow-Methods: POST, GET, OPTIONS
/// Access-Control-Allow-Headers: Content-Type
/// Content-Type: application/json
/// ```
pub async fn layer(req: Request, next: Next) -> Response {
    let mut response = next.run(req).await;

    let headers = response.headers_mut();
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static("*"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static("POST, GET, OPTIONS"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static("Content-Type"),
    );
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("application/json"),
    );

    response
}
