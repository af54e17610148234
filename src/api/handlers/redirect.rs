//! Handler for short URL redirect.

use axum::{
    extract::{Path, State, rejection::PathRejection},
    http::{HeaderValue, StatusCode, Uri, header},
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// # Request Flow
///
/// 1. Check the in-process cache
/// 2. On cache miss, query the store (if connected) and cache the hit
/// 3. Return 302 Found with `Location` set to the original URL
///
/// # Errors
///
/// Returns 404 Not Found if the short code is unknown, including paths whose
/// segment does not percent-decode to UTF-8.
/// Returns 500 if the stored URL cannot be sent as a `Location` header.
pub async fn redirect_handler(
    path: Result<Path<String>, PathRejection>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    let Path(code) = path.map_err(|e| {
        AppError::not_found("URL not found", json!({ "reason": e.body_text() }))
    })?;

    let record = state.resolve_service.resolve(&code).await?;

    let location = HeaderValue::try_from(record.original_url.as_str()).map_err(|_| {
        AppError::internal(
            "Stored URL is not a valid redirect target",
            json!({ "code": code }),
        )
    })?;

    Ok((StatusCode::FOUND, [(header::LOCATION, location)]).into_response())
}

/// Answers paths that match no route.
pub async fn not_found_handler(uri: Uri) -> AppError {
    AppError::not_found("URL not found", json!({ "path": uri.path() }))
}
