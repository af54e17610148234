//! Handlers for the link shortening endpoint.

use axum::{Json, body::Bytes, extract::State, http::Method, http::StatusCode};
use serde::Deserialize;
use serde_json::{Value, json};
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates (or returns the existing) short URL for a long URL.
///
/// # Endpoint
///
/// `POST /shorten`
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.com/page" }
/// ```
///
/// The body is read as JSON whatever the `Content-Type` header says.
///
/// # Response
///
/// ```json
/// { "short_url": "http://localhost:3000/1b3a9a5c" }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if the body is not a JSON object or `url` is
/// missing, empty, or not a string.
pub async fn shorten_handler(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<ShortenResponse>, AppError> {
    let payload = parse_request(&body)?;
    payload.validate()?;

    let record = state.shorten_service.shorten(&payload.url).await?;

    Ok(Json(ShortenResponse {
        short_url: state.shorten_service.short_url(&record.short_code),
    }))
}

/// Answers CORS preflight requests with an empty 200.
///
/// # Endpoint
///
/// `OPTIONS /shorten`
pub async fn shorten_preflight_handler() -> StatusCode {
    StatusCode::OK
}

/// Rejects every method other than `POST` and `OPTIONS`.
pub async fn shorten_method_not_allowed_handler(method: Method) -> AppError {
    AppError::method_not_allowed(
        "Only POST allowed",
        json!({ "method": method.as_str(), "allowed": ["POST", "OPTIONS"] }),
    )
}

fn parse_request(body: &[u8]) -> Result<ShortenRequest, AppError> {
    let value: Value = serde_json::from_slice(body).map_err(|e| {
        AppError::bad_request("Invalid request body", json!({ "reason": e.to_string() }))
    })?;

    if !value.is_object() {
        return Err(AppError::bad_request(
            "Invalid request body",
            json!({ "reason": "expected a JSON object" }),
        ));
    }

    ShortenRequest::deserialize(value).map_err(|e| {
        AppError::bad_request("Invalid request body", json!({ "reason": e.to_string() }))
    })
}
