//! DTOs for link shortening endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to shorten a URL.
///
/// The URL is treated as an opaque string; only emptiness is rejected.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "url is required"))]
    pub url: String,
}

/// Successful shortening result.
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    pub short_url: String,
}
