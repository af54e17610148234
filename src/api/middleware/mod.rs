//! HTTP middleware for request processing.
//!
//! Provides CORS headers for the shortening endpoint and request tracing.

pub mod cors;
pub mod tracing;
