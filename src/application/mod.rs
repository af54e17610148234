//! Application layer services implementing business logic.
//!
//! Services orchestrate the code generator, the in-process cache and the
//! durable store, and provide a clean API for HTTP handlers.
//!
//! # Available Services
//!
//! - [`services::shorten_service::ShortenService`] - Record creation for a URL
//! - [`services::resolve_service::ResolveService`] - Short code lookup

pub mod services;
