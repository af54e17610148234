//! # linkhash
//!
//! A URL shortener that derives short codes from the URL itself, keeps every
//! record in an in-process cache, and persists to MongoDB when it can.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - The url record entity, id sequence and repository trait
//! - **Application Layer** ([`application`]) - Shortening and resolution services
//! - **Infrastructure Layer** ([`infrastructure`]) - In-memory cache and MongoDB persistence
//! - **API Layer** ([`api`]) - HTTP handlers, DTOs, and middleware
//!
//! ## Behavior
//!
//! - Short codes are the first 8 hex characters of the URL's MD5 digest, so
//!   the same URL always yields the same code
//! - Lookups hit the cache first and fall back to the store
//! - The store is optional: if it is down at startup or during a request, the
//!   service keeps answering from the cache
//!
//! ## Quick Start
//!
//! ```bash
//! export MONGO_URI="mongodb://localhost:27017"   # optional
//! export BASE_URL="http://localhost:3000"
//! cargo run
//!
//! curl -X POST localhost:3000/shorten -d '{"url":"https://example.com/page"}'
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{ResolveService, ShortenService};
    pub use crate::domain::entities::UrlRecord;
    pub use crate::domain::id_sequence::IdSequence;
    pub use crate::domain::repositories::{RecordRepository, StoreError};
    pub use crate::error::AppError;
    pub use crate::infrastructure::cache::MemoryCache;
    pub use crate::infrastructure::persistence::RecordStore;
    pub use crate::state::AppState;
}
