//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain layer, providing
//! concrete implementations for data persistence and caching.
//!
//! # Modules
//!
//! - [`cache`] - In-process record cache
//! - [`persistence`] - MongoDB repository and the bounded store handle

pub mod cache;
pub mod persistence;
