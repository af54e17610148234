//! Repository trait definitions for the domain layer.
//!
//! These traits abstract durable storage following the Repository pattern and
//! are implemented by concrete repositories in the infrastructure layer.
//!
//! # Architecture
//!
//! - Traits define the contract for data operations
//! - Implementations live in `crate::infrastructure::persistence`
//! - Mock implementations are auto-generated via `mockall` for testing

pub mod record_repository;

pub use record_repository::{RecordRepository, StoreError};

#[cfg(test)]
pub use record_repository::MockRecordRepository;
