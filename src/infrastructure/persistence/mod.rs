//! Durable storage.
//!
//! - [`MongoRecordRepository`] - MongoDB implementation of
//!   [`crate::domain::repositories::RecordRepository`]
//! - [`RecordStore`] - optional, timeout-bounded handle the services use

pub mod mongo_record_repository;
pub mod record_store;

pub use mongo_record_repository::MongoRecordRepository;
pub use record_store::{DEFAULT_STORE_TIMEOUT, RecordStore};
