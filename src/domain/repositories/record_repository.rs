//! Repository trait for durable url record storage.

use std::time::Duration;

use async_trait::async_trait;

use crate::domain::entities::UrlRecord;

/// Errors raised by a record store.
///
/// Store errors never reach HTTP clients: callers log them and fall back to
/// cache-only behavior.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("record store unavailable: {0}")]
    Unavailable(String),

    #[error("record store call timed out after {0:?}")]
    Timeout(Duration),

    #[error("record store constraint violated: {0}")]
    Constraint(String),

    #[error("record store error: {0}")]
    Backend(String),
}

/// Repository interface for durable url records keyed by short code.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::MongoRecordRepository`] - MongoDB implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RecordRepository: Send + Sync {
    /// Finds the record stored under `code`.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(UrlRecord))` if found
    /// - `Ok(None)` if not found
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] on connectivity or decoding failures.
    async fn find_by_code(&self, code: &str) -> Result<Option<UrlRecord>, StoreError>;

    /// Persists a new record.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Constraint`] if a record with the same short code
    /// already exists, and other [`StoreError`] variants on connectivity failures.
    async fn insert(&self, record: &UrlRecord) -> Result<(), StoreError>;

    /// Returns the highest stored record id, if any record exists.
    async fn max_id(&self) -> Result<Option<i64>, StoreError>;

    /// Counts stored records.
    async fn count(&self) -> Result<u64, StoreError>;

    /// Checks that the backing store answers.
    async fn ping(&self) -> Result<(), StoreError>;
}
