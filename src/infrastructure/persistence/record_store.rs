//! Optional, time-bounded access to the record repository.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use crate::domain::entities::UrlRecord;
use crate::domain::repositories::{RecordRepository, StoreError};

/// Default bound on a single store call.
pub const DEFAULT_STORE_TIMEOUT: Duration = Duration::from_secs(5);

/// Handle to the durable store as seen by the services.
///
/// The store may be absent (unreachable at startup or disabled by config), in
/// which case [`Self::is_available`] is false and every call returns
/// [`StoreError::Unavailable`]. Each call is bounded by `timeout`; expiry
/// surfaces as [`StoreError::Timeout`].
#[derive(Clone)]
pub struct RecordStore {
    repository: Option<Arc<dyn RecordRepository>>,
    timeout: Duration,
}

impl RecordStore {
    /// Wraps a reachable repository.
    pub fn new(repository: Arc<dyn RecordRepository>, timeout: Duration) -> Self {
        Self {
            repository: Some(repository),
            timeout,
        }
    }

    /// A store handle for cache-only operation.
    pub fn disabled() -> Self {
        Self {
            repository: None,
            timeout: DEFAULT_STORE_TIMEOUT,
        }
    }

    pub fn is_available(&self) -> bool {
        self.repository.is_some()
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub async fn find_by_code(&self, code: &str) -> Result<Option<UrlRecord>, StoreError> {
        let repository = self.repository()?;
        self.bounded(repository.find_by_code(code)).await
    }

    pub async fn insert(&self, record: &UrlRecord) -> Result<(), StoreError> {
        let repository = self.repository()?;
        self.bounded(repository.insert(record)).await
    }

    pub async fn max_id(&self) -> Result<Option<i64>, StoreError> {
        let repository = self.repository()?;
        self.bounded(repository.max_id()).await
    }

    pub async fn count(&self) -> Result<u64, StoreError> {
        let repository = self.repository()?;
        self.bounded(repository.count()).await
    }

    pub async fn ping(&self) -> Result<(), StoreError> {
        let repository = self.repository()?;
        self.bounded(repository.ping()).await
    }

    fn repository(&self) -> Result<&Arc<dyn RecordRepository>, StoreError> {
        self.repository
            .as_ref()
            .ok_or_else(|| StoreError::Unavailable("record store not connected".to_string()))
    }

    async fn bounded<T, F>(&self, call: F) -> Result<T, StoreError>
    where
        F: Future<Output = Result<T, StoreError>>,
    {
        tokio::time::timeout(self.timeout, call)
            .await
            .map_err(|_| StoreError::Timeout(self.timeout))?
    }
}
