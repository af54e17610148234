#![allow(dead_code)]

use async_trait::async_trait;
use axum_test::TestServer;
use dashmap::DashMap;
use linkhash::domain::entities::UrlRecord;
use linkhash::domain::id_sequence::IdSequence;
use linkhash::domain::repositories::{RecordRepository, StoreError};
use linkhash::infrastructure::cache::MemoryCache;
use linkhash::infrastructure::persistence::RecordStore;
use linkhash::routes::app_router;
use linkhash::state::AppState;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::Duration;

pub const BASE_URL: &str = "http://localhost:3000";

/// Store double keeping records in memory, with a unique key on the code.
#[derive(Default)]
pub struct InMemoryRepository {
    records: DashMap<String, UrlRecord>,
    inserts: AtomicUsize,
}

impl InMemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seed(&self, record: UrlRecord) {
        self.records.insert(record.short_code.clone(), record);
    }

    pub fn get(&self, code: &str) -> Option<UrlRecord> {
        self.records.get(code).map(|r| r.value().clone())
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn insert_calls(&self) -> usize {
        self.inserts.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RecordRepository for InMemoryRepository {
    async fn find_by_code(&self, code: &str) -> Result<Option<UrlRecord>, StoreError> {
        Ok(self.get(code))
    }

    async fn insert(&self, record: &UrlRecord) -> Result<(), StoreError> {
        self.inserts.fetch_add(1, Ordering::SeqCst);
        if self.records.contains_key(&record.short_code) {
            return Err(StoreError::Constraint(format!(
                "duplicate short_url {}",
                record.short_code
            )));
        }
        self.seed(record.clone());
        Ok(())
    }

    async fn max_id(&self) -> Result<Option<i64>, StoreError> {
        Ok(self.records.iter().map(|r| r.value().id).max())
    }

    async fn count(&self) -> Result<u64, StoreError> {
        Ok(self.records.len() as u64)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}

/// Store double whose every call fails as if the server were gone.
pub struct UnreachableRepository;

#[async_trait]
impl RecordRepository for UnreachableRepository {
    async fn find_by_code(&self, _code: &str) -> Result<Option<UrlRecord>, StoreError> {
        Err(StoreError::Unavailable("connection refused".to_string()))
    }

    async fn insert(&self, _record: &UrlRecord) -> Result<(), StoreError> {
        Err(StoreError::Unavailable("connection refused".to_string()))
    }

    async fn max_id(&self) -> Result<Option<i64>, StoreError> {
        Err(StoreError::Unavailable("connection refused".to_string()))
    }

    async fn count(&self) -> Result<u64, StoreError> {
        Err(StoreError::Unavailable("connection refused".to_string()))
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Err(StoreError::Unavailable("connection refused".to_string()))
    }
}

/// Store double whose first lookup fails; everything else goes to `inner`.
pub struct FlakyLookupRepository {
    pub inner: Arc<InMemoryRepository>,
    failed: AtomicBool,
}

impl FlakyLookupRepository {
    pub fn new(inner: Arc<InMemoryRepository>) -> Self {
        Self {
            inner,
            failed: AtomicBool::new(false),
        }
    }
}

#[async_trait]
impl RecordRepository for FlakyLookupRepository {
    async fn find_by_code(&self, code: &str) -> Result<Option<UrlRecord>, StoreError> {
        if !self.failed.swap(true, Ordering::SeqCst) {
            return Err(StoreError::Unavailable("connection reset".to_string()));
        }
        self.inner.find_by_code(code).await
    }

    async fn insert(&self, record: &UrlRecord) -> Result<(), StoreError> {
        self.inner.insert(record).await
    }

    async fn max_id(&self) -> Result<Option<i64>, StoreError> {
        self.inner.max_id().await
    }

    async fn count(&self) -> Result<u64, StoreError> {
        self.inner.count().await
    }

    async fn ping(&self) -> Result<(), StoreError> {
        self.inner.ping().await
    }
}

/// State with no store at all.
pub fn cache_only_state() -> AppState {
    AppState::new(
        Arc::new(MemoryCache::new()),
        RecordStore::disabled(),
        Arc::new(IdSequence::default()),
        BASE_URL,
    )
}

/// State with a fresh cache in front of `repository`.
pub fn state_with_store(repository: Arc<dyn RecordRepository>) -> AppState {
    AppState::new(
        Arc::new(MemoryCache::new()),
        RecordStore::new(repository, Duration::from_secs(5)),
        Arc::new(IdSequence::default()),
        BASE_URL,
    )
}

pub fn server(state: AppState) -> TestServer {
    TestServer::new(app_router(state)).unwrap()
}

/// Extracts the short code from a `short_url` value.
pub fn code_of(short_url: &str) -> String {
    short_url
        .strip_prefix(&format!("{}/", BASE_URL))
        .expect("short_url should start with the base URL")
        .to_string()
}
