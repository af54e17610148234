//! Url shortening service.

use std::sync::Arc;

use serde_json::json;
use tracing::{debug, warn};

use crate::domain::entities::UrlRecord;
use crate::domain::id_sequence::IdSequence;
use crate::error::AppError;
use crate::infrastructure::cache::MemoryCache;
use crate::infrastructure::persistence::RecordStore;
use crate::utils::code_generator::derive_short_code;

/// Service producing the record for a URL, creating it on first use.
///
/// Consults the cache first and the durable store second. The store is
/// best-effort: when it is unreachable, slow, or rejects a write, the request
/// still succeeds from the cache.
pub struct ShortenService {
    cache: Arc<MemoryCache>,
    store: RecordStore,
    ids: Arc<IdSequence>,
    base_url: String,
}

impl ShortenService {
    /// Creates a new shortening service.
    ///
    /// `base_url` is the externally advertised origin short URLs are built on;
    /// a trailing slash is ignored.
    pub fn new(
        cache: Arc<MemoryCache>,
        store: RecordStore,
        ids: Arc<IdSequence>,
        base_url: impl Into<String>,
    ) -> Self {
        Self {
            cache,
            store,
            ids,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Returns the record for `original_url`, creating it if needed.
    ///
    /// # Deduplication
    ///
    /// The short code is derived from the URL, so a cached record for that
    /// code is returned as-is. When two different URLs hash to the same code
    /// the first one wins and the later URL receives the earlier record.
    ///
    /// # Store reconciliation
    ///
    /// For a code new to this process the store is checked as well: a record
    /// already persisted there (by another process or an earlier run) replaces
    /// the freshly built one. Otherwise, including when the lookup itself
    /// fails, the new record is inserted. Store errors are logged and ignored.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `original_url` is empty.
    pub async fn shorten(&self, original_url: &str) -> Result<UrlRecord, AppError> {
        if original_url.is_empty() {
            return Err(AppError::bad_request(
                "url must not be empty",
                json!({ "field": "url" }),
            ));
        }

        let code = derive_short_code(original_url);

        let (record, created) = self.cache.get_or_insert_with(&code, || {
            UrlRecord::created_today(self.ids.next_id(), original_url.to_string(), code.clone())
        });

        if !created {
            debug!("Reusing cached record for {}", code);
            return Ok(record);
        }

        if !self.store.is_available() {
            return Ok(record);
        }

        match self.store.find_by_code(&code).await {
            Ok(Some(stored)) => {
                debug!("Store already holds {}, adopting stored record", code);
                self.cache.put(stored.clone());
                return Ok(stored);
            }
            Ok(None) => {}
            // A failed lookup counts as a miss; the insert below still runs.
            Err(e) => warn!(code = %code, error = %e, "Store lookup failed"),
        }

        if let Err(e) = self.store.insert(&record).await {
            warn!(code = %code, error = %e, "Failed to persist record");
        }
        Ok(record)
    }

    /// Builds the public short URL for a code.
    pub fn short_url(&self, code: &str) -> String {
        format!("{}/{}", self.base_url, code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::{MockRecordRepository, StoreError};
    use crate::infrastructure::persistence::DEFAULT_STORE_TIMEOUT;
    use chrono::NaiveDate;

    const URL: &str = "https://example.com/page";

    fn service_with(store: RecordStore) -> (ShortenService, Arc<MemoryCache>) {
        let cache = Arc::new(MemoryCache::new());
        let service = ShortenService::new(
            cache.clone(),
            store,
            Arc::new(IdSequence::default()),
            "http://localhost:3000",
        );
        (service, cache)
    }

    fn store_with(mock: MockRecordRepository) -> RecordStore {
        RecordStore::new(Arc::new(mock), DEFAULT_STORE_TIMEOUT)
    }

    #[tokio::test]
    async fn test_shorten_rejects_empty_url() {
        let (service, cache) = service_with(RecordStore::disabled());

        let result = service.shorten("").await;

        assert!(matches!(result.unwrap_err(), AppError::Validation { .. }));
        assert!(cache.is_empty());
    }

    #[tokio::test]
    async fn test_shorten_cache_only() {
        let (service, cache) = service_with(RecordStore::disabled());

        let record = service.shorten(URL).await.unwrap();

        assert_eq!(record.id, 1);
        assert_eq!(record.original_url, URL);
        assert_eq!(record.short_code, derive_short_code(URL));
        assert_eq!(cache.get(&record.short_code), Some(record));
    }

    #[tokio::test]
    async fn test_shorten_is_idempotent() {
        let (service, cache) = service_with(RecordStore::disabled());

        let first = service.shorten(URL).await.unwrap();
        let second = service.shorten(URL).await.unwrap();

        assert_eq!(first, second);
        assert_eq!(cache.len(), 1);
    }

    #[tokio::test]
    async fn test_shorten_assigns_distinct_ids() {
        let (service, _) = service_with(RecordStore::disabled());

        let a = service.shorten("https://a.example").await.unwrap();
        let b = service.shorten("https://b.example").await.unwrap();

        assert_ne!(a.id, b.id);
        assert_ne!(a.short_code, b.short_code);
    }

    #[tokio::test]
    async fn test_shorten_collision_first_writer_wins() {
        let (service, cache) = service_with(RecordStore::disabled());
        let code = derive_short_code("https://other.example");
        cache.put(UrlRecord::created_today(
            77,
            "https://earlier.example".to_string(),
            code,
        ));

        let record = service.shorten("https://other.example").await.unwrap();

        assert_eq!(record.id, 77);
        assert_eq!(record.original_url, "https://earlier.example");
    }

    #[tokio::test]
    async fn test_shorten_inserts_new_record() {
        let mut mock = MockRecordRepository::new();
        mock.expect_find_by_code().times(1).returning(|_| Ok(None));
        mock.expect_insert()
            .withf(|record| record.original_url == URL && record.short_code.len() == 8)
            .times(1)
            .returning(|_| Ok(()));

        let (service, _) = service_with(store_with(mock));

        let record = service.shorten(URL).await.unwrap();
        assert_eq!(record.original_url, URL);
    }

    #[tokio::test]
    async fn test_shorten_adopts_stored_record() {
        let code = derive_short_code(URL);
        let stored = UrlRecord::new(
            12,
            URL.to_string(),
            code.clone(),
            NaiveDate::from_ymd_opt(2023, 6, 1).unwrap(),
        );
        let returned = stored.clone();

        let mut mock = MockRecordRepository::new();
        mock.expect_find_by_code()
            .times(1)
            .returning(move |_| Ok(Some(returned.clone())));
        mock.expect_insert().times(0);

        let (service, cache) = service_with(store_with(mock));

        let record = service.shorten(URL).await.unwrap();

        assert_eq!(record, stored);
        assert_eq!(cache.get(&code), Some(stored));
    }

    #[tokio::test]
    async fn test_shorten_skips_store_on_cache_hit() {
        let mut mock = MockRecordRepository::new();
        mock.expect_find_by_code().times(1).returning(|_| Ok(None));
        mock.expect_insert().times(1).returning(|_| Ok(()));

        let (service, _) = service_with(store_with(mock));

        service.shorten(URL).await.unwrap();
        service.shorten(URL).await.unwrap();
    }

    #[tokio::test]
    async fn test_shorten_survives_insert_failure() {
        let mut mock = MockRecordRepository::new();
        mock.expect_find_by_code().times(1).returning(|_| Ok(None));
        mock.expect_insert()
            .times(1)
            .returning(|_| Err(StoreError::Unavailable("connection reset".to_string())));

        let (service, cache) = service_with(store_with(mock));

        let record = service.shorten(URL).await.unwrap();
        assert_eq!(cache.get(&record.short_code), Some(record));
    }

    #[tokio::test]
    async fn test_shorten_persists_after_lookup_failure() {
        let mut mock = MockRecordRepository::new();
        mock.expect_find_by_code()
            .times(1)
            .returning(|_| Err(StoreError::Timeout(DEFAULT_STORE_TIMEOUT)));
        mock.expect_insert()
            .withf(|record| record.original_url == URL)
            .times(1)
            .returning(|_| Ok(()));

        let (service, _) = service_with(store_with(mock));

        let record = service.shorten(URL).await.unwrap();
        assert_eq!(record.original_url, URL);

        // Cached from here on; the store is not consulted again.
        service.shorten(URL).await.unwrap();
    }

    #[test]
    fn test_short_url_trims_trailing_slash() {
        let service = ShortenService::new(
            Arc::new(MemoryCache::new()),
            RecordStore::disabled(),
            Arc::new(IdSequence::default()),
            "https://s.example.com/",
        );

        assert_eq!(
            service.short_url("abcdef12"),
            "https://s.example.com/abcdef12"
        );
    }
}
