//! Short code resolution service.

use std::sync::Arc;

use serde_json::json;
use tracing::{debug, warn};

use crate::domain::entities::UrlRecord;
use crate::error::AppError;
use crate::infrastructure::cache::MemoryCache;
use crate::infrastructure::persistence::RecordStore;

/// Service resolving a short code back to its record.
pub struct ResolveService {
    cache: Arc<MemoryCache>,
    store: RecordStore,
}

impl ResolveService {
    /// Creates a new resolution service.
    pub fn new(cache: Arc<MemoryCache>, store: RecordStore) -> Self {
        Self { cache, store }
    }

    /// Looks up the record for `code`.
    ///
    /// Checks the cache, then the store when it is available. A store hit is
    /// copied into the cache. A failing or slow store counts as a miss.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if neither the cache nor the store knows
    /// the code.
    pub async fn resolve(&self, code: &str) -> Result<UrlRecord, AppError> {
        if let Some(record) = self.cache.get(code) {
            return Ok(record);
        }

        if self.store.is_available() {
            match self.store.find_by_code(code).await {
                Ok(Some(record)) => {
                    debug!("Store HIT: {}", code);
                    self.cache.put(record.clone());
                    return Ok(record);
                }
                Ok(None) => debug!("Store MISS: {}", code),
                Err(e) => {
                    warn!(code = %code, error = %e, "Store lookup failed, treating as miss")
                }
            }
        }

        Err(AppError::not_found(
            "URL not found",
            json!({ "code": code }),
        ))
    }
}
