//! In-process record cache.

use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use tracing::debug;

use crate::domain::entities::UrlRecord;

/// Process-local map from short code to record, consulted before the store.
///
/// Backed by a `DashMap`, whose sharded locks let concurrent requests read and
/// write different codes without contending. Guards are never held across an
/// `.await`.
///
/// Entries live for the lifetime of the process and are never evicted.
#[derive(Debug, Default)]
pub struct MemoryCache {
    entries: DashMap<String, UrlRecord>,
}

impl MemoryCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached record for `code`.
    pub fn get(&self, code: &str) -> Option<UrlRecord> {
        match self.entries.get(code) {
            Some(entry) => {
                debug!("Cache HIT: {}", code);
                Some(entry.value().clone())
            }
            None => {
                debug!("Cache MISS: {}", code);
                None
            }
        }
    }

    /// Stores `record` under its short code, replacing any previous entry.
    pub fn put(&self, record: UrlRecord) {
        debug!("Cache SET: {} -> {}", record.short_code, record.original_url);
        self.entries.insert(record.short_code.clone(), record);
    }

    /// Returns the record cached under `code`, inserting the one built by
    /// `make` if there is none.
    ///
    /// The check and the insert happen under the same shard lock. The flag is
    /// `true` when this call inserted the record.
    pub fn get_or_insert_with<F>(&self, code: &str, make: F) -> (UrlRecord, bool)
    where
        F: FnOnce() -> UrlRecord,
    {
        match self.entries.entry(code.to_string()) {
            Entry::Occupied(entry) => (entry.get().clone(), false),
            Entry::Vacant(entry) => {
                let record = make();
                debug!("Cache SET: {} -> {}", code, record.original_url);
                entry.insert(record.clone());
                (record, true)
            }
        }
    }

    /// Number of cached records.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
