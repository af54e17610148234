//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::{ResolveService, ShortenService};
use crate::domain::id_sequence::IdSequence;
use crate::infrastructure::cache::MemoryCache;
use crate::infrastructure::persistence::RecordStore;

#[derive(Clone)]
pub struct AppState {
    pub shorten_service: Arc<ShortenService>,
    pub resolve_service: Arc<ResolveService>,
    pub cache: Arc<MemoryCache>,
    pub store: RecordStore,
}

impl AppState {
    /// Wires both services onto one cache and one store handle.
    pub fn new(
        cache: Arc<MemoryCache>,
        store: RecordStore,
        ids: Arc<IdSequence>,
        base_url: impl Into<String>,
    ) -> Self {
        let shorten_service = Arc::new(ShortenService::new(
            cache.clone(),
            store.clone(),
            ids,
            base_url,
        ));
        let resolve_service = Arc::new(ResolveService::new(cache.clone(), store.clone()));

        Self {
            shorten_service,
            resolve_service,
            cache,
            store,
        }
    }
}
