//! Caching layer for fast lookups.
//!
//! [`MemoryCache`] holds every record seen by this process. It is rebuilt
//! lazily after a restart from store hits.

mod memory_cache;

pub use memory_cache::MemoryCache;
