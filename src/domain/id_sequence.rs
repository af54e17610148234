//! Record id assignment.

use std::sync::atomic::{AtomicI64, Ordering};

/// Monotonic source of record ids.
///
/// Ids are unique within the process. When the record store is reachable at
/// startup the sequence is seeded past the highest persisted id, so new ids
/// also stay clear of records written by earlier runs.
#[derive(Debug)]
pub struct IdSequence {
    next: AtomicI64,
}

impl IdSequence {
    /// Creates a sequence whose first id is `first`.
    pub fn starting_at(first: i64) -> Self {
        Self {
            next: AtomicI64::new(first),
        }
    }

    /// Creates a sequence that continues after `max_id`, or starts at 1.
    pub fn after(max_id: Option<i64>) -> Self {
        Self::starting_at(max_id.map_or(1, |id| id.saturating_add(1).max(1)))
    }

    /// Takes the next id.
    pub fn next_id(&self) -> i64 {
        self.next.fetch_add(1, Ordering::Relaxed)
    }

    /// Returns the id the next call to [`Self::next_id`] will hand out.
    pub fn peek(&self) -> i64 {
        self.next.load(Ordering::Relaxed)
    }
}

impl Default for IdSequence {
    fn default() -> Self {
        Self::starting_at(1)
    }
}
