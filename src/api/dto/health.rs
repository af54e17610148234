//! Health report shapes.

use serde::Serialize;

/// Overall service state.
///
/// The service keeps answering from the cache without a store, so a missing
/// store only degrades it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceStatus {
    Healthy,
    Degraded,
}

/// State of a single component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentStatus {
    Ok,
    Error,
    Disabled,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: ServiceStatus,
    pub version: &'static str,
    pub checks: HealthChecks,
}

#[derive(Debug, Serialize)]
pub struct HealthChecks {
    pub store: StoreCheck,
    pub cache: CacheCheck,
}

#[derive(Debug, Serialize)]
pub struct StoreCheck {
    pub status: ComponentStatus,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// The cache cannot fail; it only reports how many records it holds.
#[derive(Debug, Serialize)]
pub struct CacheCheck {
    pub status: ComponentStatus,
    pub records: usize,
}
