//! Handler for health check endpoint.

use axum::{Json, extract::State};

use crate::api::dto::health::{
    CacheCheck, ComponentStatus, HealthChecks, HealthResponse, ServiceStatus, StoreCheck,
};
use crate::state::AppState;

/// Returns service health status with component checks.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Status
///
/// - **healthy**: store reachable
/// - **degraded**: store unreachable or not connected; redirects and
///   shortening keep working from the cache, so the response is still 200
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "store": { "status": "ok" },
///     "cache": { "status": "ok", "records": 12 }
///   }
/// }
/// ```
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    let store = check_store(&state).await;

    let status = match store.status {
        ComponentStatus::Ok => ServiceStatus::Healthy,
        _ => ServiceStatus::Degraded,
    };

    Json(HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION"),
        checks: HealthChecks {
            store,
            cache: CacheCheck {
                status: ComponentStatus::Ok,
                records: state.cache.len(),
            },
        },
    })
}

/// Pings the store within the configured store timeout.
async fn check_store(state: &AppState) -> StoreCheck {
    if !state.store.is_available() {
        return StoreCheck {
            status: ComponentStatus::Disabled,
            message: Some("Serving from cache only".to_string()),
        };
    }

    match state.store.ping().await {
        Ok(()) => StoreCheck {
            status: ComponentStatus::Ok,
            message: None,
        },
        Err(e) => StoreCheck {
            status: ComponentStatus::Error,
            message: Some(e.to_string()),
        },
    }
}
