//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::state::AppState;

/// Returns service health status with component checks.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: All components healthy
/// - **503 Service Unavailable**: One or more components degraded
///
/// # Components Checked
///
/// 1. **Store**: Counts links
/// 2. **Response Queue**: Checks if channel is open and reports capacity
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "store": { "status": "ok", "message": "Connected, 12 links (3 accepted)" },
///     "response_queue": { "status": "ok", "message": "Capacity: 1000" }
///   }
/// }
/// ```
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let store_check = check_store(&state).await;

    let queue_check = check_response_queue(&state);

    let all_healthy = store_check.is_ok() && queue_check.is_ok();

    let response = HealthResponse {
        status: if all_healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks {
            store: store_check,
            response_queue: queue_check,
        },
    };

    if all_healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

/// Checks store connectivity by counting links.
async fn check_store(state: &AppState) -> CheckStatus {
    match state.link_service.link_counts().await {
        Ok(counts) => CheckStatus::ok(format!(
            "Connected, {} links ({} accepted)",
            counts.total, counts.accepted
        )),
        Err(e) => CheckStatus::error(format!("Store error: {}", e)),
    }
}

/// Checks if the acknowledgement queue is operational.
fn check_response_queue(state: &AppState) -> CheckStatus {
    if state.response_sender.is_closed() {
        CheckStatus::error("Response queue is closed")
    } else {
        CheckStatus::ok(format!("Capacity: {}", state.response_sender.capacity()))
    }
}
