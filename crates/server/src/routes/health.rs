use crate::state::ServerState;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;
use std::sync::Arc;
use std::time::SystemTime;

/// Global server start time for uptime calculation
static SERVER_START_TIME: once_cell::sync::Lazy<SystemTime> =
    once_cell::sync::Lazy::new(SystemTime::now);

fn uptime_seconds() -> u64 {
    SERVER_START_TIME
        .elapsed()
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

/// Health check endpoint (liveness)
/// Returns 200 if server is running
pub async fn health_check() -> impl IntoResponse {
    Json(json!({
        "status": "healthy",
        "service": "unirank-server",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "uptime_seconds": uptime_seconds(),
    }))
}

/// Readiness check endpoint
/// Returns 200 once the ranking table is loaded, 503 otherwise
pub async fn readiness_check(State(state): State<Arc<ServerState>>) -> impl IntoResponse {
    let (status, ready, dataset) = if state.qa.is_loaded() {
        (StatusCode::OK, "ready", "loaded")
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "not_ready", "unavailable")
    };

    let assistant = if state.assistant.is_configured() {
        "configured"
    } else {
        "not_configured"
    };

    let body = Json(json!({
        "status": ready,
        "service": "unirank-server",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "uptime_seconds": uptime_seconds(),
        "components": {
            "api": "ready",
            "dataset": dataset,
            "rows": state.qa.row_count(),
            "assistant": assistant,
        }
    }));

    (status, body)
}
