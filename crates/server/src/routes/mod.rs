//! API route handlers
//!
//! - `health`: Liveness and readiness probes
//! - `lookup`: Direct university lookup
//! - `chat`: Chat answering from the table or the AI service

pub mod chat;
pub mod health;
pub mod lookup;

use crate::error::{ServerError, ServerResult};
use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;

/// API version and base info
///
/// Returns server information including version and available endpoints.
///
/// # Response
///
/// ```json
/// {
///   "name": "Unirank Server",
///   "version": "0.1.0",
///   "endpoints": ["..."]
/// }
/// ```
pub async fn api_info() -> ServerResult<impl IntoResponse> {
    Ok(Json(json!({
        "name": "Unirank Server",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": [
            "/api/lookup",
            "/api/chat",
            "/health",
            "/ready"
        ]
    })))
}

/// 404 Not Found handler
///
/// Returns a standardized error response for undefined routes.
pub async fn not_found() -> ServerError {
    ServerError::NotFound
}
