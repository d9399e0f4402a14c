use crate::error::{ServerError, ServerResult};
use crate::state::ServerState;
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde::Deserialize;
use std::sync::Arc;
use unirank::DetailsResult;

/// Lookup request
#[derive(Debug, Deserialize)]
pub struct LookupRequest {
    /// Free-text university name
    #[serde(default, alias = "name")]
    pub university_name: String,
}

/// Look up one university by name.
///
/// A found university is returned as a flat JSON object of its ranking
/// columns. A miss is still a 200 with `{"error": "Sorry, ..."}`; only a
/// blank name or a missing dataset is rejected.
pub async fn lookup_university(
    State(state): State<Arc<ServerState>>,
    payload: Result<Json<LookupRequest>, JsonRejection>,
) -> ServerResult<Json<DetailsResult>> {
    let Json(request) = payload?;

    if request.university_name.trim().is_empty() {
        return Err(ServerError::BadRequest(
            "No university name provided.".to_string(),
        ));
    }

    let result = state.qa.details(&request.university_name)?;

    tracing::debug!(
        query = %request.university_name,
        found = result.is_found(),
        "lookup served"
    );

    Ok(Json(result))
}
