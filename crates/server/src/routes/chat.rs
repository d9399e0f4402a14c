use crate::error::{ServerError, ServerResult};
use crate::state::ServerState;
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use unirank::{ChatRoute, UniversityDetails};

/// Chat request
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: String,
}

/// Chat reply: table details when the message named a known university,
/// otherwise the AI service's text.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum ChatReply {
    Details(UniversityDetails),
    Response { response: String },
}

/// Answer a chat message.
pub async fn chat(
    State(state): State<Arc<ServerState>>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> ServerResult<Json<ChatReply>> {
    let Json(request) = payload?;
    let message = request.message.trim();

    if message.is_empty() {
        return Err(ServerError::BadRequest("No message provided.".to_string()));
    }

    if let ChatRoute::Lookup(details) = state.qa.route_chat(message) {
        tracing::debug!(
            university = details.institution_name().unwrap_or_default(),
            "chat answered from ranking table"
        );
        return Ok(Json(ChatReply::Details(details)));
    }

    tracing::debug!("chat forwarded to AI service");
    let response = state.assistant.generate(message).await?;

    Ok(Json(ChatReply::Response { response }))
}
