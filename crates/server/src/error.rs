use assistant::AssistantError;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use unirank::QaError;

pub type ServerResult<T> = Result<T, ServerError>;

/// Server error types
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    DatasetNotLoaded(#[from] QaError),

    #[error("Request timeout")]
    Timeout,

    #[error("AI service not configured. API Key missing.")]
    AssistantNotConfigured,

    #[error("Failed to connect to AI service: {0}")]
    AssistantConnect(String),

    #[error("Invalid response from AI service.")]
    AssistantInvalidResponse,

    #[error("Failed to get a valid response from the AI model.")]
    AssistantUnexpectedResponse,

    #[error("Internal server error: {0}")]
    Internal(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Not found")]
    NotFound,
}

/// API error response structure
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}

impl ServerError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ServerError::BadRequest(_) | ServerError::DatasetNotLoaded(_) => {
                StatusCode::BAD_REQUEST
            }
            ServerError::Timeout => StatusCode::REQUEST_TIMEOUT,
            ServerError::NotFound => StatusCode::NOT_FOUND,
            ServerError::AssistantConnect(_) => StatusCode::BAD_GATEWAY,
            ServerError::AssistantNotConfigured
            | ServerError::AssistantInvalidResponse
            | ServerError::AssistantUnexpectedResponse
            | ServerError::Internal(_)
            | ServerError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get error code string
    pub fn error_code(&self) -> &'static str {
        match self {
            ServerError::BadRequest(_) => "BAD_REQUEST",
            ServerError::DatasetNotLoaded(_) => "DATASET_NOT_LOADED",
            ServerError::Timeout => "REQUEST_TIMEOUT",
            ServerError::AssistantNotConfigured => "AI_NOT_CONFIGURED",
            ServerError::AssistantConnect(_) => "AI_CONNECT_FAILED",
            ServerError::AssistantInvalidResponse => "AI_INVALID_RESPONSE",
            ServerError::AssistantUnexpectedResponse => "AI_UNEXPECTED_RESPONSE",
            ServerError::Internal(_) => "INTERNAL_ERROR",
            ServerError::Config(_) => "CONFIG_ERROR",
            ServerError::NotFound => "NOT_FOUND",
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorResponse {
            error: ErrorDetail {
                code: self.error_code().to_string(),
                message: self.to_string(),
            },
        };

        if status.is_server_error() {
            tracing::error!(code = %body.error.code, message = %body.error.message, "request failed");
        } else {
            tracing::debug!(code = %body.error.code, message = %body.error.message, "request rejected");
        }

        (status, Json(body)).into_response()
    }
}

impl From<AssistantError> for ServerError {
    fn from(err: AssistantError) -> Self {
        match err {
            AssistantError::NotConfigured => ServerError::AssistantNotConfigured,
            AssistantError::Client(e) => ServerError::Config(e),
            AssistantError::Connect(e) => ServerError::AssistantConnect(e),
            AssistantError::InvalidResponse(e) => {
                tracing::warn!(error = %e, "AI service returned a non-JSON body");
                ServerError::AssistantInvalidResponse
            }
            AssistantError::UnexpectedShape => ServerError::AssistantUnexpectedResponse,
        }
    }
}

impl From<JsonRejection> for ServerError {
    fn from(rejection: JsonRejection) -> Self {
        ServerError::BadRequest(format!("Invalid JSON body: {}", rejection.body_text()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assistant_errors_map_to_distinct_codes() {
        let cases = [
            (AssistantError::NotConfigured, StatusCode::INTERNAL_SERVER_ERROR, "AI_NOT_CONFIGURED"),
            (
                AssistantError::Connect("HTTP error 500".into()),
                StatusCode::BAD_GATEWAY,
                "AI_CONNECT_FAILED",
            ),
            (
                AssistantError::InvalidResponse("expected value".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
                "AI_INVALID_RESPONSE",
            ),
            (
                AssistantError::UnexpectedShape,
                StatusCode::INTERNAL_SERVER_ERROR,
                "AI_UNEXPECTED_RESPONSE",
            ),
        ];
        for (err, status, code) in cases {
            let mapped = ServerError::from(err);
            assert_eq!(mapped.status_code(), status);
            assert_eq!(mapped.error_code(), code);
        }
    }

    #[test]
    fn timeout_is_a_json_408() {
        let err = ServerError::Timeout;
        assert_eq!(err.status_code(), StatusCode::REQUEST_TIMEOUT);
        assert_eq!(err.error_code(), "REQUEST_TIMEOUT");
    }

    #[test]
    fn dataset_error_keeps_user_message() {
        let err = ServerError::from(QaError::DatasetNotLoaded);
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            err.to_string(),
            "Dataset not loaded. Please check server configuration."
        );
    }

    #[test]
    fn connect_message_names_the_failure() {
        let err = ServerError::from(AssistantError::Connect("HTTP error 503".into()));
        assert_eq!(
            err.to_string(),
            "Failed to connect to AI service: HTTP error 503"
        );
    }
}
