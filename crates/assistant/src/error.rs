use thiserror::Error;

/// Errors surfaced by [`AssistantClient`](crate::AssistantClient).
///
/// Each variant maps to a distinct user-facing message; none of them is
/// retried.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AssistantError {
    /// No API key configured; no request was attempted.
    #[error("AI service not configured. API Key missing.")]
    NotConfigured,
    /// The HTTP client could not be constructed.
    #[error("failed to build HTTP client: {0}")]
    Client(String),
    /// Network failure or non-2xx status from the AI service.
    #[error("Failed to connect to AI service: {0}")]
    Connect(String),
    /// The response body was not JSON.
    #[error("Invalid response from AI service: {0}")]
    InvalidResponse(String),
    /// JSON arrived but without `candidates[0].content.parts[0].text`.
    #[error("Failed to get a valid response from the AI model.")]
    UnexpectedShape,
}
