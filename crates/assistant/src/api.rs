use serde_json::{json, Value};

use crate::{AssistantConfig, AssistantError};

/// Header carrying the API key, which keeps it out of request URLs and
/// therefore out of reqwest error messages.
const API_KEY_HEADER: &str = "x-goog-api-key";

/// JSON pointer to the generated text in a `generateContent` response.
const TEXT_POINTER: &str = "/candidates/0/content/parts/0/text";

/// Client for the conversational AI service.
///
/// Holds one pooled, time-bounded HTTP client. Cheap to share behind an
/// `Arc`; every call is independent and nothing is retried.
#[derive(Debug, Clone)]
pub struct AssistantClient {
    http: reqwest::Client,
    cfg: AssistantConfig,
}

impl AssistantClient {
    pub fn new(cfg: AssistantConfig) -> Result<Self, AssistantError> {
        let http = reqwest::Client::builder()
            .timeout(cfg.timeout())
            .connect_timeout(cfg.connect_timeout())
            .build()
            .map_err(|e| AssistantError::Client(e.to_string()))?;
        Ok(Self { http, cfg })
    }

    pub fn config(&self) -> &AssistantConfig {
        &self.cfg
    }

    /// Whether an API key is available.
    pub fn is_configured(&self) -> bool {
        self.cfg.api_key().is_some()
    }

    /// Send a single user message and return the model's text reply.
    ///
    /// Fails fast with [`AssistantError::NotConfigured`] when no API key is
    /// set, before touching the network.
    pub async fn generate(&self, message: &str) -> Result<String, AssistantError> {
        let key = self.cfg.api_key().ok_or(AssistantError::NotConfigured)?;
        let payload = build_payload(message);

        tracing::info!(model = %self.cfg.model, chars = message.len(), "calling AI service");

        let response = self
            .http
            .post(self.cfg.endpoint())
            .header(API_KEY_HEADER, key)
            .json(&payload)
            .send()
            .await
            .map_err(|e| AssistantError::Connect(format!("HTTP request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(%status, body = %body, "AI service returned an error status");
            return Err(AssistantError::Connect(format!("HTTP error {status}")));
        }

        let body = response
            .text()
            .await
            .map_err(|e| AssistantError::Connect(format!("failed to read response body: {e}")))?;
        let value: Value = serde_json::from_str(&body).map_err(|e| {
            tracing::warn!(error = %e, body = %body, "AI service returned non-JSON body");
            AssistantError::InvalidResponse(e.to_string())
        })?;
        tracing::debug!(response = %value, "AI service raw response");

        extract_text(&value).ok_or_else(|| {
            tracing::warn!("unexpected AI service response structure");
            AssistantError::UnexpectedShape
        })
    }
}

/// Request body for a single-turn user message.
pub fn build_payload(message: &str) -> Value {
    json!({
        "contents": [
            { "role": "user", "parts": [{ "text": message }] }
        ]
    })
}

/// Generated text at `candidates[0].content.parts[0].text`, if present.
pub fn extract_text(response: &Value) -> Option<String> {
    response
        .pointer(TEXT_POINTER)
        .and_then(Value::as_str)
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_wraps_message_as_single_user_turn() {
        let payload = build_payload("Hello there");
        assert_eq!(
            payload,
            json!({"contents": [{"role": "user", "parts": [{"text": "Hello there"}]}]})
        );
    }

    #[test]
    fn extracts_text_from_first_candidate() {
        let response = json!({
            "candidates": [
                {"content": {"parts": [{"text": "Hi!"}, {"text": "ignored"}], "role": "model"}},
                {"content": {"parts": [{"text": "second"}]}}
            ]
        });
        assert_eq!(extract_text(&response), Some("Hi!".to_string()));
    }

    #[test]
    fn missing_fields_yield_none() {
        assert_eq!(extract_text(&json!({})), None);
        assert_eq!(extract_text(&json!({"candidates": []})), None);
        assert_eq!(extract_text(&json!({"candidates": [{"content": {}}]})), None);
        assert_eq!(
            extract_text(&json!({"candidates": [{"content": {"parts": []}}]})),
            None
        );
        assert_eq!(
            extract_text(&json!({"candidates": [{"content": {"parts": [{"text": 3}]}}]})),
            None
        );
    }

    #[tokio::test]
    async fn missing_key_short_circuits_without_network() {
        // An unroutable base URL would fail with Connect if a request were made.
        let client = AssistantClient::new(AssistantConfig {
            api_key: None,
            base_url: "http://invalid.invalid".into(),
            ..Default::default()
        })
        .expect("client");
        assert!(!client.is_configured());
        assert_eq!(
            client.generate("hello").await,
            Err(AssistantError::NotConfigured)
        );
    }

    #[tokio::test]
    async fn unreachable_service_is_a_connect_error() {
        let client = AssistantClient::new(AssistantConfig {
            api_key: Some("k".into()),
            // Port 9 (discard) on localhost is closed in test environments.
            base_url: "http://127.0.0.1:9".into(),
            timeout_secs: 5,
            connect_timeout_secs: 2,
            ..Default::default()
        })
        .expect("client");
        let err = client.generate("hello").await.unwrap_err();
        assert!(matches!(err, AssistantError::Connect(_)), "{err:?}");
    }
}
