use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Environment variable consulted when no API key is configured explicitly.
pub const API_KEY_ENV: &str = "GOOGLE_API_KEY";

/// Runtime configuration for the conversational AI service.
///
/// # Example
/// ```no_run
/// use assistant::{AssistantClient, AssistantConfig};
///
/// let cfg = AssistantConfig {
///     api_key: Some("AIza...".into()),
///     ..Default::default()
/// };
/// let client = AssistantClient::new(cfg).expect("client");
/// ```
#[derive(Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AssistantConfig {
    /// API key sent with every request. Blank counts as absent.
    pub api_key: Option<String>,
    /// Base URL up to and including the API version segment.
    pub base_url: String,
    /// Model name inserted into `{base_url}/models/{model}:generateContent`.
    pub model: String,
    /// Overall request timeout in seconds.
    pub timeout_secs: u64,
    /// TCP connect timeout in seconds.
    pub connect_timeout_secs: u64,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: "https://generativelanguage.googleapis.com/v1beta".into(),
            model: "gemini-2.0-flash".into(),
            timeout_secs: 25,
            connect_timeout_secs: 10,
        }
    }
}

impl AssistantConfig {
    /// The configured key, ignoring blank values.
    pub fn api_key(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
    }

    /// Fill in the API key from [`API_KEY_ENV`] when none is set.
    pub fn with_env_api_key(mut self) -> Self {
        if self.api_key().is_none() {
            self.api_key = std::env::var(API_KEY_ENV).ok();
        }
        self
    }

    /// Full `generateContent` URL for the configured model.
    pub fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            self.model
        )
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }
}

// Keeps the key out of logs.
impl fmt::Debug for AssistantConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AssistantConfig")
            .field("api_key", &self.api_key().map(|_| "<redacted>"))
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("timeout_secs", &self.timeout_secs)
            .field("connect_timeout_secs", &self.connect_timeout_secs)
            .finish()
    }
}
