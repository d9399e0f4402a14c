use assistant::AssistantConfig;
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

/// Plain port variable honoured when no prefixed port is set.
const PORT_ENV: &str = "PORT";
const PREFIXED_PORT_ENV: &str = "UNIRANK_SERVER__PORT";

/// Server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Server bind address
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Maximum request body size in MB
    #[serde(default = "default_max_body_size_mb")]
    pub max_body_size_mb: usize,

    /// Enable CORS
    #[serde(default = "default_true")]
    pub enable_cors: bool,

    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Ranking CSV loaded at startup
    #[serde(default = "default_dataset_path")]
    pub dataset_path: PathBuf,

    /// Conversational AI service
    #[serde(default)]
    pub assistant: AssistantConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            port: default_port(),
            timeout_secs: default_timeout_secs(),
            max_body_size_mb: default_max_body_size_mb(),
            enable_cors: default_true(),
            log_level: default_log_level(),
            dataset_path: default_dataset_path(),
            assistant: AssistantConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from `.env`, an optional `server.*` file and
    /// `UNIRANK_SERVER__*` environment variables, in that order of precedence
    /// from lowest to highest.
    pub fn load() -> anyhow::Result<Self> {
        // A missing .env file is normal outside development.
        dotenvy::dotenv().ok();

        let builder = config::Config::builder()
            // Load from file if exists
            .add_source(config::File::with_name("server").required(false))
            // Override with environment variables
            .add_source(config::Environment::with_prefix("UNIRANK_SERVER").separator("__"));

        let mut config: ServerConfig = builder.build()?.try_deserialize()?;

        if std::env::var_os(PREFIXED_PORT_ENV).is_none() {
            config.apply_port_override(std::env::var(PORT_ENV).ok().as_deref())?;
        }
        config.assistant = config.assistant.with_env_api_key();
        config.align_assistant_timeout();

        if config.assistant.api_key().is_none() {
            tracing::warn!("No AI service API key configured; chat fallback will be unavailable");
        }

        Ok(config)
    }

    /// Replace the port with a plain `PORT` value, if one was given.
    pub fn apply_port_override(&mut self, port: Option<&str>) -> anyhow::Result<()> {
        if let Some(raw) = port.map(str::trim).filter(|p| !p.is_empty()) {
            self.port = raw
                .parse()
                .map_err(|e| anyhow::anyhow!("invalid {PORT_ENV} value '{raw}': {e}"))?;
        }
        Ok(())
    }

    /// Keep the AI call strictly inside the request timeout.
    ///
    /// An AI call still running when the request timeout fires surfaces as
    /// `REQUEST_TIMEOUT` rather than `AI_CONNECT_FAILED`.
    pub fn align_assistant_timeout(&mut self) {
        if self.assistant.timeout_secs < self.timeout_secs {
            return;
        }
        let aligned = self.timeout_secs.saturating_sub(1).max(1);
        tracing::warn!(
            assistant_timeout_secs = self.assistant.timeout_secs,
            request_timeout_secs = self.timeout_secs,
            aligned_secs = aligned,
            "AI service timeout must be below the request timeout; shortening it"
        );
        self.assistant.timeout_secs = aligned;
        self.assistant.connect_timeout_secs = self.assistant.connect_timeout_secs.min(aligned);
    }

    /// Get the socket address to bind to
    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        let addr_str = format!("{}:{}", self.bind_addr, self.port);
        Ok(addr_str.parse()?)
    }

    /// Get request timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Get max body size in bytes
    pub fn max_body_size(&self) -> usize {
        self.max_body_size_mb * 1024 * 1024
    }
}

fn default_bind_addr() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_max_body_size_mb() -> usize {
    1
}

fn default_true() -> bool {
    true
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_dataset_path() -> PathBuf {
    PathBuf::from("rankings.csv")
}
