use crate::config::ServerConfig;
use crate::error::ServerResult;
use assistant::AssistantClient;
use std::sync::Arc;
use unirank::UniversityQa;

/// Shared application state
#[derive(Clone)]
pub struct ServerState {
    /// Server configuration
    pub config: Arc<ServerConfig>,

    /// Ranking table, loaded once at startup and read-only afterwards
    pub qa: UniversityQa,

    /// Conversational AI client (shared connection pool)
    pub assistant: AssistantClient,
}

impl ServerState {
    /// Create new server state, loading the dataset named in the config.
    ///
    /// A dataset that fails to load is logged and leaves the server running
    /// without a table.
    pub fn new(config: ServerConfig) -> ServerResult<Self> {
        let qa = UniversityQa::load(&config.dataset_path);
        Self::with_qa(config, qa)
    }

    /// Create server state around an already built context.
    pub fn with_qa(config: ServerConfig, qa: UniversityQa) -> ServerResult<Self> {
        let assistant = AssistantClient::new(config.assistant.clone())?;

        Ok(Self {
            config: Arc::new(config),
            qa,
            assistant,
        })
    }
}
