//! Unirank Server - HTTP API for university ranking lookups
//!
//! This crate exposes the ranking table over a small JSON API:
//!
//! - **Lookup**: resolve a free-text university name to its ranking record
//! - **Chat**: answer ranking questions from the table, otherwise forward the
//!   message to the configured AI service
//! - **Health**: liveness and readiness probes
//!
//! # Features
//!
//! - **Middleware**: Compression, CORS, request ID tracking, structured logging,
//!   request timeouts and panic recovery
//! - **Configuration**: Environment variable and file-based configuration
//! - **Error Handling**: JSON error responses with stable error codes
//! - **Graceful Shutdown**: Proper signal handling for production deployments
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use server::ServerConfig;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::load()?;
//!     server::start_server(config).await?;
//!     Ok(())
//! }
//! ```
//!
//! # API Endpoints
//!
//! - `GET /` - API information
//! - `GET /health` - Liveness probe
//! - `GET /ready` - Readiness probe (503 while the dataset is unavailable)
//! - `POST /api/lookup` - Details for `{"university_name": "..."}`
//! - `POST /api/chat` - Answer `{"message": "..."}`

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod state;

pub use config::ServerConfig;
pub use error::{ServerError, ServerResult};
pub use server::{build_router, start_server};
pub use state::ServerState;
