//! Conversational fallback for Unirank.
//!
//! Messages the ranking table cannot answer are forwarded to a hosted
//! generative model through its `generateContent` endpoint. The contract is
//! deliberately small: one user turn in, one text reply out.
//!
//! ```no_run
//! use assistant::{AssistantClient, AssistantConfig};
//!
//! # async fn run() -> Result<(), assistant::AssistantError> {
//! let client = AssistantClient::new(AssistantConfig::default().with_env_api_key())?;
//! let reply = client.generate("Which universities are in Zurich?").await?;
//! println!("{reply}");
//! # Ok(())
//! # }
//! ```
//!
//! Failures are typed ([`AssistantError`]) so callers can tell a missing key
//! from a network failure from a malformed reply.

mod api;
mod config;
mod error;

pub use crate::api::{build_payload, extract_text, AssistantClient};
pub use crate::config::{AssistantConfig, API_KEY_ENV};
pub use crate::error::AssistantError;
