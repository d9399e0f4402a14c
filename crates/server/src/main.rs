//! Unirank Server - HTTP API for university ranking lookups
//!
//! Loads the ranking table named in the configuration and serves the lookup
//! and chat endpoints until interrupted.

use server::ServerConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig::load()?;

    server::start_server(config).await?;

    Ok(())
}
