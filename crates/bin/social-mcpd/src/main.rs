//! Daemon entry point for the social graph MCP server.
//!
//! Loads configuration from the CLI and environment, opens the graph store,
//! bootstraps schema and seed data, then serves MCP over streamable HTTP or
//! stdio. Nothing is served if the bootstrap fails.

mod config;
mod database;

use social_core::control::GraphControlPlane;
use social_mcp::server::{McpHttpServerConfig, serve_stdio, serve_streamable_http};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::GraphConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    init_tracing();
    let config = GraphConfig::from_args()?;

    let db = database::connect(&config).await?;
    let control = GraphControlPlane::new(db);
    control.bootstrap(&config.data_dir).await?;

    if config.enable_stdio {
        serve_stdio(control).await?;
    } else {
        let http_config =
            McpHttpServerConfig::new(config.http_addr).with_stateful_mode(!config.stateless);
        serve_streamable_http(control, http_config).await?;
    }
    info!("graph store closed");
    Ok(())
}

/// Logs go to stderr so stdout stays free for the stdio transport.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
