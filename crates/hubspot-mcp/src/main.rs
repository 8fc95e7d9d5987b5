//! HubSpot MCP Server
//!
//! Model Context Protocol server exposing HubSpot CRM records, searches,
//! property metadata, timeline events and typed associations to LLM agents.

use rmcp::ServiceExt;
use tracing_subscriber::EnvFilter;

use hubspot_mcp::server::HubSpotMcpServer;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Logs go to stderr; stdout belongs to the MCP transport.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("hubspot_mcp=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("hubspot-mcp starting (stdio transport)");

    let server = HubSpotMcpServer::from_env()?;
    let transport = rmcp::transport::io::stdio();

    let service = server.serve(transport).await?;
    service.waiting().await?;

    Ok(())
}
