//! HubSpot MCP Server library.
//!
//! Provides the [`server::HubSpotMcpServer`] MCP server handler and tool
//! parameter types. Used by the `hubspot-mcp` binary and available for
//! integration testing.

pub mod server;
pub mod tools;
