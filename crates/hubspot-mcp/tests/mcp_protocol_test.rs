//! MCP protocol integration test.
//!
//! Verifies that the server correctly handles the MCP protocol round-trip:
//! tool discovery via `list_tools` and tool invocation via `call_tool`.
//! Only tools that return before touching the network are invoked.

use rmcp::model::{CallToolRequestParams, ClientInfo};
use rmcp::{ClientHandler, ServiceExt};

use hubspot_client::{HubSpotClient, HubSpotConfig};
use hubspot_mcp::server::HubSpotMcpServer;

#[derive(Debug, Clone, Default)]
struct DummyClient;

impl ClientHandler for DummyClient {
    fn get_info(&self) -> ClientInfo {
        ClientInfo::default()
    }
}

fn test_server() -> HubSpotMcpServer {
    let config = HubSpotConfig::new("pat-na1-test").unwrap();
    HubSpotMcpServer::new(HubSpotClient::new(config).unwrap())
}

#[tokio::test]
async fn test_mcp_protocol_list_tools() -> anyhow::Result<()> {
    let (server_transport, client_transport) = tokio::io::duplex(4096);

    let server = test_server();
    let server_handle = tokio::spawn(async move {
        let service = server.serve(server_transport).await?;
        service.waiting().await?;
        anyhow::Ok(())
    });

    let client = DummyClient.serve(client_transport).await?;

    let tools = client.list_tools(None).await?;
    let tool_names: Vec<&str> = tools.tools.iter().map(|t| t.name.as_ref()).collect();
    for expected in [
        "hubspot-get-contact",
        "hubspot-search-deals",
        "hubspot-create-association",
        "hubspot-batch-delete-associations",
        "hubspot-get-custom-object-schemas",
        "hubspot-create-timeline-event",
    ] {
        assert!(
            tool_names.contains(&expected),
            "Expected {expected} in tool list, got: {tool_names:?}"
        );
    }

    client.cancel().await?;
    server_handle.await??;
    Ok(())
}

#[tokio::test]
async fn test_mcp_protocol_call_tool() -> anyhow::Result<()> {
    let (server_transport, client_transport) = tokio::io::duplex(4096);

    let server = test_server();
    let server_handle = tokio::spawn(async move {
        let service = server.serve(server_transport).await?;
        service.waiting().await?;
        anyhow::Ok(())
    });

    let client = DummyClient.serve(client_transport).await?;

    // An unresolvable type pair fails during resolution, before any remote
    // call, so the round-trip is fully deterministic.
    let result = client
        .call_tool(CallToolRequestParams {
            meta: None,
            name: "hubspot-create-association".into(),
            arguments: Some(
                serde_json::json!({
                    "from_object_type": "contacts",
                    "from_object_id": "1",
                    "to_object_type": "goals",
                    "to_object_id": "2",
                    "association_category": "HUBSPOT_DEFINED",
                })
                .as_object()
                .unwrap()
                .clone(),
            ),
            task: None,
        })
        .await?;

    let text = result
        .content
        .first()
        .and_then(|c| c.raw.as_text())
        .map(|t| t.text.as_str())
        .expect("Expected text content");

    let parsed: serde_json::Value = serde_json::from_str(text)?;
    assert_eq!(parsed["error"], "unresolved_association_type");

    client.cancel().await?;
    server_handle.await??;
    Ok(())
}

#[tokio::test]
async fn test_mcp_protocol_call_stub_tool() -> anyhow::Result<()> {
    let (server_transport, client_transport) = tokio::io::duplex(4096);

    let server = test_server();
    let server_handle = tokio::spawn(async move {
        let service = server.serve(server_transport).await?;
        service.waiting().await?;
        anyhow::Ok(())
    });

    let client = DummyClient.serve(client_transport).await?;

    let result = client
        .call_tool(CallToolRequestParams {
            meta: None,
            name: "hubspot-delete-timeline-event".into(),
            arguments: Some(
                serde_json::json!({ "id": "evt-1" })
                    .as_object()
                    .unwrap()
                    .clone(),
            ),
            task: None,
        })
        .await?;

    let text = result
        .content
        .first()
        .and_then(|c| c.raw.as_text())
        .map(|t| t.text.as_str())
        .expect("Expected text content");
    assert_eq!(text, "Timeline events cannot be deleted in HubSpot");

    client.cancel().await?;
    server_handle.await??;
    Ok(())
}
