//! MCP Server implementation and lifecycle management.
//!
//! This module contains the main server handler that implements the MCP
//! protocol by delegating tool calls to the tools domain.
//!
//! ## Tool Architecture
//!
//! Tools are a closed set declared in `domains/tools/kind.rs`. Every tool is
//! dispatched through one [`ToolRegistry`], which owns the Melodies client
//! and therefore the shared API key. The rmcp `ToolRouter` used by the stdio
//! transport and the `call_tool` method used by the HTTP transport both go
//! through that registry, so the two transports behave identically.

use rmcp::{
    ServerHandler, handler::server::tool::ToolRouter, model::*, tool_handler,
};
use std::sync::Arc;
use tracing::{info, warn};

use super::config::Config;
use crate::domains::catalog::MelodiesClient;
use crate::domains::tools::{ToolRegistry, build_tool_router};

/// The main MCP server handler.
///
/// Cloning shares the registry, so every clone sees the same API key.
#[derive(Clone)]
pub struct McpServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Dispatcher for all tools.
    registry: Arc<ToolRegistry>,

    /// Tool router for handling tool calls.
    tool_router: ToolRouter<Self>,
}

impl McpServer {
    /// Instructions sent to clients on initialization.
    pub const INSTRUCTIONS: &'static str = "Melodies MCP Server: search and browse the Melodies \
         music catalog (tracks, collections, trending, genres, moods, instruments, purposes, \
         cue sheets). Call configure_server with an API key first if none was provided at startup.";

    /// Create a new MCP server with the given configuration.
    pub fn new(config: Config) -> super::Result<Self> {
        let config = Arc::new(config);

        let client = MelodiesClient::new(&config.catalog)?;
        info!("Melodies API client targeting {}", client.base_url());
        if config.catalog.api_key.is_none() {
            warn!(
                "MELODIES_API_KEY not set - tool calls will fail until a key \
                 is supplied with the configure_server tool"
            );
        }

        let registry = Arc::new(ToolRegistry::new(client));

        Ok(Self {
            tool_router: build_tool_router::<Self>(registry.clone()),
            config,
            registry,
        })
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    /// Get the server configuration.
    pub fn config(&self) -> &Arc<Config> {
        &self.config
    }

    /// Get the tool registry.
    pub fn registry(&self) -> &Arc<ToolRegistry> {
        &self.registry
    }

    // ========================================================================
    // HTTP Transport Support Methods
    // ========================================================================

    /// List all available tools as JSON descriptors.
    pub fn list_tools(&self) -> Vec<serde_json::Value> {
        ToolRegistry::get_all_tools()
            .into_iter()
            .map(|t| {
                serde_json::json!({
                    "name": t.name,
                    "description": t.description,
                    "inputSchema": t.input_schema
                })
            })
            .collect()
    }

    /// Call a tool by name and return the serialized `CallToolResult`.
    ///
    /// Errors carry the uniform `Tool execution failed: ...` message.
    pub async fn call_tool(
        &self,
        name: &str,
        arguments: serde_json::Value,
    ) -> Result<serde_json::Value, String> {
        let result = self
            .registry
            .call_tool(name, arguments)
            .await
            .map_err(|e| e.to_string())?;
        serde_json::to_value(result).map_err(|e| e.to_string())
    }
}

/// ServerHandler implementation with tool_handler macro for automatic tool routing.
#[tool_handler]
impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            server_info: Implementation {
                name: self.config.server.name.clone(),
                version: self.config.server.version.clone(),
                ..Implementation::from_build_env()
            },
            instructions: Some(Self::INSTRUCTIONS.to_string()),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_server() -> McpServer {
        McpServer::new(Config::default()).unwrap()
    }

    #[test]
    fn test_list_tools_matches_router() {
        let server = test_server();
        let listed = server.list_tools();
        let routed = server.tool_router.list_all();

        assert_eq!(listed.len(), 17);
        assert_eq!(listed.len(), routed.len());
        for tool in routed {
            assert!(listed.iter().any(|t| t["name"].as_str() == Some(&*tool.name)));
        }
    }

    #[test]
    fn test_get_info_enables_tools_only() {
        let info = test_server().get_info();
        assert!(info.capabilities.tools.is_some());
        assert!(info.capabilities.resources.is_none());
        assert!(info.capabilities.prompts.is_none());
    }

    #[test]
    fn test_get_info_reports_configured_identity() {
        let info = test_server().get_info();
        assert_eq!(info.server_info.name, "melodies-mcp-server");
        assert_eq!(info.server_info.version, env!("CARGO_PKG_VERSION"));

        let mut config = Config::default();
        config.server.name = "custom-name".to_string();
        let info = McpServer::new(config).unwrap().get_info();
        assert_eq!(info.server_info.name, "custom-name");
    }

    #[tokio::test]
    async fn test_clones_share_credential() {
        let server = test_server();
        let clone = server.clone();

        clone
            .call_tool("configure_server", serde_json::json!({ "apiKey": "shared" }))
            .await
            .unwrap();

        let key = server.registry().client().credential().snapshot().await;
        assert_eq!(key.as_deref(), Some("shared"));
    }

    #[tokio::test]
    async fn test_call_tool_without_key_fails_uniformly() {
        let server = test_server();
        let err = server
            .call_tool("get_trending_tracks", serde_json::json!({}))
            .await
            .unwrap_err();
        assert_eq!(
            err,
            "Tool execution failed: API Key is required for this MCP server"
        );
    }
}
