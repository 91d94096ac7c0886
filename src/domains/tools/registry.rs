//! Tool Registry - central dispatch for all tools.
//!
//! This module provides:
//! - The catalog of available tools (metadata for listing)
//! - Dispatch of a named invocation to its typed handler
//! - Uniform wrapping of every failure as `Tool execution failed: ...`

use rmcp::model::{CallToolResult, Tool};
use serde_json::Value;
use tracing::{info, instrument, warn};

use crate::domains::catalog::MelodiesClient;

use super::{ToolCall, ToolError, ToolKind};

/// Tool registry - owns the Melodies client and dispatches tool calls.
///
/// The registry holds no per-call state. The only thing that changes between
/// calls is the client's API key, replaced by `configure_server`.
#[derive(Debug, Clone)]
pub struct ToolRegistry {
    client: MelodiesClient,
}

impl ToolRegistry {
    /// Create a new tool registry.
    pub fn new(client: MelodiesClient) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &MelodiesClient {
        &self.client
    }

    /// Get all tool names, in listing order.
    pub fn tool_names() -> Vec<&'static str> {
        ToolKind::ALL.iter().map(|kind| kind.name()).collect()
    }

    /// Get all tools as Tool models (metadata).
    ///
    /// This is the single source of truth for all available tools.
    /// Both HTTP and STDIO transports use this to get tool metadata.
    pub fn get_all_tools() -> Vec<Tool> {
        ToolKind::ALL.iter().map(|kind| kind.to_tool()).collect()
    }

    /// Call a tool by name.
    ///
    /// Any failure, whether an unknown name, bad arguments, a missing API key
    /// or an API error, comes back as [`ToolError::ExecutionFailed`] carrying
    /// the original message. A failed call leaves no state behind.
    #[instrument(skip(self, arguments))]
    pub async fn call_tool(&self, name: &str, arguments: Value) -> Result<CallToolResult, ToolError> {
        info!("Tool called: {}", name);

        self.dispatch(name, arguments).await.map_err(|e| {
            match &e {
                ToolError::Catalog(inner) if inner.is_local() => {
                    info!("Tool {} rejected before any request: {}", name, e)
                }
                _ => warn!("Tool {} failed: {}", name, e),
            }
            ToolError::execution_failed(e.to_string())
        })
    }

    async fn dispatch(&self, name: &str, arguments: Value) -> Result<CallToolResult, ToolError> {
        let kind = ToolKind::from_name(name).ok_or_else(|| ToolError::not_found(name))?;
        ToolCall::parse(kind, arguments)?.execute(&self.client).await
    }
}
