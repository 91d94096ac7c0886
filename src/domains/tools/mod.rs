//! Tools domain module.
//!
//! This module handles all tool-related functionality for the MCP server.
//!
//! ## Architecture
//!
//! - `kind.rs` - The closed set of tools: names, descriptions, schemas
//! - `definitions/` - Typed argument structs for each tool
//! - `call.rs` - Decoded invocations and their execution
//! - `registry.rs` - Central dispatch and uniform error wrapping
//! - `router.rs` - rmcp ToolRouter builder for the STDIO transport
//! - `error.rs` - Tool-specific error types

mod call;
pub mod definitions;
mod error;
mod kind;
mod registry;
pub mod router;

pub use call::{CONFIGURED_MESSAGE, ToolCall, json_result};
pub use error::ToolError;
pub use kind::ToolKind;
pub use registry::ToolRegistry;
pub use router::build_tool_router;
