//! Melodies MCP Server Library
//!
//! This crate exposes the Melodies music catalog API as a set of Model Context
//! Protocol (MCP) tools: track search, collections, trending tracks, track
//! assets, taxonomies and cue sheets.
//!
//! # Architecture
//!
//! The server is organized into the following modules:
//!
//! - **core**: Configuration, error handling, the MCP server handler and transports
//! - **domains**: Business logic organized by bounded contexts
//!   - **catalog**: The Melodies HTTP client, query serialization and the shared API key
//!   - **tools**: The tool catalog and the dispatcher that routes calls to the client
//!
//! # Example
//!
//! ```rust,no_run
//! use melodies_mcp_server::core::{Config, McpServer, TransportService};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let server = McpServer::new(config.clone())?;
//!     TransportService::new(config.transport).run(server).await?;
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};
