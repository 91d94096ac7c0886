//! Domains module containing business logic organized by bounded contexts.
//!
//! - `catalog` talks to the Melodies API.
//! - `tools` turns MCP tool calls into catalog requests.

pub mod catalog;
pub mod tools;
