//! Error types and handling for the MCP server.
//!
//! Tool failures never surface here: the registry turns them into tool
//! results. What is left is what can stop the server from starting.

use thiserror::Error;

/// A specialized Result type for MCP server operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for the MCP server.
#[derive(Debug, Error)]
pub enum Error {
    /// The Melodies API client could not be built.
    #[error("Catalog error: {0}")]
    Catalog(#[from] crate::domains::catalog::CatalogError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::catalog::CatalogError;

    #[test]
    fn test_catalog_error_converts() {
        let err: Error = CatalogError::ClientInit("no TLS backend".to_string()).into();
        assert_eq!(
            err.to_string(),
            "Catalog error: Failed to create HTTP client: no TLS backend"
        );
    }
}
