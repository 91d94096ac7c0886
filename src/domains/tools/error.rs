//! Tool-specific error types.

use thiserror::Error;

use crate::domains::catalog::CatalogError;

/// Errors that can occur during tool operations.
///
/// Callers only ever see [`ToolError::ExecutionFailed`]: the registry wraps
/// every other variant into it, keeping the original message as context.
#[derive(Debug, Error)]
pub enum ToolError {
    /// The requested tool was not found.
    #[error("Unknown tool: {0}")]
    NotFound(String),

    /// Invalid or missing arguments.
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    /// `configure_server` was called without a usable key.
    #[error("API_KEY is required, please set it in the configuration")]
    MissingApiKey,

    /// The Melodies API call failed.
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// Uniform wrapper returned to callers.
    #[error("Tool execution failed: {0}")]
    ExecutionFailed(String),

    /// An internal error occurred.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ToolError {
    /// Create a new "not found" error.
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound(name.into())
    }

    /// Create a new "invalid arguments" error.
    pub fn invalid_arguments(msg: impl Into<String>) -> Self {
        Self::InvalidArguments(msg.into())
    }

    /// Create a new "execution failed" error.
    pub fn execution_failed(msg: impl Into<String>) -> Self {
        Self::ExecutionFailed(msg.into())
    }

    /// Create a new "internal" error.
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}
