//! Catalog-specific error types.

use thiserror::Error;

/// Result type for catalog operations.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Errors that can occur while calling the Melodies API.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// No API key has been configured yet. Raised before any network I/O.
    #[error("API Key is required for this MCP server")]
    MissingCredential,

    /// The configured API key cannot be sent as an HTTP header value.
    #[error("API Key contains characters that are not allowed in an HTTP header")]
    InvalidCredential,

    /// The HTTP client could not be constructed.
    #[error("Failed to create HTTP client: {0}")]
    ClientInit(String),

    /// The remote API answered with a non-2xx status.
    #[error("Request failed with status {status}: {body}")]
    Upstream { status: u16, body: String },

    /// Network failure, including the request timeout.
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// A 2xx response whose body is not JSON.
    #[error("Invalid JSON response: {0}")]
    InvalidResponse(#[from] serde_json::Error),
}

impl CatalogError {
    /// Create an upstream error from a status code and response body.
    pub fn upstream(status: u16, body: impl Into<String>) -> Self {
        Self::Upstream {
            status,
            body: body.into(),
        }
    }

    /// Whether this error was raised before a request left the process.
    pub fn is_local(&self) -> bool {
        matches!(
            self,
            Self::MissingCredential | Self::InvalidCredential | Self::ClientInit(_)
        )
    }
}
