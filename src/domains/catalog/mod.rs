//! Catalog domain module.
//!
//! Everything needed to talk to the remote Melodies music-catalog API:
//!
//! - `query.rs` - search criteria and their query-string serialization
//! - `credential.rs` - the shared, swappable API key
//! - `client.rs` - the authenticated HTTP client and its named endpoints
//! - `error.rs` - catalog-specific error types

mod client;
mod credential;
mod error;
pub mod query;

pub use client::{AudioFormat, MelodiesClient};
pub use credential::Credential;
pub use error::{CatalogError, CatalogResult};
pub use query::{SearchCriteria, SerializedQuery, SortOrder};
