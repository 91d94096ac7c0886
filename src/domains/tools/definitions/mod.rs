//! Tool parameter definitions.
//!
//! One typed argument struct per tool shape. The search tools take
//! [`SearchCriteria`](crate::domains::catalog::SearchCriteria) directly.
//! Input schemas are derived from these structs, so field names, required
//! fields and enumerations here are the contract clients program against.

pub mod collection;
pub mod configure;
pub mod cue_sheet;
pub mod track;

use schemars::JsonSchema;
use serde::Deserialize;

pub use collection::CollectionTracksParams;
pub use configure::ConfigureParams;
pub use cue_sheet::CueSheetParams;
pub use track::{DownloadUrlParams, TrackParams};

// Arguments for tools that take none.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct NoParams {}
