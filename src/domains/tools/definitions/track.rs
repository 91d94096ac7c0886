//! Parameters for the per-track tools.

use schemars::JsonSchema;
use serde::Deserialize;

use crate::domains::catalog::AudioFormat;

// Shared by `get_track_info`, `get_track_album_art` and `get_track_composer_avatar`.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TrackParams {
    #[schemars(description = "ID of the track")]
    pub track_id: f64,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DownloadUrlParams {
    #[schemars(description = "ID of the track version")]
    pub track_version_id: f64,

    #[serde(default)]
    #[schemars(description = "Format of the track")]
    pub version: AudioFormat,
}
