//! Typed tool invocations.
//!
//! A [`ToolCall`] is a decoded invocation: the tool plus its strongly typed
//! arguments. Decoding happens once, up front; execution then only deals
//! with well-formed parameters.

use rmcp::model::{CallToolResult, Content};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, info};

use crate::domains::catalog::{MelodiesClient, SearchCriteria};

use super::definitions::{
    CollectionTracksParams, ConfigureParams, CueSheetParams, DownloadUrlParams, TrackParams,
};
use super::{ToolError, ToolKind};

/// Confirmation returned by `configure_server`.
pub const CONFIGURED_MESSAGE: &str = "Server configured successfully";

/// A decoded tool invocation.
#[derive(Debug, Clone)]
pub enum ToolCall {
    ConfigureServer(ConfigureParams),
    SearchTracks(SearchCriteria),
    SimplifiedSearchTracks(SearchCriteria),
    GetCollections,
    GetCollectionTracks(CollectionTracksParams),
    GetTrendingTracks,
    GetSimplifiedTrendingTracks,
    GetTrackInfo(TrackParams),
    GetTrackAlbumArt(TrackParams),
    GetTrackComposerAvatar(TrackParams),
    GetTrackDownloadUrl(DownloadUrlParams),
    GetGenres,
    GetGenreGroups,
    GetMoods,
    GetInstruments,
    GetPurposes,
    GetCueSheetInfo(CueSheetParams),
}

/// Decode an argument bag into `T`. A missing bag counts as `{}`.
fn decode<T: DeserializeOwned>(arguments: Value) -> Result<T, ToolError> {
    let arguments = match arguments {
        Value::Null => Value::Object(Default::default()),
        other => other,
    };
    serde_json::from_value(arguments).map_err(|e| ToolError::invalid_arguments(e.to_string()))
}

impl ToolCall {
    /// Decode the arguments for `kind`.
    ///
    /// Tools without parameters ignore whatever they are given.
    pub fn parse(kind: ToolKind, arguments: Value) -> Result<Self, ToolError> {
        let call = match kind {
            ToolKind::ConfigureServer => Self::ConfigureServer(decode(arguments)?),
            ToolKind::SearchTracks => Self::SearchTracks(decode(arguments)?),
            ToolKind::SimplifiedSearchTracks => Self::SimplifiedSearchTracks(decode(arguments)?),
            ToolKind::GetCollections => Self::GetCollections,
            ToolKind::GetCollectionTracks => Self::GetCollectionTracks(decode(arguments)?),
            ToolKind::GetTrendingTracks => Self::GetTrendingTracks,
            ToolKind::GetSimplifiedTrendingTracks => Self::GetSimplifiedTrendingTracks,
            ToolKind::GetTrackInfo => Self::GetTrackInfo(decode(arguments)?),
            ToolKind::GetTrackAlbumArt => Self::GetTrackAlbumArt(decode(arguments)?),
            ToolKind::GetTrackComposerAvatar => Self::GetTrackComposerAvatar(decode(arguments)?),
            ToolKind::GetTrackDownloadUrl => Self::GetTrackDownloadUrl(decode(arguments)?),
            ToolKind::GetGenres => Self::GetGenres,
            ToolKind::GetGenreGroups => Self::GetGenreGroups,
            ToolKind::GetMoods => Self::GetMoods,
            ToolKind::GetInstruments => Self::GetInstruments,
            ToolKind::GetPurposes => Self::GetPurposes,
            ToolKind::GetCueSheetInfo => Self::GetCueSheetInfo(decode(arguments)?),
        };
        Ok(call)
    }

    /// The tool this call targets.
    pub fn kind(&self) -> ToolKind {
        match self {
            Self::ConfigureServer(_) => ToolKind::ConfigureServer,
            Self::SearchTracks(_) => ToolKind::SearchTracks,
            Self::SimplifiedSearchTracks(_) => ToolKind::SimplifiedSearchTracks,
            Self::GetCollections => ToolKind::GetCollections,
            Self::GetCollectionTracks(_) => ToolKind::GetCollectionTracks,
            Self::GetTrendingTracks => ToolKind::GetTrendingTracks,
            Self::GetSimplifiedTrendingTracks => ToolKind::GetSimplifiedTrendingTracks,
            Self::GetTrackInfo(_) => ToolKind::GetTrackInfo,
            Self::GetTrackAlbumArt(_) => ToolKind::GetTrackAlbumArt,
            Self::GetTrackComposerAvatar(_) => ToolKind::GetTrackComposerAvatar,
            Self::GetTrackDownloadUrl(_) => ToolKind::GetTrackDownloadUrl,
            Self::GetGenres => ToolKind::GetGenres,
            Self::GetGenreGroups => ToolKind::GetGenreGroups,
            Self::GetMoods => ToolKind::GetMoods,
            Self::GetInstruments => ToolKind::GetInstruments,
            Self::GetPurposes => ToolKind::GetPurposes,
            Self::GetCueSheetInfo(_) => ToolKind::GetCueSheetInfo,
        }
    }

    /// Run the call against the Melodies client.
    ///
    /// `configure_server` swaps the client's API key and returns a fixed
    /// confirmation; every other tool returns the API payload as
    /// pretty-printed JSON text.
    pub async fn execute(self, client: &MelodiesClient) -> Result<CallToolResult, ToolError> {
        debug!("Executing {}", self.kind());

        let data = match self {
            Self::ConfigureServer(params) => {
                client.set_credential(params.into_api_key()?).await;
                info!("Server configured with a new API key");
                return Ok(CallToolResult::success(vec![Content::text(
                    CONFIGURED_MESSAGE,
                )]));
            }
            Self::SearchTracks(criteria) => client.search_tracks(&criteria).await?,
            Self::SimplifiedSearchTracks(criteria) => {
                client.simplified_search_tracks(&criteria).await?
            }
            Self::GetCollections => client.get_collections().await?,
            Self::GetCollectionTracks(params) => {
                client
                    .get_collection_tracks(&params.collection_safename)
                    .await?
            }
            Self::GetTrendingTracks => client.get_trending_tracks().await?,
            Self::GetSimplifiedTrendingTracks => client.get_simplified_trending_tracks().await?,
            Self::GetTrackInfo(params) => client.get_track_info(params.track_id).await?,
            Self::GetTrackAlbumArt(params) => client.get_track_album_art(params.track_id).await?,
            Self::GetTrackComposerAvatar(params) => {
                client.get_track_composer_avatar(params.track_id).await?
            }
            Self::GetTrackDownloadUrl(params) => {
                client
                    .get_track_download_url(params.track_version_id, Some(params.version))
                    .await?
            }
            Self::GetGenres => client.get_genres().await?,
            Self::GetGenreGroups => client.get_genre_groups().await?,
            Self::GetMoods => client.get_moods().await?,
            Self::GetInstruments => client.get_instruments().await?,
            Self::GetPurposes => client.get_purposes().await?,
            Self::GetCueSheetInfo(params) => {
                client
                    .get_cue_sheet_info(&params.filename, params.page, params.per_page)
                    .await?
            }
        };

        json_result(&data)
    }
}

/// Wrap a payload as a single pretty-printed JSON text item.
pub fn json_result(data: &Value) -> Result<CallToolResult, ToolError> {
    let text = serde_json::to_string_pretty(data)
        .map_err(|e| ToolError::internal(format!("Failed to serialize response: {e}")))?;
    Ok(CallToolResult::success(vec![Content::text(text)]))
}
