//! The closed set of tools exposed by the server.
//!
//! [`ToolKind`] names every tool, carries its description and input schema,
//! and fixes the order in which tools are listed. Adding a tool means adding
//! a variant here and a matching arm in [`ToolCall`](super::ToolCall); the
//! compiler points at every other place that has to change.

use std::sync::Arc;

use rmcp::{
    handler::server::tool::cached_schema_for_type,
    model::{JsonObject, Tool},
};

use crate::domains::catalog::SearchCriteria;

use super::definitions::{
    CollectionTracksParams, ConfigureParams, CueSheetParams, DownloadUrlParams, NoParams,
    TrackParams,
};

/// Identifies one of the 17 Melodies tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToolKind {
    ConfigureServer,
    SearchTracks,
    SimplifiedSearchTracks,
    GetCollections,
    GetCollectionTracks,
    GetTrendingTracks,
    GetSimplifiedTrendingTracks,
    GetTrackInfo,
    GetTrackAlbumArt,
    GetTrackComposerAvatar,
    GetTrackDownloadUrl,
    GetGenres,
    GetGenreGroups,
    GetMoods,
    GetInstruments,
    GetPurposes,
    GetCueSheetInfo,
}

impl ToolKind {
    /// Every tool, in listing order.
    pub const ALL: [ToolKind; 17] = [
        Self::ConfigureServer,
        Self::SearchTracks,
        Self::SimplifiedSearchTracks,
        Self::GetCollections,
        Self::GetCollectionTracks,
        Self::GetTrendingTracks,
        Self::GetSimplifiedTrendingTracks,
        Self::GetTrackInfo,
        Self::GetTrackAlbumArt,
        Self::GetTrackComposerAvatar,
        Self::GetTrackDownloadUrl,
        Self::GetGenres,
        Self::GetGenreGroups,
        Self::GetMoods,
        Self::GetInstruments,
        Self::GetPurposes,
        Self::GetCueSheetInfo,
    ];

    /// Tool name as registered in MCP.
    pub fn name(self) -> &'static str {
        match self {
            Self::ConfigureServer => "configure_server",
            Self::SearchTracks => "search_tracks",
            Self::SimplifiedSearchTracks => "simplified_search_tracks",
            Self::GetCollections => "get_collections",
            Self::GetCollectionTracks => "get_collection_tracks",
            Self::GetTrendingTracks => "get_trending_tracks",
            Self::GetSimplifiedTrendingTracks => "get_simplified_trending_tracks",
            Self::GetTrackInfo => "get_track_info",
            Self::GetTrackAlbumArt => "get_track_album_art",
            Self::GetTrackComposerAvatar => "get_track_composer_avatar",
            Self::GetTrackDownloadUrl => "get_track_download_url",
            Self::GetGenres => "get_genres",
            Self::GetGenreGroups => "get_genre_groups",
            Self::GetMoods => "get_moods",
            Self::GetInstruments => "get_instruments",
            Self::GetPurposes => "get_purposes",
            Self::GetCueSheetInfo => "get_cue_sheet_info",
        }
    }

    /// Tool description shown to clients.
    pub fn description(self) -> &'static str {
        match self {
            Self::ConfigureServer => "Configure the MCP server with API credentials",
            Self::SearchTracks => "Search for tracks in the Melodies API",
            Self::SimplifiedSearchTracks => {
                "Perform simplified track search (main track info only)"
            }
            Self::GetCollections => "Get list of all available collections",
            Self::GetCollectionTracks => "Get tracks from a specific collection",
            Self::GetTrendingTracks => "Get 25 most popular tracks currently",
            Self::GetSimplifiedTrendingTracks => {
                "Get 25 most popular tracks currently (simplified version)"
            }
            Self::GetTrackInfo => "Get detailed information about a specific track",
            Self::GetTrackAlbumArt => "Get album art for a track in different image qualities",
            Self::GetTrackComposerAvatar => {
                "Get composer avatar for a track in different image qualities"
            }
            Self::GetTrackDownloadUrl => "Get temporary download URL for a track version",
            Self::GetGenres => "Get list of all current genres",
            Self::GetGenreGroups => "Get list of all current genre groups",
            Self::GetMoods => "Get list of all current moods",
            Self::GetInstruments => "Get list of all current instruments",
            Self::GetPurposes => "Get list of all current purposes",
            Self::GetCueSheetInfo => "Get cue sheet info for a track version by filename",
        }
    }

    /// Look up a tool by its exact MCP name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }

    /// JSON schema of the tool's arguments.
    pub fn input_schema(self) -> Arc<JsonObject> {
        match self {
            Self::ConfigureServer => cached_schema_for_type::<ConfigureParams>(),
            Self::SearchTracks | Self::SimplifiedSearchTracks => {
                cached_schema_for_type::<SearchCriteria>()
            }
            Self::GetCollectionTracks => cached_schema_for_type::<CollectionTracksParams>(),
            Self::GetTrackInfo | Self::GetTrackAlbumArt | Self::GetTrackComposerAvatar => {
                cached_schema_for_type::<TrackParams>()
            }
            Self::GetTrackDownloadUrl => cached_schema_for_type::<DownloadUrlParams>(),
            Self::GetCueSheetInfo => cached_schema_for_type::<CueSheetParams>(),
            Self::GetCollections
            | Self::GetTrendingTracks
            | Self::GetSimplifiedTrendingTracks
            | Self::GetGenres
            | Self::GetGenreGroups
            | Self::GetMoods
            | Self::GetInstruments
            | Self::GetPurposes => cached_schema_for_type::<NoParams>(),
        }
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool(self) -> Tool {
        Tool {
            name: self.name().into(),
            description: Some(self.description().into()),
            input_schema: self.input_schema(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }
}

impl std::fmt::Display for ToolKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn required(kind: ToolKind) -> Vec<String> {
        kind.input_schema()
            .get("required")
            .and_then(|r| r.as_array())
            .map(|r| {
                r.iter()
                    .filter_map(|v| v.as_str().map(str::to_string))
                    .collect()
            })
            .unwrap_or_default()
    }

    fn schema_text(kind: ToolKind) -> String {
        serde_json::to_string(&*kind.input_schema()).unwrap()
    }

    #[test]
    fn test_names_are_unique_and_round_trip() {
        let names: HashSet<_> = ToolKind::ALL.iter().map(|k| k.name()).collect();
        assert_eq!(names.len(), 17);
        for kind in ToolKind::ALL {
            assert_eq!(ToolKind::from_name(kind.name()), Some(kind));
        }
    }

    #[test]
    fn test_from_name_is_exact() {
        assert_eq!(ToolKind::from_name("Get_Genres"), None);
        assert_eq!(ToolKind::from_name("get_genres "), None);
        assert_eq!(ToolKind::from_name(""), None);
    }

    #[test]
    fn test_listing_order() {
        assert_eq!(ToolKind::ALL[0].name(), "configure_server");
        assert_eq!(ToolKind::ALL[16].name(), "get_cue_sheet_info");
    }

    #[test]
    fn test_required_fields() {
        assert_eq!(required(ToolKind::ConfigureServer), vec!["apiKey"]);
        assert_eq!(
            required(ToolKind::GetCollectionTracks),
            vec!["collectionSafename"]
        );
        for kind in [
            ToolKind::GetTrackInfo,
            ToolKind::GetTrackAlbumArt,
            ToolKind::GetTrackComposerAvatar,
        ] {
            assert_eq!(required(kind), vec!["trackId"]);
        }
        assert_eq!(
            required(ToolKind::GetTrackDownloadUrl),
            vec!["trackVersionId"]
        );
        assert_eq!(required(ToolKind::GetCueSheetInfo), vec!["filename"]);
        assert!(required(ToolKind::SearchTracks).is_empty());
        assert!(required(ToolKind::GetGenres).is_empty());
    }

    #[test]
    fn test_search_schema_declares_properties_and_sort_enum() {
        let schema = schema_text(ToolKind::SearchTracks);
        for property in [
            "\"q\"",
            "\"page\"",
            "\"genre\"",
            "\"mood\"",
            "\"instrument\"",
            "\"purpose\"",
            "\"minTempo\"",
            "\"maxTempo\"",
            "\"minDuration\"",
            "\"maxDuration\"",
            "\"perPage\"",
        ] {
            assert!(schema.contains(property), "missing {property}");
        }
        for sort in ["\"latest\"", "\"shuffle\"", "\"featured\""] {
            assert!(schema.contains(sort), "missing sort value {sort}");
        }
    }

    #[test]
    fn test_download_schema_declares_version_enum() {
        let schema = schema_text(ToolKind::GetTrackDownloadUrl);
        assert!(schema.contains("\"wav\""));
        assert!(schema.contains("\"mp3\""));
    }

    #[test]
    fn test_every_schema_is_an_object() {
        for kind in ToolKind::ALL {
            let schema = kind.input_schema();
            assert_eq!(
                schema.get("type").and_then(|t| t.as_str()),
                Some("object"),
                "{kind} schema is not an object"
            );
        }
    }

    #[test]
    fn test_to_tool_carries_description() {
        let tool = ToolKind::GetTrendingTracks.to_tool();
        assert_eq!(tool.name, "get_trending_tracks");
        assert_eq!(
            tool.description.as_deref(),
            Some("Get 25 most popular tracks currently")
        );
    }

    #[test]
    fn test_schemas_have_no_top_level_description() {
        for kind in ToolKind::ALL {
            assert!(
                kind.input_schema().get("description").is_none(),
                "{kind} schema carries a description"
            );
        }
    }

    #[test]
    fn test_numeric_arguments_are_numbers() {
        let schema = schema_text(ToolKind::SearchTracks);
        assert!(schema.contains("\"number\""));
        assert!(!schema.contains("uint32"));
        assert!(!schema_text(ToolKind::GetTrackInfo).contains("uint64"));
    }
}
