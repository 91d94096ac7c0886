//! Parameters for `get_cue_sheet_info`.

use schemars::JsonSchema;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CueSheetParams {
    #[schemars(description = "The filename to search for (can be partial)")]
    pub filename: String,

    #[serde(default)]
    #[schemars(description = "Page number to retrieve (default 1)")]
    pub page: Option<f64>,

    #[serde(default)]
    #[schemars(description = "Number of items per page (max 100, default 10)")]
    pub per_page: Option<f64>,
}
