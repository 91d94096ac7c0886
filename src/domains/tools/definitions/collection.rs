//! Parameters for `get_collection_tracks`.

use schemars::JsonSchema;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CollectionTracksParams {
    #[schemars(description = "Safe name of the collection")]
    pub collection_safename: String,
}
