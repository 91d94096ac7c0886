//! Parameters for `configure_server`.

use schemars::JsonSchema;
use serde::Deserialize;

use crate::domains::tools::ToolError;

// A missing key decodes to `None` so that it fails the same way as an empty one.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConfigureParams {
    #[schemars(required, description = "Your Melodies API key")]
    pub api_key: Option<String>,
}

impl ConfigureParams {
    /// The key to install. Missing and empty keys are both rejected.
    pub fn into_api_key(self) -> Result<String, ToolError> {
        self.api_key
            .filter(|key| !key.is_empty())
            .ok_or(ToolError::MissingApiKey)
    }
}
