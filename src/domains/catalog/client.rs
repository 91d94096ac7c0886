//! Authenticated client for the Melodies API.
//!
//! One `reqwest::Client` per process, one base URL, one fixed timeout and a
//! shared [`Credential`]. Every named operation is a thin wrapper around
//! [`MelodiesClient::get`] with a fixed path and, for the search endpoints,
//! a [`SerializedQuery`] built from [`SearchCriteria`].

use std::time::Duration;

use reqwest::header::{AUTHORIZATION, HeaderValue};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, instrument, warn};

use super::credential::Credential;
use super::error::{CatalogError, CatalogResult};
use super::query::{SearchCriteria, SerializedQuery};
use crate::core::config::CatalogConfig;

/// Every endpoint lives under this prefix.
const API_PREFIX: &str = "/api/v1";

// Audio format for download URLs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum AudioFormat {
    Wav,
    #[default]
    Mp3,
}

impl AudioFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Wav => "wav",
            Self::Mp3 => "mp3",
        }
    }
}

/// HTTP client for the Melodies music catalog.
///
/// Cloning is cheap and clones share the same credential, so a key set
/// through one clone is used by all of them.
#[derive(Debug, Clone)]
pub struct MelodiesClient {
    http: reqwest::Client,
    base_url: String,
    credential: Credential,
}

impl MelodiesClient {
    /// Build a client from the catalog configuration.
    pub fn new(config: &CatalogConfig) -> CatalogResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| CatalogError::ClientInit(e.to_string()))?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            credential: Credential::new(config.api_key.clone()),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn credential(&self) -> &Credential {
        &self.credential
    }

    /// Replace the API key used by all subsequent requests.
    pub async fn set_credential(&self, api_key: impl Into<String>) {
        self.credential.replace(api_key).await;
        debug!("API key replaced");
    }

    /// Issue an authenticated GET to `{base_url}/api/v1{path}`.
    ///
    /// Fails with [`CatalogError::MissingCredential`] without touching the
    /// network when no key is configured. The key is captured once, here;
    /// a concurrent replacement only affects later calls.
    #[instrument(skip(self, query), fields(params = query.len()))]
    pub async fn get(&self, path: &str, query: &SerializedQuery) -> CatalogResult<Value> {
        let token = self
            .credential
            .snapshot()
            .await
            .ok_or(CatalogError::MissingCredential)?;
        let mut auth = HeaderValue::from_str(&token).map_err(|_| CatalogError::InvalidCredential)?;
        auth.set_sensitive(true);

        let url = format!("{}{}{}", self.base_url, API_PREFIX, path);
        debug!(
            query = %query.to_query_string().unwrap_or_default(),
            "GET {}", url
        );

        let mut request = self.http.get(&url).header(AUTHORIZATION, auth);
        if !query.is_empty() {
            request = request.query(query.pairs());
        }

        let response = request.send().await.map_err(|e| {
            warn!("Request to {} failed: {}", path, e);
            CatalogError::Transport(e)
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await?;
            warn!("Request to {} returned {}", path, status);
            return Err(CatalogError::upstream(status.as_u16(), body));
        }

        let bytes = response.bytes().await?;
        debug!("Response received: {} bytes", bytes.len());

        if bytes.is_empty() {
            return Ok(Value::Null);
        }
        Ok(serde_json::from_slice(&bytes)?)
    }

    async fn get_path(&self, path: &str) -> CatalogResult<Value> {
        self.get(path, &SerializedQuery::new()).await
    }

    // ========================================================================
    // Tracks
    // ========================================================================

    pub async fn search_tracks(&self, criteria: &SearchCriteria) -> CatalogResult<Value> {
        self.get("/tracks/search", &criteria.to_query()).await
    }

    /// Search returning main track info only.
    pub async fn simplified_search_tracks(&self, criteria: &SearchCriteria) -> CatalogResult<Value> {
        self.get("/tracks/simplified_search", &criteria.to_query())
            .await
    }

    pub async fn get_trending_tracks(&self) -> CatalogResult<Value> {
        self.get_path("/tracks/trending").await
    }

    pub async fn get_simplified_trending_tracks(&self) -> CatalogResult<Value> {
        self.get_path("/tracks/simplified_trending").await
    }

    pub async fn get_track_info(&self, track_id: f64) -> CatalogResult<Value> {
        self.get_path(&format!("/tracks/{track_id}/info")).await
    }

    pub async fn get_track_album_art(&self, track_id: f64) -> CatalogResult<Value> {
        self.get_path(&format!("/tracks/{track_id}/album_art")).await
    }

    pub async fn get_track_composer_avatar(&self, track_id: f64) -> CatalogResult<Value> {
        self.get_path(&format!("/tracks/{track_id}/composer_avatar"))
            .await
    }

    /// Temporary download URL for a track version. Defaults to mp3.
    pub async fn get_track_download_url(
        &self,
        track_version_id: f64,
        version: Option<AudioFormat>,
    ) -> CatalogResult<Value> {
        let mut query = SerializedQuery::new();
        query.append("version", version.unwrap_or_default().as_str());
        self.get(
            &format!("/tracks/{track_version_id}/download_version_url"),
            &query,
        )
        .await
    }

    /// Cue sheet lookup by (partial) filename.
    pub async fn get_cue_sheet_info(
        &self,
        filename: &str,
        page: Option<f64>,
        per_page: Option<f64>,
    ) -> CatalogResult<Value> {
        let mut query = SerializedQuery::new();
        query.append("filename", filename);
        query.append_nonzero("page", page);
        query.append_nonzero("per_page", per_page);
        self.get("/tracks/cue_sheet_info", &query).await
    }

    // ========================================================================
    // Collections
    // ========================================================================

    pub async fn get_collections(&self) -> CatalogResult<Value> {
        self.get_path("/collections").await
    }

    pub async fn get_collection_tracks(&self, collection_safename: &str) -> CatalogResult<Value> {
        self.get_path(&format!("/collections/{collection_safename}"))
            .await
    }

    // ========================================================================
    // Taxonomies
    // ========================================================================

    pub async fn get_genres(&self) -> CatalogResult<Value> {
        self.get_path("/tracks/genres").await
    }

    pub async fn get_genre_groups(&self) -> CatalogResult<Value> {
        self.get_path("/tracks/genre_groups").await
    }

    pub async fn get_moods(&self) -> CatalogResult<Value> {
        self.get_path("/tracks/moods").await
    }

    pub async fn get_instruments(&self) -> CatalogResult<Value> {
        self.get_path("/tracks/instruments").await
    }

    pub async fn get_purposes(&self) -> CatalogResult<Value> {
        self.get_path("/tracks/purposes").await
    }
}
