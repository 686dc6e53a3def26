//! GitHub contents-API store.
//!
//! The document is a JSON file committed to a repository. Every save is a
//! commit. The blob `sha` returned by the API must accompany each update, so
//! the store remembers it alongside an in-memory copy of the document; after
//! the first fetch, loads are served from that cache.

use std::time::Duration;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Serialize};
use wp_config::GitHubConfig;
use wp_core::entities::TravelData;

use crate::error::StoreError;
use crate::store::DataStore;

const COMMIT_MESSAGE: &str = "Update travel data";

#[derive(Deserialize)]
struct ContentsResponse {
    content: String,
    sha: String,
}

#[derive(Serialize)]
struct UpdateRequest<'a> {
    message: &'a str,
    content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    sha: Option<&'a str>,
}

#[derive(Deserialize)]
struct UpdateResponse {
    content: UpdatedContent,
}

#[derive(Deserialize)]
struct UpdatedContent {
    sha: String,
}

#[derive(Debug)]
pub struct GitHubStore {
    http: reqwest::Client,
    token: String,
    repo: String,
    data_path: String,
    url: String,
    cache: Option<TravelData>,
    sha: Option<String>,
}

impl GitHubStore {
    /// Create a store for the document described by `config`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Http` if the HTTP client cannot be built.
    pub fn new(config: &GitHubConfig) -> Result<Self, StoreError> {
        let http = reqwest::Client::builder()
            .user_agent("waypoint/0.1")
            .timeout(Duration::from_secs(15))
            .build()?;
        Ok(Self {
            http,
            token: config.token.clone(),
            repo: config.repo.clone(),
            data_path: config.data_path.clone(),
            url: config.contents_url(),
            cache: None,
            sha: None,
        })
    }

    /// Blob sha of the last fetched or written revision.
    #[must_use]
    pub fn sha(&self) -> Option<&str> {
        self.sha.as_deref()
    }

    fn request(&self, method: reqwest::Method) -> reqwest::RequestBuilder {
        self.http
            .request(method, &self.url)
            .header(reqwest::header::AUTHORIZATION, format!("token {}", self.token))
            .header(reqwest::header::ACCEPT, "application/vnd.github.v3+json")
    }

    /// Fetch the document and its sha from GitHub, bypassing the cache.
    async fn fetch(&mut self) -> Result<TravelData, StoreError> {
        let resp = self.request(reqwest::Method::GET).send().await?;
        if resp.status() == reqwest::StatusCode::NOT_FOUND {
            tracing::info!(repo = %self.repo, path = %self.data_path, "document not in repository yet; starting empty");
            self.sha = None;
            return Ok(TravelData::default_trip());
        }
        let body: ContentsResponse = check_response(resp).await?.json().await?;
        let data = decode_content(&body.content)?;
        self.sha = Some(body.sha);
        Ok(data)
    }
}

impl DataStore for GitHubStore {
    async fn load(&mut self) -> Result<TravelData, StoreError> {
        if let Some(data) = &self.cache {
            return Ok(data.clone());
        }
        let data = self.fetch().await?;
        self.cache = Some(data.clone());
        Ok(data)
    }

    async fn save(&mut self, data: &TravelData) -> Result<(), StoreError> {
        if self.sha.is_none() {
            // Learn the current sha; a brand-new file has none and is created.
            self.fetch().await?;
        }

        let body = UpdateRequest {
            message: COMMIT_MESSAGE,
            content: encode_content(data)?,
            sha: self.sha.as_deref(),
        };
        let resp = self.request(reqwest::Method::PUT).json(&body).send().await?;
        let updated: UpdateResponse = match check_response(resp).await {
            Ok(resp) => resp.json().await?,
            Err(err @ StoreError::Api { status: 409 | 422, .. }) => {
                // The file moved under us; refetch on the next load.
                tracing::warn!(repo = %self.repo, path = %self.data_path, "stale sha; dropping cached document");
                self.cache = None;
                self.sha = None;
                return Err(err);
            }
            Err(err) => return Err(err),
        };
        tracing::debug!(sha = %updated.content.sha, "document committed");
        self.sha = Some(updated.content.sha);
        self.cache = Some(data.clone());
        Ok(())
    }

    fn describe(&self) -> String {
        format!("github {}:{}", self.repo, self.data_path)
    }
}

/// Decode the base64 `content` field (GitHub wraps it at 60 columns).
fn decode_content(content: &str) -> Result<TravelData, StoreError> {
    let compact: String = content.chars().filter(|c| !c.is_whitespace()).collect();
    let bytes = STANDARD
        .decode(compact)
        .map_err(|e| StoreError::Decode(format!("base64: {e}")))?;
    Ok(serde_json::from_slice(&bytes)?)
}

fn encode_content(data: &TravelData) -> Result<String, StoreError> {
    let json = serde_json::to_string_pretty(data)?;
    Ok(STANDARD.encode(json))
}

/// Map non-success statuses to `StoreError::Api`, keeping the body as message.
async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, StoreError> {
    if !resp.status().is_success() {
        return Err(StoreError::Api {
            status: resp.status().as_u16(),
            message: resp.text().await.unwrap_or_default(),
        });
    }
    Ok(resp)
}
