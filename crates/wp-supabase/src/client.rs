//! PostgREST client for the Supabase tables.

use std::time::Duration;

use serde::Serialize;
use serde::de::DeserializeOwned;
use wp_config::SupabaseConfig;

use crate::error::SupabaseError;
use crate::http::check_response;
use crate::rows::{PlaceRow, QuickLinkRow};

const PLACES: &str = "places";
const QUICK_LINKS: &str = "quick_links";

/// Authenticated client for one Supabase project.
///
/// Uses the service-role key, which bypasses row-level security.
#[derive(Debug, Clone)]
pub struct SupabaseClient {
    http: reqwest::Client,
    rest_url: String,
    key: String,
}

impl SupabaseClient {
    /// Create a client for `url` (the project URL, without `/rest/v1`).
    ///
    /// # Errors
    ///
    /// Returns `SupabaseError::Http` if the HTTP client cannot be built.
    pub fn new(url: &str, key: impl Into<String>) -> Result<Self, SupabaseError> {
        let http = reqwest::Client::builder()
            .user_agent("waypoint/0.1")
            .timeout(Duration::from_secs(15))
            .build()?;
        Ok(Self {
            http,
            rest_url: format!("{}/rest/v1", url.trim_end_matches('/')),
            key: key.into(),
        })
    }

    /// Create a client from the `supabase` config section.
    ///
    /// # Errors
    ///
    /// Returns `SupabaseError::NotConfigured` if the URL or key is missing.
    pub fn from_config(config: &SupabaseConfig) -> Result<Self, SupabaseError> {
        if !config.is_configured() {
            return Err(SupabaseError::NotConfigured);
        }
        Self::new(&config.url, config.service_role_key.clone())
    }

    fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        self.http
            .request(method, format!("{}/{path}", self.rest_url))
            .header("apikey", &self.key)
            .bearer_auth(&self.key)
    }

    async fn insert<T>(&self, table: &str, row: &T) -> Result<T, SupabaseError>
    where
        T: Serialize + DeserializeOwned,
    {
        let resp = self
            .request(reqwest::Method::POST, table)
            .header("Prefer", "return=representation")
            .json(row)
            .send()
            .await?;
        let mut rows: Vec<T> = check_response(resp).await?.json().await?;
        if rows.is_empty() {
            return Err(SupabaseError::Parse(format!(
                "insert into {table} returned no row"
            )));
        }
        Ok(rows.swap_remove(0))
    }

    async fn select<T: DeserializeOwned>(
        &self,
        table: &str,
        order: &str,
    ) -> Result<Vec<T>, SupabaseError> {
        let resp = self
            .request(reqwest::Method::GET, &format!("{table}?select=*&order={order}"))
            .send()
            .await?;
        Ok(check_response(resp).await?.json().await?)
    }

    /// Insert a place row and return it as stored (with `id` and `created_at`).
    ///
    /// # Errors
    ///
    /// Returns [`SupabaseError`] if the request fails or is rejected.
    pub async fn insert_place(&self, row: &PlaceRow) -> Result<PlaceRow, SupabaseError> {
        self.insert(PLACES, row).await
    }

    /// Insert a quick-link row and return it as stored.
    ///
    /// # Errors
    ///
    /// Returns [`SupabaseError`] if the request fails or is rejected.
    pub async fn insert_quick_link(&self, row: &QuickLinkRow) -> Result<QuickLinkRow, SupabaseError> {
        self.insert(QUICK_LINKS, row).await
    }

    /// All places, oldest first.
    ///
    /// # Errors
    ///
    /// Returns [`SupabaseError`] if the request fails or a row cannot be parsed.
    pub async fn list_places(&self) -> Result<Vec<PlaceRow>, SupabaseError> {
        self.select(PLACES, "created_at").await
    }

    /// All quick links by sort order, ties broken by creation time.
    ///
    /// # Errors
    ///
    /// Returns [`SupabaseError`] if the request fails or a row cannot be parsed.
    pub async fn list_quick_links(&self) -> Result<Vec<QuickLinkRow>, SupabaseError> {
        self.select(QUICK_LINKS, "sort_order,created_at").await
    }
}
