//! HTTP client for OMDb-compatible movie directories.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use super::backend::MovieDirectory;
use super::models::{DetailRecord, SearchEnvelope};
use crate::domain::error::{FilmVillaError, Result};
use crate::domain::{MovieDetail, SearchPage};
use crate::Config;

pub(crate) const USER_AGENT: &str = concat!("filmvilla/", env!("CARGO_PKG_VERSION"));

/// Movie directory reached over HTTP.
///
/// Every request is a `GET` on the base URL with the API key and the request
/// parameters in the query string.
#[derive(Debug, Clone)]
pub struct OmdbClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl OmdbClient {
    /// Create a client around an existing `reqwest::Client`.
    pub fn with_client(client: Client, base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }

    /// Create a client from configuration, applying its request timeout.
    ///
    /// # Errors
    ///
    /// Returns [`FilmVillaError::Config`] when no API key is configured and
    /// [`FilmVillaError::Http`] if the HTTP client cannot be built.
    pub fn from_config(config: &Config) -> Result<Self> {
        let api_key = config
            .api_key
            .clone()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| {
                FilmVillaError::Config(
                    "api_key is not set (use --api-key, OMDB_API_KEY or the config file)".to_string(),
                )
            })?;

        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        Ok(Self::with_client(client, config.base_url.clone(), api_key))
    }

    async fn get<T: serde::de::DeserializeOwned>(&self, params: &[(&str, &str)]) -> Result<T> {
        let response = self
            .client
            .get(&self.base_url)
            .query(&[("apikey", self.api_key.as_str())])
            .query(params)
            .send()
            .await?;

        Self::handle_response(response).await
    }

    async fn handle_response<T: serde::de::DeserializeOwned>(response: reqwest::Response) -> Result<T> {
        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(FilmVillaError::Api {
                status: status.as_u16(),
                message: body,
            });
        }
        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl MovieDirectory for OmdbClient {
    #[tracing::instrument(level = "debug", skip(self))]
    async fn search_titles(&self, query: &str, page: u32) -> Result<SearchPage> {
        let page_param = page.to_string();
        let envelope: SearchEnvelope = self.get(&[("s", query), ("page", page_param.as_str())]).await?;
        let page = envelope.into_search_page()?;

        tracing::debug!(
            items = page.items.len(),
            total_results = page.total_results,
            "search page received"
        );
        Ok(page)
    }

    #[tracing::instrument(level = "debug", skip(self))]
    async fn fetch_detail(&self, id: &str) -> Result<MovieDetail> {
        let record: DetailRecord = self.get(&[("i", id), ("plot", "full")]).await?;
        record.into_detail()
    }
}
