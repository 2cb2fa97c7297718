use std::time::Duration;

use async_trait::async_trait;
use cinedex_model::{Credits, Movie, MovieDetails, PaginatedResponse, VideoList};
use serde::de::DeserializeOwned;
use tracing::debug;

use super::{MetadataProvider, ProviderError};
use crate::config::ProviderConfig;

/// HTTP client for the TMDB-shaped metadata API.
///
/// Every request carries the configured `api_key` and `language` query
/// parameters. The client enforces a bounded request timeout so a hung
/// request resolves to an error instead of suspending its caller forever.
#[derive(Debug, Clone)]
pub struct TmdbProvider {
    client: reqwest::Client,
    config: ProviderConfig,
}

impl TmdbProvider {
    pub fn new(config: ProviderConfig) -> Result<Self, ProviderError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;
        Ok(Self { client, config })
    }

    /// Reuse an existing client (shared connection pool).
    pub fn with_client(client: reqwest::Client, config: ProviderConfig) -> Self {
        Self { client, config }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url, path)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ProviderError> {
        debug!(path, "provider request");
        let response = self
            .client
            .get(self.url(path))
            .query(&[
                ("api_key", self.config.api_key.as_str()),
                ("language", self.config.language.as_str()),
            ])
            .query(query)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(ProviderError::Api {
                status: status.as_u16(),
                message: body,
            });
        }
        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl MetadataProvider for TmdbProvider {
    async fn popular(
        &self,
        page: u32,
    ) -> Result<PaginatedResponse<Movie>, ProviderError> {
        self.get_json("/movie/popular", &[("page", page.to_string())])
            .await
    }

    async fn search(
        &self,
        query: &str,
        page: u32,
    ) -> Result<PaginatedResponse<Movie>, ProviderError> {
        self.get_json(
            "/search/movie",
            &[("query", query.to_string()), ("page", page.to_string())],
        )
        .await
    }

    async fn details(
        &self,
        movie_id: i64,
    ) -> Result<MovieDetails, ProviderError> {
        self.get_json(&format!("/movie/{movie_id}"), &[]).await
    }

    async fn credits(&self, movie_id: i64) -> Result<Credits, ProviderError> {
        self.get_json(&format!("/movie/{movie_id}/credits"), &[])
            .await
    }

    async fn videos(&self, movie_id: i64) -> Result<VideoList, ProviderError> {
        self.get_json(&format!("/movie/{movie_id}/videos"), &[])
            .await
    }
}
