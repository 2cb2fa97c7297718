//! The upstream movie-metadata provider.

use async_trait::async_trait;
use cinedex_model::{Credits, Movie, MovieDetails, PaginatedResponse, VideoList};

mod tmdb;

pub use tmdb::TmdbProvider;

/// Failure talking to the provider.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("decode error: {0}")]
    Decode(#[from] serde_json::Error),
}

/// The external metadata service, reduced to the five query shapes the
/// catalog store issues.
///
/// `details` returns the base record only; its credits and videos blocks
/// default to empty and are merged in from the other two calls by the store.
#[async_trait]
pub trait MetadataProvider: Send + Sync {
    /// One page of the popular-movies listing.
    async fn popular(
        &self,
        page: u32,
    ) -> Result<PaginatedResponse<Movie>, ProviderError>;

    /// One page of search results for a text query.
    async fn search(
        &self,
        query: &str,
        page: u32,
    ) -> Result<PaginatedResponse<Movie>, ProviderError>;

    /// Base detail record for one movie.
    async fn details(
        &self,
        movie_id: i64,
    ) -> Result<MovieDetails, ProviderError>;

    /// Ordered cast and crew for one movie.
    async fn credits(&self, movie_id: i64) -> Result<Credits, ProviderError>;

    /// Ordered video records for one movie.
    async fn videos(&self, movie_id: i64) -> Result<VideoList, ProviderError>;
}
