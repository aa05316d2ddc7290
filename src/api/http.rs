//! HTTP implementation of the movie service.
//!
//! Talks to the REST backend with a shared `reqwest` client. Transport
//! failures surface as [`MarqueeError::Http`], non-2xx responses as
//! [`MarqueeError::ApiStatus`]; callers collapse both into one user-facing
//! error state.

use std::time::Duration;

use reqwest::{Client, StatusCode};
use url::Url;

use crate::api::{
    BackendMovie, CatalogQuery, CatalogResponse, MovieDetail, MovieDraft, MovieService,
    MovieSummary,
};
use crate::config::Config;
use crate::error::{MarqueeError, Result};

pub struct HttpMovieService {
    client: Client,
    base_url: Url,
}

impl HttpMovieService {
    /// Create a service against the given base URL with a request timeout.
    pub fn new(base_url: &str, timeout_secs: u64) -> Result<Self> {
        let mut base_url = Url::parse(base_url).map_err(|e| {
            MarqueeError::Config(format!("invalid server URL '{}': {}", base_url, e))
        })?;

        // A trailing slash keeps join() from eating the last path segment
        if !base_url.path().ends_with('/') {
            base_url.set_path(&format!("{}/", base_url.path()));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(timeout_secs.min(10)))
            .build()?;

        Ok(Self { client, base_url })
    }

    /// Create a service from the application configuration
    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(&config.server_url(), config.request_timeout)
    }

    fn movies_url(&self) -> Result<Url> {
        self.base_url
            .join("movies")
            .map_err(|e| MarqueeError::Config(format!("invalid movies URL: {}", e)))
    }

    fn movie_url(&self, id: &str) -> Result<Url> {
        self.base_url
            .join(&format!("movies/{}", id))
            .map_err(|e| MarqueeError::Config(format!("invalid movie URL for '{}': {}", id, e)))
    }
}

#[async_trait::async_trait]
impl MovieService for HttpMovieService {
    async fn fetch_movies(&self, query: &CatalogQuery) -> Result<Vec<MovieSummary>> {
        let url = self.movies_url()?;
        tracing::debug!(?query, "fetching catalog");

        let response = self
            .client
            .get(url)
            .query(&query.to_query_pairs())
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(%status, "catalog fetch failed");
            return Err(MarqueeError::ApiStatus(status.as_u16()));
        }

        let body: CatalogResponse = response.json().await?;
        Ok(body.data.iter().map(BackendMovie::to_summary).collect())
    }

    async fn fetch_movie(&self, id: &str) -> Result<MovieDetail> {
        let url = self.movie_url(id)?;
        tracing::debug!(%id, "fetching movie");

        let response = self.client.get(url).send().await?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(MarqueeError::MovieNotFound(id.to_string()));
        }
        if !status.is_success() {
            tracing::warn!(%id, %status, "movie fetch failed");
            return Err(MarqueeError::ApiStatus(status.as_u16()));
        }

        let movie: BackendMovie = response.json().await?;
        Ok(movie.to_detail())
    }

    async fn create_movie(&self, draft: &MovieDraft) -> Result<MovieDetail> {
        let url = self.movies_url()?;
        let mut payload = draft.to_payload()?;
        // The backend assigns ids on create
        payload.id = None;

        let response = self.client.post(url).json(&payload).send().await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(%status, "movie create failed");
            return Err(MarqueeError::ApiStatus(status.as_u16()));
        }

        let movie: BackendMovie = response.json().await?;
        Ok(movie.to_detail())
    }

    async fn update_movie(&self, draft: &MovieDraft) -> Result<MovieDetail> {
        let url = self.movies_url()?;
        let payload = draft.to_payload()?;
        if payload.id.is_none() {
            return Err(MarqueeError::Api("update requires a movie id".to_string()));
        }

        let response = self.client.put(url).json(&payload).send().await?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            let id = payload.id.unwrap_or_default().to_string();
            return Err(MarqueeError::MovieNotFound(id));
        }
        if !status.is_success() {
            tracing::warn!(%status, "movie update failed");
            return Err(MarqueeError::ApiStatus(status.as_u16()));
        }

        let movie: BackendMovie = response.json().await?;
        Ok(movie.to_detail())
    }

    async fn delete_movie(&self, id: &str) -> Result<()> {
        let url = self.movie_url(id)?;
        tracing::debug!(%id, "deleting movie");

        let response = self.client.delete(url).send().await?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(MarqueeError::MovieNotFound(id.to_string()));
        }
        if !status.is_success() {
            tracing::warn!(%id, %status, "movie delete failed");
            return Err(MarqueeError::ApiStatus(status.as_u16()));
        }

        Ok(())
    }
}
