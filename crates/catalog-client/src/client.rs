//! Reqwest-backed access to the catalogue API.
//!
//! [`CatalogApi`] is the seam the session drives; [`CatalogClient`] implements
//! it over HTTP. The client owns transport details only: URL building, JSON
//! bodies, and mapping statuses onto [`ClientError`].

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response, Url};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::ClientError;
use crate::model::{CreatedMovie, ErrorBody, Movie, MovieRequest};

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
const BODY_PREVIEW_CHARS: usize = 160;

/// Operations the catalogue service offers.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CatalogApi: Send + Sync {
    /// Every stored movie in id order.
    async fn list_movies(&self) -> Result<Vec<Movie>, ClientError>;

    /// One movie; unknown ids fail with status 404.
    async fn get_movie(&self, id: i32) -> Result<Movie, ClientError>;

    /// Store a new movie and return it with its assigned id.
    async fn create_movie(&self, request: &MovieRequest) -> Result<Movie, ClientError>;

    /// Replace every field of movie `id`.
    async fn update_movie(&self, id: i32, request: &MovieRequest) -> Result<(), ClientError>;

    /// Remove movie `id`.
    async fn delete_movie(&self, id: i32) -> Result<(), ClientError>;
}

/// HTTP client for one catalogue service.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    client: Client,
    base_url: Url,
}

impl CatalogClient {
    /// Client for the service at `base_url` with a 30 second request timeout.
    ///
    /// # Errors
    /// [`ClientError::InvalidUrl`] when `base_url` does not parse, and
    /// [`ClientError::Transport`] when the HTTP client cannot be built.
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT)
    }

    /// Client with an explicit per-request timeout.
    ///
    /// # Errors
    /// As for [`CatalogClient::new`].
    pub fn with_timeout(base_url: &str, timeout: Duration) -> Result<Self, ClientError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|err| ClientError::Transport {
                message: err.to_string(),
            })?;
        Ok(Self {
            client,
            base_url: normalise_base(base_url)?,
        })
    }

    /// Base URL every resource path is resolved against.
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> Result<Url, ClientError> {
        self.base_url
            .join(path)
            .map_err(|err| ClientError::InvalidUrl {
                message: err.to_string(),
            })
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response, ClientError> {
        let response = request.send().await.map_err(map_transport_error)?;
        let status = response.status();
        debug!(url = %response.url(), status = status.as_u16(), "catalogue response");
        if status.is_success() {
            return Ok(response);
        }
        let body = response.bytes().await.map_err(map_transport_error)?;
        Err(map_status_error(status.as_u16(), &body))
    }
}

/// A base without a trailing slash would lose its last segment on `join`.
fn normalise_base(raw: &str) -> Result<Url, ClientError> {
    let trimmed = raw.trim();
    let with_slash = if trimmed.ends_with('/') {
        trimmed.to_owned()
    } else {
        format!("{trimmed}/")
    };
    Url::parse(&with_slash).map_err(|err| ClientError::InvalidUrl {
        message: format!("{raw}: {err}"),
    })
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
    response.json().await.map_err(|err| ClientError::Decode {
        message: err.to_string(),
    })
}

fn map_transport_error(error: reqwest::Error) -> ClientError {
    ClientError::Transport {
        message: error.to_string(),
    }
}

fn map_status_error(status: u16, body: &[u8]) -> ClientError {
    let message = serde_json::from_slice::<ErrorBody>(body).map_or_else(
        |_| body_preview(body),
        |payload| payload.message,
    );
    ClientError::Api { status, message }
}

fn body_preview(body: &[u8]) -> String {
    let compact = String::from_utf8_lossy(body)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    if compact.chars().count() > BODY_PREVIEW_CHARS {
        let preview: String = compact.chars().take(BODY_PREVIEW_CHARS).collect();
        format!("{preview}...")
    } else {
        compact
    }
}

#[async_trait]
impl CatalogApi for CatalogClient {
    async fn list_movies(&self) -> Result<Vec<Movie>, ClientError> {
        let url = self.endpoint("movies")?;
        decode(self.send(self.client.get(url)).await?).await
    }

    async fn get_movie(&self, id: i32) -> Result<Movie, ClientError> {
        let url = self.endpoint(&format!("movies/{id}"))?;
        decode(self.send(self.client.get(url)).await?).await
    }

    async fn create_movie(&self, request: &MovieRequest) -> Result<Movie, ClientError> {
        let url = self.endpoint("movies")?;
        let created: CreatedMovie =
            decode(self.send(self.client.post(url).json(request)).await?).await?;
        Ok(created.movie)
    }

    async fn update_movie(&self, id: i32, request: &MovieRequest) -> Result<(), ClientError> {
        let url = self.endpoint(&format!("movies/{id}"))?;
        self.send(self.client.put(url).json(request)).await?;
        Ok(())
    }

    async fn delete_movie(&self, id: i32) -> Result<(), ClientError> {
        let url = self.endpoint(&format!("movies/{id}"))?;
        self.send(self.client.delete(url)).await?;
        Ok(())
    }
}
