//! reqwest-based catalog client
//!
//! Direct implementation of the `CatalogClient` trait. Each call is a single
//! GET whose body is decoded with serde_json.

use crate::client::CatalogClient;
use crate::error::ClientError;
use crate::types::{Movie, MovieEnvelope, User};
use async_trait::async_trait;
use log::debug;
use serde::de::DeserializeOwned;
use std::time::Duration;

/// HTTP client for the movie catalog and user list endpoints
#[derive(Debug, Clone)]
pub struct HttpCatalogClient {
    http: reqwest::Client,
    catalog_url: String,
    users_url: String,
}

impl HttpCatalogClient {
    /// Create a new client for the given endpoints
    pub fn new(
        catalog_url: impl Into<String>,
        users_url: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, ClientError> {
        let catalog_url = catalog_url.into();
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|source| ClientError::Request {
                url: catalog_url.clone(),
                source,
            })?;

        Ok(Self {
            http,
            catalog_url,
            users_url: users_url.into(),
        })
    }

    pub fn catalog_url(&self) -> &str {
        &self.catalog_url
    }

    pub fn users_url(&self) -> &str {
        &self.users_url
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, ClientError> {
        let request_error = |source| ClientError::Request {
            url: url.to_string(),
            source,
        };

        let body = self
            .http
            .get(url)
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(request_error)?
            .text()
            .await
            .map_err(request_error)?;

        debug!("GET {} returned {} bytes", url, body.len());

        serde_json::from_str(&body).map_err(|source| ClientError::Decode {
            url: url.to_string(),
            source,
        })
    }
}

#[async_trait]
impl CatalogClient for HttpCatalogClient {
    async fn fetch_movies(&self) -> Result<Vec<Movie>, ClientError> {
        debug!("Fetching movies from {}", self.catalog_url);
        let envelope: MovieEnvelope = self.get_json(&self.catalog_url).await?;
        Ok(envelope.into_movies())
    }

    async fn fetch_users(&self) -> Result<Vec<User>, ClientError> {
        debug!("Fetching users from {}", self.users_url);
        self.get_json(&self.users_url).await
    }
}
