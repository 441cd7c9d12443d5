//! Catalog client trait

use crate::error::ClientError;
use crate::types::{Movie, User};
use async_trait::async_trait;

/// Client for the read-only demo data sources
///
/// Both calls are one-shot GETs: no retry, backoff or in-flight
/// de-duplication. Implementations must be `Send + Sync` so a single
/// instance can be shared across spawned fetch tasks.
///
/// # Example
///
/// ```rust,ignore
/// async fn titles(client: &dyn CatalogClient) -> Result<Vec<String>, ClientError> {
///     Ok(client.fetch_movies().await?.into_iter().map(|m| m.title).collect())
/// }
/// ```
#[async_trait]
pub trait CatalogClient: Send + Sync {
    /// Fetch the movie list from the catalog envelope (`data.movies`)
    async fn fetch_movies(&self) -> Result<Vec<Movie>, ClientError>;

    /// Fetch the flat user list
    async fn fetch_users(&self) -> Result<Vec<User>, ClientError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct StubClient;

    #[async_trait]
    impl CatalogClient for StubClient {
        async fn fetch_movies(&self) -> Result<Vec<Movie>, ClientError> {
            Ok(vec![Movie {
                id: 7,
                title: "Forrest Gump".to_string(),
                ..Movie::default()
            }])
        }

        async fn fetch_users(&self) -> Result<Vec<User>, ClientError> {
            Ok(Vec::new())
        }
    }

    #[tokio::test]
    async fn test_trait_object_dispatch() {
        let client: Box<dyn CatalogClient> = Box::new(StubClient);
        let movies = client.fetch_movies().await.unwrap();
        assert_eq!(movies.len(), 1);
        assert_eq!(movies[0].title, "Forrest Gump");
        assert!(client.fetch_users().await.unwrap().is_empty());
    }
}
