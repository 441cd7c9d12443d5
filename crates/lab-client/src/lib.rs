//! Read-only HTTP client for the catalog demos
//!
//! This crate provides a trait-based client for the two external data
//! sources consumed by reducer-lab:
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │              CatalogClient trait                 │
//! │  - fetch_movies()                                │
//! │  - fetch_users()                                 │
//! └─────────────────────────────────────────────────┘
//!                        │
//!                        ▼
//!              ┌─────────────────────┐
//!              │ HttpCatalogClient   │
//!              │ (reqwest, one-shot) │
//!              └─────────────────────┘
//! ```
//!
//! Payloads are consumed as-is: every field is optional on the wire and
//! missing values decode to empty placeholders rather than errors.
//!
//! # Example
//!
//! ```rust,no_run
//! use lab_client::{CatalogClient, HttpCatalogClient};
//! use std::time::Duration;
//!
//! # async fn example() -> Result<(), lab_client::ClientError> {
//! let client = HttpCatalogClient::new(
//!     "https://yts.mx/api/v2/list_movies.json",
//!     "https://jsonplaceholder.typicode.com/users",
//!     Duration::from_secs(10),
//! )?;
//! let movies = client.fetch_movies().await?;
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;
pub mod http_client;
pub mod types;

pub use client::CatalogClient;
pub use error::ClientError;
pub use http_client::HttpCatalogClient;
pub use types::{Movie, MovieEnvelope, User};
