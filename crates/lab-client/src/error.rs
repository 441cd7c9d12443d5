use thiserror::Error;

/// Errors produced by a catalog fetch
///
/// Callers log and swallow these; nothing is retried.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Connection, timeout or non-success HTTP status
    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Body was not JSON of the expected outer shape
    #[error("could not decode response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

impl ClientError {
    /// URL of the request that failed
    pub fn url(&self) -> &str {
        match self {
            Self::Request { url, .. } | Self::Decode { url, .. } => url,
        }
    }
}
