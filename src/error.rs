use std::path::PathBuf;
use thiserror::Error;
use crate::models::entry_detail::EntryDetail;

/// Failures talking to the Places web service.
#[derive(Debug, Error)]
pub enum PlacesApiError {
    /// Network or TLS failure from the underlying HTTP client. The request
    /// URL is stripped since it carries the API key.
    #[error("HTTP error: {0}")]
    Http(#[source] reqwest::Error),

    #[error("{endpoint} answered with HTTP status {status}")]
    Status {
        endpoint: &'static str,
        status: reqwest::StatusCode,
    },

    /// The envelope `status` was something other than `OK`/`ZERO_RESULTS`,
    /// e.g. `REQUEST_DENIED` for a bad key.
    #[error("{endpoint} returned {status}: {message}")]
    ApiStatus {
        endpoint: &'static str,
        status: String,
        message: String,
    },

    #[error("invalid Places API base URL '{0}'")]
    InvalidBaseUrl(String),

    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },
}

impl From<reqwest::Error> for PlacesApiError {
    fn from(e: reqwest::Error) -> Self {
        Self::Http(e.without_url())
    }
}

#[derive(Debug, Error)]
#[error("search failed after {pages_fetched} page(s): {source}")]
pub struct SearchError {
    pub pages_fetched: usize,
    #[source]
    pub source: PlacesApiError,
}

/// Detail lookup for `place_id` failed; `partial` holds the entries that
/// were enriched before it, in search order.
#[derive(Debug, Error)]
#[error("detail lookup for place {place_id} failed after {} entries: {source}", .partial.len())]
pub struct EnrichmentError {
    pub place_id: String,
    pub partial: Vec<EntryDetail>,
    #[source]
    pub source: PlacesApiError,
}

#[derive(Debug, Error)]
pub enum PersistError {
    #[error("failed to serialize entries: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("failed to write {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
