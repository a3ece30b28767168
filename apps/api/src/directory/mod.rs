//! Candidate Directory — the external service holding the full candidate pool.
//!
//! The matcher re-fetches the whole pool on every request; there is no
//! local cache, pagination or server-side filtering.

pub mod models;

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use thiserror::Error;
use tracing::{debug, warn};

pub use models::{CandidateRecord, DirectoryResponse};

#[derive(Debug, Error)]
pub enum DirectoryError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("directory did not respond within {0:?}")]
    Timeout(Duration),

    #[error("directory returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("directory reported an unsuccessful response")]
    Unsuccessful,

    #[error("could not decode directory response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Source of candidate records. Implement this to swap the backing
/// directory without touching the handler or the matching pipeline.
///
/// Carried in `AppState` as `Arc<dyn CandidateDirectory>`.
#[async_trait]
pub trait CandidateDirectory: Send + Sync {
    async fn fetch_all(&self) -> Result<Vec<CandidateRecord>, DirectoryError>;
}

/// Directory backed by the candidate API over HTTP. One GET per call, no retries.
#[derive(Clone)]
pub struct HttpCandidateDirectory {
    client: Client,
    url: String,
    api_key: Option<String>,
    timeout: Duration,
}

impl HttpCandidateDirectory {
    pub fn new(
        url: String,
        api_key: Option<String>,
        timeout: Duration,
    ) -> Result<Self, DirectoryError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            url,
            api_key,
            timeout,
        })
    }

    fn classify(&self, err: reqwest::Error) -> DirectoryError {
        if err.is_timeout() {
            DirectoryError::Timeout(self.timeout)
        } else {
            DirectoryError::Http(err)
        }
    }
}

#[async_trait]
impl CandidateDirectory for HttpCandidateDirectory {
    async fn fetch_all(&self) -> Result<Vec<CandidateRecord>, DirectoryError> {
        let mut request = self.client.get(&self.url);
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        let response = request.send().await.map_err(|e| self.classify(e))?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("Candidate directory returned {status}: {body}");
            return Err(DirectoryError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response.bytes().await.map_err(|e| self.classify(e))?;
        let payload: DirectoryResponse = serde_json::from_slice(&bytes)?;

        if !payload.success {
            return Err(DirectoryError::Unsuccessful);
        }

        debug!("Fetched {} candidates from directory", payload.data.len());
        Ok(payload.data)
    }
}
