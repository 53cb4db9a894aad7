//! Outbound fetch client.

use reqwest::header::CONTENT_TYPE;
use reqwest::StatusCode;

/// Failure of the outbound fetch.
///
/// DNS failures, connection refusal, TLS errors, malformed targets, and
/// body-read errors all collapse into this one kind; the display text of
/// the underlying client error is what callers surface.
#[derive(Debug, thiserror::Error)]
#[error("{0}")]
pub struct FetchError(#[from] reqwest::Error);

/// Result of a completed upstream fetch.
///
/// Constructed once and handed to the transport layer as-is.
#[derive(Debug)]
pub struct FetchedResponse {
    /// Upstream status code, passed through unchanged.
    pub status: StatusCode,

    /// Upstream `Content-Type` header, when present and readable.
    pub content_type: Option<String>,

    /// Full upstream body, decoded as text.
    pub body: String,
}

/// Outbound HTTP client wrapper.
#[derive(Clone)]
pub struct Fetcher {
    client: reqwest::Client,
}

impl Fetcher {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }

    /// Issue a GET to the caller-supplied target and read the full reply.
    pub async fn fetch(&self, target: &str) -> Result<FetchedResponse, FetchError> {
        let response = self.client.get(target).send().await?;

        let status = response.status();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);
        let body = response.text().await?;

        Ok(FetchedResponse {
            status,
            content_type,
            body,
        })
    }
}

impl Default for Fetcher {
    fn default() -> Self {
        Self::new()
    }
}
