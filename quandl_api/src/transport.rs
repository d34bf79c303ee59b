//! The HTTP transport seam and its default reqwest implementation.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::HeaderMap;
use reqwest::StatusCode;
use url::Url;

use crate::Error;

/// Request timeout for the default transport.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Payload and response metadata of a completed GET.
///
/// Non-success statuses land here as well; the status is never interpreted.
#[derive(Clone, Debug)]
pub struct RawResponse {
    /// Final URL after redirects.
    pub url: Url,
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }
}

/// Performs a single HTTP GET.
///
/// Implement this to run queries through something other than reqwest, or
/// to substitute a fake in tests.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn get(&self, url: Url) -> Result<RawResponse, Error>;
}

/// Default [`Transport`] backed by a shared `reqwest::Client`.
#[derive(Clone, Debug)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Creates a transport with a 30-second request timeout.
    pub fn new() -> Result<Self, Error> {
        Self::with_timeout(REQUEST_TIMEOUT)
    }

    pub fn with_timeout(timeout: Duration) -> Result<Self, Error> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build HTTP client: {}", e);
                Error::from(e)
            })?;
        Ok(Self { client })
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn get(&self, url: Url) -> Result<RawResponse, Error> {
        let resp = self.client.get(url).send().await?;

        let status = resp.status();
        let headers = resp.headers().clone();
        let url = resp.url().clone();
        let body = resp.bytes().await?.to_vec();

        Ok(RawResponse {
            url,
            status,
            headers,
            body,
        })
    }
}
