//! Executor that turns a [`Query`] into one GET through a [`Transport`].

use std::sync::Arc;

use tokio::task::JoinHandle;
use url::Url;

use crate::{
    config::Config,
    query::Query,
    transport::{RawResponse, ReqwestTransport, Transport},
    Error,
};

/// Runs queries against the Quandl API.
///
/// Holds no per-request state; clones share the transport and may be used
/// from any number of tasks at once.
#[derive(Clone)]
pub struct Client {
    config: Config,
    transport: Arc<dyn Transport>,
}

impl Client {
    /// Creates a client using the default reqwest transport.
    pub fn new(config: Config) -> Result<Self, Error> {
        Ok(Self::with_transport(config, Arc::new(ReqwestTransport::new()?)))
    }

    /// Creates a client with a custom transport. Used for testing with a fake.
    pub fn with_transport(config: Config, transport: Arc<dyn Transport>) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Canonical URL of `query` using this client's API key.
    pub fn url(&self, query: &impl Query) -> Result<Url, Error> {
        query.canonical_url(self.config.api_key())
    }

    /// Issues one GET for `query` and returns the raw response.
    ///
    /// The status code is not inspected; only transport failures are errors.
    pub async fn run(&self, query: &impl Query) -> Result<RawResponse, Error> {
        let url = self.url(query)?;
        self.fetch(url).await
    }

    /// Runs `query` on the tokio runtime and hands the outcome to
    /// `completion` exactly once, whether the request succeeds or not.
    ///
    /// Must be called from within a tokio runtime.
    pub fn spawn_run<Q, F>(&self, query: Q, completion: F) -> JoinHandle<()>
    where
        Q: Query + Send + 'static,
        F: FnOnce(Result<RawResponse, Error>) + Send + 'static,
    {
        let client = self.clone();
        tokio::spawn(async move {
            let url = client.url(&query);
            let result = match url {
                Ok(url) => client.fetch(url).await,
                Err(e) => Err(e),
            };
            completion(result);
        })
    }

    async fn fetch(&self, url: Url) -> Result<RawResponse, Error> {
        tracing::debug!("GET {}", redacted(&url));
        match self.transport.get(url).await {
            Ok(resp) => {
                tracing::debug!("{} -> {}", redacted(&resp.url), resp.status);
                Ok(resp)
            }
            Err(e) => {
                tracing::error!("Failed to get resource: {}", e);
                Err(e)
            }
        }
    }
}

/// Renders `url` with any `api_key` value masked, for logging.
fn redacted(url: &Url) -> String {
    let mut url = url.clone();
    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(name, value)| {
            let value = if name == "api_key" {
                "REDACTED".to_string()
            } else {
                value.into_owned()
            };
            (name.into_owned(), value)
        })
        .collect();
    if !pairs.is_empty() {
        url.query_pairs_mut().clear().extend_pairs(pairs);
    }
    url.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn redacted_masks_api_key_only() {
        let url = Url::parse("https://www.quandl.com/api/v3/databases/WIKI.json?api_key=secret&api_version=2015-04-09").unwrap();
        let shown = redacted(&url);
        assert!(!shown.contains("secret"));
        assert!(shown.contains("api_key=REDACTED"));
        assert!(shown.contains("api_version=2015-04-09"));
    }

    #[test]
    fn redacted_leaves_bare_url_alone() {
        let url = Url::parse("https://www.quandl.com/api/v3/databases/WIKI/data").unwrap();
        assert_eq!(redacted(&url), url.as_str());
    }
}
