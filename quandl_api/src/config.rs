//! API key configuration.

use std::fmt;

/// Environment variable read by [`Config::from_env`].
pub const API_KEY_ENV: &str = "QUANDL_API_KEY";

/// Client configuration. The API key is only sent for authenticated queries.
#[derive(Clone, Default)]
pub struct Config {
    api_key: Option<String>,
}

impl Config {
    pub fn new(api_key: &str) -> Self {
        Self {
            api_key: non_empty(api_key),
        }
    }

    /// A configuration without an API key. Only unauthenticated queries will build.
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Reads the key from `QUANDL_API_KEY`. An unset or empty variable yields
    /// an anonymous configuration.
    pub fn from_env() -> Self {
        Self {
            api_key: std::env::var(API_KEY_ENV)
                .ok()
                .and_then(|val| non_empty(&val)),
        }
    }

    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

fn non_empty(val: &str) -> Option<String> {
    let val = val.trim();
    (!val.is_empty()).then(|| val.to_string())
}
