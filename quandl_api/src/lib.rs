//! Typed request builders and a thin executor for the Quandl v3 REST API.
//!
//! Every API operation is a query struct implementing [`Query`], which
//! assembles a canonical URL from its fields. [`Client`] issues that URL as a
//! single GET through a pluggable [`Transport`] and returns the raw response.

mod client;
mod config;
pub mod dates;
mod errors;
mod query;
mod transport;
pub use self::client::Client;
pub use self::config::{Config, API_KEY_ENV};
pub use self::errors::Error;
pub use self::query::{
    encode_search_terms, Collapse, DataQuery, DatabaseMetadataQuery, DatabaseSearchQuery,
    DatasetListQuery, DatasetSearchQuery, DownloadType, EntireDatabaseQuery, Format,
    MetadataQuery, Query, QueryCommon, QueryParams, SortOrder, Transform, API_VERSION, BASE_URL,
};
pub use self::transport::{RawResponse, ReqwestTransport, Transport};
