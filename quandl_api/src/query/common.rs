//! Shared query infrastructure: the [`Query`] trait, [`QueryCommon`] fields,
//! [`Format`], and the parameter encoding used by every request variant.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS, NON_ALPHANUMERIC};
use url::Url;

use crate::Error;

/// Root every query path is resolved against.
pub const BASE_URL: &str = "https://www.quandl.com/api/v3/";

/// API version marker, always the last query parameter.
pub const API_VERSION: &str = "2015-04-09";

/// Characters that survive search-term encoding: the host-safe set minus
/// `&` and `=`, which would split the query, and `'`, which the URL parser
/// escapes in query strings of special schemes.
const SEARCH_TERMS: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'!')
    .remove(b'$')
    .remove(b'(')
    .remove(b')')
    .remove(b'*')
    .remove(b'+')
    .remove(b',')
    .remove(b'-')
    .remove(b'.')
    .remove(b':')
    .remove(b';')
    .remove(b'[')
    .remove(b']')
    .remove(b'_')
    .remove(b'~');

/// Characters escaped inside an ordinary query value.
const QUERY_VALUE: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'&')
    .add(b'\'')
    .add(b'+')
    .add(b'<')
    .add(b'=')
    .add(b'>');

/// Characters escaped inside a single path segment.
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'\\')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Trait implemented by all query builders. Provides canonical URL assembly
/// and shared builder methods for authentication and response format.
pub trait Query {
    /// Returns the common query fields.
    fn common(&self) -> &QueryCommon;

    /// Returns a mutable reference to the common query fields.
    fn common_mut(&mut self) -> &mut QueryCommon;

    /// Path relative to [`BASE_URL`], including the format extension if any.
    fn path(&self) -> Result<String, Error>;

    /// Appends this variant's optional parameters in their fixed order.
    fn add_params(&self, params: &mut QueryParams);

    /// Builds the canonical URL for the current field values.
    ///
    /// `api_key` is only read when the query is authenticated; an
    /// authenticated query without a key fails with [`Error::MissingApiKey`].
    fn canonical_url(&self, api_key: Option<&str>) -> Result<Url, Error> {
        let mut url = Url::parse(BASE_URL)?.join(&self.path()?)?;

        let mut params = QueryParams::default();
        if self.common().authenticated {
            let api_key = api_key.ok_or(Error::MissingApiKey)?;
            params.push("api_key", api_key);
        }
        self.add_params(&mut params);
        params.push("api_version", API_VERSION);

        if !params.is_empty() {
            url.set_query(Some(&params.to_string()));
        }
        Ok(url)
    }

    /// Sets the response format (path extension).
    fn with_format(mut self, format: Format) -> Self
    where
        Self: Sized,
    {
        self.common_mut().format = format;
        self
    }

    /// Sets whether the API key is sent with the request.
    fn with_authenticated(mut self, authenticated: bool) -> Self
    where
        Self: Sized,
    {
        self.common_mut().authenticated = authenticated;
        self
    }
}

/// Response payload format.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Format {
    Csv,
    /// The default.
    #[default]
    Json,
    Xml,
}
impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Format::Csv => "csv",
            Format::Json => "json",
            Format::Xml => "xml",
        })
    }
}
impl FromStr for Format {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "csv" => Ok(Format::Csv),
            "json" => Ok(Format::Json),
            "xml" => Ok(Format::Xml),
            _ => Err(()),
        }
    }
}

/// Fields shared by all query types.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct QueryCommon {
    /// Include `api_key` in the query string. Defaults to `true`.
    pub authenticated: bool,
    /// Response format. Defaults to JSON.
    pub format: Format,
}

impl Default for QueryCommon {
    fn default() -> QueryCommon {
        QueryCommon {
            authenticated: true,
            format: Format::Json,
        }
    }
}

/// Ordered list of already-encoded `name=value` pairs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(&'static str, String)>,
}

impl QueryParams {
    /// Appends a parameter, percent-encoding the value.
    pub fn push(&mut self, name: &'static str, value: &str) {
        self.pairs
            .push((name, utf8_percent_encode(value, QUERY_VALUE).to_string()));
    }

    /// Appends a parameter only when the value is present.
    pub fn push_opt<T: fmt::Display>(&mut self, name: &'static str, value: Option<T>) {
        if let Some(value) = value {
            self.push(name, &value.to_string());
        }
    }

    /// Appends search terms joined by `+`, encoded with the search-term set.
    pub fn push_search_terms(&mut self, name: &'static str, terms: &[String]) {
        self.pairs.push((name, encode_search_terms(terms)));
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Parameter names in emission order.
    pub fn names(&self) -> Vec<&'static str> {
        self.pairs.iter().map(|(name, _)| *name).collect()
    }
}

impl fmt::Display for QueryParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (name, value)) in self.pairs.iter().enumerate() {
            if i > 0 {
                f.write_str("&")?;
            }
            write!(f, "{}={}", name, value)?;
        }
        Ok(())
    }
}

/// Joins search terms with a literal `+` and percent-encodes the result.
pub fn encode_search_terms(terms: &[String]) -> String {
    utf8_percent_encode(&terms.join("+"), SEARCH_TERMS).to_string()
}

/// Escapes a database or dataset code for use as one path segment.
///
/// `.` and `..` are rejected: URL parsing resolves them, and their
/// percent-encoded forms, as dot-segments.
pub(crate) fn path_segment(code: &str) -> Result<Cow<'_, str>, Error> {
    if code == "." || code == ".." {
        return Err(Error::InvalidCode(code.to_string()));
    }
    Ok(utf8_percent_encode(code, PATH_SEGMENT).into())
}
