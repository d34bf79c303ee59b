use std::str::FromStr;

use crate::Error;

use super::common::{path_segment, Query, QueryCommon, QueryParams};

/// Bulk export of a whole database.
///
/// The export is always a zipped CSV, so unlike every other query the path
/// carries no format extension and [`QueryCommon::format`] is ignored.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EntireDatabaseQuery {
    pub common: QueryCommon,
    pub database_code: String,
    pub download_type: Option<DownloadType>,
}

impl Query for EntireDatabaseQuery {
    fn common(&self) -> &QueryCommon {
        &self.common
    }
    fn common_mut(&mut self) -> &mut QueryCommon {
        &mut self.common
    }
    fn path(&self) -> Result<String, Error> {
        Ok(format!("databases/{}/data", path_segment(&self.database_code)?))
    }
    fn add_params(&self, params: &mut QueryParams) {
        params.push_opt("download_type", self.download_type);
    }
}

impl EntireDatabaseQuery {
    pub fn new(database_code: &str) -> Self {
        Self {
            common: QueryCommon::default(),
            database_code: database_code.to_string(),
            download_type: None,
        }
    }

    pub fn with_download_type(mut self, download_type: DownloadType) -> Self {
        self.download_type = Some(download_type);
        self
    }
}

/// Whether the export holds only the latest changes or the full history.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DownloadType {
    Partial,
    Complete,
}
impl std::fmt::Display for DownloadType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                DownloadType::Partial => "partial",
                DownloadType::Complete => "complete",
            }
        )
    }
}
impl FromStr for DownloadType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "partial" => Ok(DownloadType::Partial),
            "complete" => Ok(DownloadType::Complete),
            _ => Err(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::query::{DownloadType, EntireDatabaseQuery, Format, Query};

    #[test]
    fn test_entire_database_query() {
        let query = EntireDatabaseQuery::new("WIKI").with_authenticated(false);

        insta::assert_snapshot!(
            query.canonical_url(None).unwrap(),
            @"https://www.quandl.com/api/v3/databases/WIKI/data?api_version=2015-04-09"
        );

        insta::assert_snapshot!(
            query
                .clone()
                .with_download_type(DownloadType::Partial)
                .canonical_url(None)
                .unwrap(),
            @"https://www.quandl.com/api/v3/databases/WIKI/data?download_type=partial&api_version=2015-04-09"
        );
    }

    #[test]
    fn format_does_not_add_extension() {
        let url = EntireDatabaseQuery::new("WIKI")
            .with_format(Format::Xml)
            .with_download_type(DownloadType::Complete)
            .canonical_url(Some("KEY"))
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://www.quandl.com/api/v3/databases/WIKI/data?api_key=KEY&download_type=complete&api_version=2015-04-09"
        );
    }
}
