use crate::Error;

use super::common::{path_segment, Query, QueryCommon, QueryParams};

/// Lists every dataset code in a database.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DatasetListQuery {
    pub common: QueryCommon,
    pub database_code: String,
}

impl Query for DatasetListQuery {
    fn common(&self) -> &QueryCommon {
        &self.common
    }
    fn common_mut(&mut self) -> &mut QueryCommon {
        &mut self.common
    }
    fn path(&self) -> Result<String, Error> {
        Ok(format!(
            "databases/{}/codes.{}",
            path_segment(&self.database_code)?,
            self.common.format
        ))
    }
    fn add_params(&self, _params: &mut QueryParams) {}
}

impl DatasetListQuery {
    pub fn new(database_code: &str) -> Self {
        Self {
            common: QueryCommon::default(),
            database_code: database_code.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::query::{DatasetListQuery, Format, Query};

    #[test]
    fn test_dataset_list_query() {
        insta::assert_snapshot!(
            DatasetListQuery::new("WIKI")
                .with_authenticated(false)
                .canonical_url(None)
                .unwrap(),
            @"https://www.quandl.com/api/v3/databases/WIKI/codes.json?api_version=2015-04-09"
        );

        insta::assert_snapshot!(
            DatasetListQuery::new("WIKI")
                .with_format(Format::Csv)
                .canonical_url(Some("KEY"))
                .unwrap(),
            @"https://www.quandl.com/api/v3/databases/WIKI/codes.csv?api_key=KEY&api_version=2015-04-09"
        );
    }
}
