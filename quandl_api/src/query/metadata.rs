use crate::Error;

use super::common::{path_segment, Query, QueryCommon, QueryParams};

/// Metadata of a single dataset.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MetadataQuery {
    pub common: QueryCommon,
    pub database_code: String,
    pub dataset_code: String,
}

impl Query for MetadataQuery {
    fn common(&self) -> &QueryCommon {
        &self.common
    }
    fn common_mut(&mut self) -> &mut QueryCommon {
        &mut self.common
    }
    fn path(&self) -> Result<String, Error> {
        Ok(format!(
            "datasets/{}/{}/metadata.{}",
            path_segment(&self.database_code)?,
            path_segment(&self.dataset_code)?,
            self.common.format
        ))
    }
    fn add_params(&self, _params: &mut QueryParams) {}
}

impl MetadataQuery {
    pub fn new(database_code: &str, dataset_code: &str) -> Self {
        Self {
            common: QueryCommon::default(),
            database_code: database_code.to_string(),
            dataset_code: dataset_code.to_string(),
        }
    }
}
