use crate::Error;

use super::common::{path_segment, Query, QueryCommon, QueryParams};

/// Metadata of a whole database.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DatabaseMetadataQuery {
    pub common: QueryCommon,
    pub database_code: String,
}

impl Query for DatabaseMetadataQuery {
    fn common(&self) -> &QueryCommon {
        &self.common
    }
    fn common_mut(&mut self) -> &mut QueryCommon {
        &mut self.common
    }
    fn path(&self) -> Result<String, Error> {
        Ok(format!(
            "databases/{}.{}",
            path_segment(&self.database_code)?,
            self.common.format
        ))
    }
    fn add_params(&self, _params: &mut QueryParams) {}
}

impl DatabaseMetadataQuery {
    pub fn new(database_code: &str) -> Self {
        Self {
            common: QueryCommon::default(),
            database_code: database_code.to_string(),
        }
    }
}
