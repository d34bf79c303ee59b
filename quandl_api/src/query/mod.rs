mod common;
pub use self::common::{
    encode_search_terms, Format, Query, QueryCommon, QueryParams, API_VERSION, BASE_URL,
};

mod data;
pub use self::data::{Collapse, DataQuery, SortOrder, Transform};

mod metadata;
pub use self::metadata::MetadataQuery;

mod dataset_search;
pub use self::dataset_search::DatasetSearchQuery;

mod database_search;
pub use self::database_search::DatabaseSearchQuery;

mod dataset_list;
pub use self::dataset_list::DatasetListQuery;

mod database_metadata;
pub use self::database_metadata::DatabaseMetadataQuery;

mod entire_database;
pub use self::entire_database::{DownloadType, EntireDatabaseQuery};
