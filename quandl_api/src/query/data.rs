use std::str::FromStr;

use chrono::NaiveDate;

use crate::{dates::format_date, Error};

use super::common::{path_segment, Query, QueryCommon, QueryParams};

/// Time-series data for one dataset, or its metadata when `get_metadata` is set.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DataQuery {
    pub common: QueryCommon,
    pub database_code: String,
    pub dataset_code: String,
    /// Drops the `/data` path segment, returning dataset metadata alongside the rows.
    pub get_metadata: bool,
    pub limit: Option<u32>,
    pub rows: Option<u32>,
    /// Column 0 is the date column and is always returned.
    pub column_index: Option<u32>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub order: Option<SortOrder>,
    pub collapse: Option<Collapse>,
    pub transform: Option<Transform>,
    /// Only honoured for CSV output.
    pub exclude_column_names: bool,
}

impl Query for DataQuery {
    fn common(&self) -> &QueryCommon {
        &self.common
    }
    fn common_mut(&mut self) -> &mut QueryCommon {
        &mut self.common
    }
    fn path(&self) -> Result<String, Error> {
        let mut path = format!(
            "datasets/{}/{}",
            path_segment(&self.database_code)?,
            path_segment(&self.dataset_code)?
        );
        if !self.get_metadata {
            path.push_str("/data");
        }
        Ok(format!("{}.{}", path, self.common.format))
    }
    fn add_params(&self, params: &mut QueryParams) {
        params.push_opt("limit", self.limit);
        params.push_opt("rows", self.rows);
        params.push_opt("column_index", self.column_index);
        params.push_opt("start_date", self.start_date.map(format_date));
        params.push_opt("end_date", self.end_date.map(format_date));
        params.push_opt("order", self.order);
        params.push_opt("collapse", self.collapse);
        params.push_opt("transform", self.transform);
        if self.exclude_column_names {
            params.push("exclude_column_names", "true");
        }
    }
}

impl DataQuery {
    pub fn new(database_code: &str, dataset_code: &str) -> Self {
        Self {
            common: QueryCommon::default(),
            database_code: database_code.to_string(),
            dataset_code: dataset_code.to_string(),
            get_metadata: false,
            limit: None,
            rows: None,
            column_index: None,
            start_date: None,
            end_date: None,
            order: None,
            collapse: None,
            transform: None,
            exclude_column_names: false,
        }
    }

    pub fn with_metadata(mut self, get_metadata: bool) -> Self {
        self.get_metadata = get_metadata;
        self
    }
    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }
    pub fn with_rows(mut self, rows: u32) -> Self {
        self.rows = Some(rows);
        self
    }
    pub fn with_column_index(mut self, column_index: u32) -> Self {
        self.column_index = Some(column_index);
        self
    }
    pub fn with_start_date(mut self, start_date: NaiveDate) -> Self {
        self.start_date = Some(start_date);
        self
    }
    pub fn with_end_date(mut self, end_date: NaiveDate) -> Self {
        self.end_date = Some(end_date);
        self
    }
    pub fn with_order(mut self, order: SortOrder) -> Self {
        self.order = Some(order);
        self
    }
    pub fn with_collapse(mut self, collapse: Collapse) -> Self {
        self.collapse = Some(collapse);
        self
    }
    pub fn with_transform(mut self, transform: Transform) -> Self {
        self.transform = Some(transform);
        self
    }
    pub fn with_exclude_column_names(mut self, exclude_column_names: bool) -> Self {
        self.exclude_column_names = exclude_column_names;
        self
    }
}

/// Row sort order. The API sorts descending when unset.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Descending,
}
impl std::fmt::Display for SortOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                SortOrder::Ascending => "asc",
                SortOrder::Descending => "desc",
            }
        )
    }
}
impl FromStr for SortOrder {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(SortOrder::Ascending),
            "desc" => Ok(SortOrder::Descending),
            _ => Err(()),
        }
    }
}

/// Sampling frequency applied to the rows before they are returned.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Collapse {
    None,
    Daily,
    Weekly,
    Monthly,
    Quarterly,
    Annual,
}
impl std::fmt::Display for Collapse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Collapse::None => "none",
                Collapse::Daily => "daily",
                Collapse::Weekly => "weekly",
                Collapse::Monthly => "monthly",
                Collapse::Quarterly => "quarterly",
                Collapse::Annual => "annual",
            }
        )
    }
}
impl FromStr for Collapse {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(Collapse::None),
            "daily" => Ok(Collapse::Daily),
            "weekly" => Ok(Collapse::Weekly),
            "monthly" => Ok(Collapse::Monthly),
            "quarterly" => Ok(Collapse::Quarterly),
            "annual" => Ok(Collapse::Annual),
            _ => Err(()),
        }
    }
}

/// Server-side calculation applied to the rows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transform {
    None,
    Diff,
    Rdiff,
    RdiffFrom,
    Cumul,
    Normalize,
}
impl std::fmt::Display for Transform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Transform::None => "none",
                Transform::Diff => "diff",
                Transform::Rdiff => "rdiff",
                Transform::RdiffFrom => "rdiff_from",
                Transform::Cumul => "cumul",
                Transform::Normalize => "normalize",
            }
        )
    }
}
impl FromStr for Transform {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(Transform::None),
            "diff" => Ok(Transform::Diff),
            "rdiff" => Ok(Transform::Rdiff),
            "rdiff_from" => Ok(Transform::RdiffFrom),
            "cumul" => Ok(Transform::Cumul),
            "normalize" => Ok(Transform::Normalize),
            _ => Err(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use crate::query::{Collapse, DataQuery, Format, Query, SortOrder, Transform};

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_data_query() {
        let query = DataQuery::new("WIKI", "FB").with_authenticated(false);

        insta::assert_snapshot!(
            query.canonical_url(None).unwrap(),
            @"https://www.quandl.com/api/v3/datasets/WIKI/FB/data.json?api_version=2015-04-09"
        );

        insta::assert_snapshot!(
            query
                .clone()
                .with_start_date(date("2015-12-10"))
                .with_rows(2)
                .with_metadata(true)
                .canonical_url(None)
                .unwrap(),
            @"https://www.quandl.com/api/v3/datasets/WIKI/FB.json?rows=2&start_date=2015-12-10&api_version=2015-04-09"
        );

        insta::assert_snapshot!(
            query
                .clone()
                .with_exclude_column_names(true)
                .with_transform(Transform::RdiffFrom)
                .with_collapse(Collapse::Monthly)
                .with_order(SortOrder::Ascending)
                .with_end_date(date("2016-01-31"))
                .with_start_date(date("2015-01-01"))
                .with_column_index(4)
                .with_rows(10)
                .with_limit(5)
                .with_format(Format::Csv)
                .canonical_url(None)
                .unwrap(),
            @"https://www.quandl.com/api/v3/datasets/WIKI/FB/data.csv?limit=5&rows=10&column_index=4&start_date=2015-01-01&end_date=2016-01-31&order=asc&collapse=monthly&transform=rdiff_from&exclude_column_names=true&api_version=2015-04-09"
        );

        insta::assert_snapshot!(
            DataQuery::new("WIKI", "FB")
                .with_limit(1)
                .canonical_url(Some("KEY"))
                .unwrap(),
            @"https://www.quandl.com/api/v3/datasets/WIKI/FB/data.json?api_key=KEY&limit=1&api_version=2015-04-09"
        );
    }

    #[test]
    fn exclude_column_names_false_is_not_emitted() {
        let url = DataQuery::new("WIKI", "FB")
            .with_authenticated(false)
            .with_exclude_column_names(false)
            .canonical_url(None)
            .unwrap();
        assert!(!url.as_str().contains("exclude_column_names"));
    }

    #[test]
    fn enum_parsing_uses_wire_values() {
        assert_eq!("asc".parse::<SortOrder>(), Ok(SortOrder::Ascending));
        assert_eq!("rdiff_from".parse::<Transform>(), Ok(Transform::RdiffFrom));
        assert_eq!("annual".parse::<Collapse>(), Ok(Collapse::Annual));
        assert!("ascending".parse::<SortOrder>().is_err());
        assert!("yearly".parse::<Collapse>().is_err());
    }
}
