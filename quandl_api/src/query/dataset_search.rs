use crate::Error;

use super::common::{Query, QueryCommon, QueryParams};

/// Search across datasets, optionally restricted to one database.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DatasetSearchQuery {
    pub common: QueryCommon,
    pub database_code: Option<String>,
    /// Terms are joined with `+` into a single `query` parameter.
    pub query_terms: Option<Vec<String>>,
    pub per_page: Option<u32>,
    pub page: Option<u32>,
}

impl Query for DatasetSearchQuery {
    fn common(&self) -> &QueryCommon {
        &self.common
    }
    fn common_mut(&mut self) -> &mut QueryCommon {
        &mut self.common
    }
    fn path(&self) -> Result<String, Error> {
        Ok(format!("datasets.{}", self.common.format))
    }
    fn add_params(&self, params: &mut QueryParams) {
        if let Some(database_code) = &self.database_code {
            params.push("database_code", database_code);
        }
        if let Some(query_terms) = &self.query_terms {
            params.push_search_terms("query", query_terms);
        }
        params.push_opt("per_page", self.per_page);
        params.push_opt("page", self.page);
    }
}

impl DatasetSearchQuery {
    pub fn with_database_code(mut self, database_code: &str) -> Self {
        self.database_code = Some(database_code.to_string());
        self
    }
    /// Appends one search term, starting the term list if needed.
    pub fn with_query_term(mut self, term: &str) -> Self {
        self.query_terms
            .get_or_insert_with(Vec::new)
            .push(term.to_string());
        self
    }
    pub fn with_query_terms(mut self, terms: &[String]) -> Self {
        self.query_terms
            .get_or_insert_with(Vec::new)
            .extend_from_slice(terms);
        self
    }
    pub fn with_per_page(mut self, per_page: u32) -> Self {
        self.per_page = Some(per_page);
        self
    }
    pub fn with_page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }
}

#[cfg(test)]
mod tests {
    use crate::query::{DatasetSearchQuery, Query};

    #[test]
    fn test_dataset_search_query() {
        let query = DatasetSearchQuery::default().with_authenticated(false);

        insta::assert_snapshot!(
            query.canonical_url(None).unwrap(),
            @"https://www.quandl.com/api/v3/datasets.json?api_version=2015-04-09"
        );

        insta::assert_snapshot!(
            query
                .clone()
                .with_query_term("apple")
                .with_query_term("iphone")
                .canonical_url(None)
                .unwrap(),
            @"https://www.quandl.com/api/v3/datasets.json?query=apple+iphone&api_version=2015-04-09"
        );

        insta::assert_snapshot!(
            query
                .clone()
                .with_page(3)
                .with_per_page(50)
                .with_query_terms(&["crude".to_string(), "oil".to_string()])
                .with_database_code("OPEC")
                .canonical_url(None)
                .unwrap(),
            @"https://www.quandl.com/api/v3/datasets.json?database_code=OPEC&query=crude+oil&per_page=50&page=3&api_version=2015-04-09"
        );
    }

    #[test]
    fn empty_term_list_still_emits_query() {
        let url = DatasetSearchQuery::default()
            .with_authenticated(false)
            .with_query_terms(&[])
            .canonical_url(None)
            .unwrap();
        assert_eq!(url.query(), Some("query=&api_version=2015-04-09"));
    }
}
