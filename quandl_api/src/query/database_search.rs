use crate::Error;

use super::common::{Query, QueryCommon, QueryParams};

/// Search across databases.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DatabaseSearchQuery {
    pub common: QueryCommon,
    pub query_terms: Option<Vec<String>>,
    pub per_page: Option<u32>,
    pub page: Option<u32>,
}

impl Query for DatabaseSearchQuery {
    fn common(&self) -> &QueryCommon {
        &self.common
    }
    fn common_mut(&mut self) -> &mut QueryCommon {
        &mut self.common
    }
    fn path(&self) -> Result<String, Error> {
        Ok(format!("databases.{}", self.common.format))
    }
    fn add_params(&self, params: &mut QueryParams) {
        if let Some(query_terms) = &self.query_terms {
            params.push_search_terms("query", query_terms);
        }
        params.push_opt("per_page", self.per_page);
        params.push_opt("page", self.page);
    }
}

impl DatabaseSearchQuery {
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
    use crate::query::{DatabaseSearchQuery, Query};

    #[test]
    fn test_database_search_query() {
        let query = DatabaseSearchQuery::default().with_authenticated(false);

        insta::assert_snapshot!(
            query.canonical_url(None).unwrap(),
            @"https://www.quandl.com/api/v3/databases.json?api_version=2015-04-09"
        );

        insta::assert_snapshot!(
            query
                .clone()
                .with_query_terms(&["apple".to_string(), "iphone".to_string()])
                .with_page(1)
                .canonical_url(None)
                .unwrap(),
            @"https://www.quandl.com/api/v3/databases.json?query=apple+iphone&page=1&api_version=2015-04-09"
        );

        insta::assert_snapshot!(
            query
                .clone()
                .with_per_page(10)
                .with_query_term("s&p")
                .canonical_url(None)
                .unwrap(),
            @"https://www.quandl.com/api/v3/databases.json?query=s%26p&per_page=10&api_version=2015-04-09"
        );
    }
}
