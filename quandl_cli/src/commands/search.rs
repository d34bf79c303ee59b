use anyhow::Result;
use clap::Args;
use quandl_api::{Client, DatabaseSearchQuery, DatasetSearchQuery};

use crate::output::{emit, OutputOptions};

#[derive(Args)]
pub struct DatasetsArgs {
    /// Search terms
    pub terms: Vec<String>,

    /// Restrict the search to one database
    #[arg(long)]
    pub database: Option<String>,

    /// Results per page
    #[arg(long)]
    pub per_page: Option<u32>,

    /// Page number
    #[arg(long)]
    pub page: Option<u32>,
}

#[derive(Args)]
pub struct DatabasesArgs {
    /// Search terms
    pub terms: Vec<String>,

    /// Results per page
    #[arg(long)]
    pub per_page: Option<u32>,

    /// Page number
    #[arg(long)]
    pub page: Option<u32>,
}

pub fn build_datasets(args: &DatasetsArgs) -> DatasetSearchQuery {
    let mut query = DatasetSearchQuery::default();
    if let Some(ref database) = args.database {
        query = query.with_database_code(database);
    }
    if !args.terms.is_empty() {
        query = query.with_query_terms(&split_terms(&args.terms));
    }
    if let Some(per_page) = args.per_page {
        query = query.with_per_page(per_page);
    }
    if let Some(page) = args.page {
        query = query.with_page(page);
    }
    query
}

pub fn build_databases(args: &DatabasesArgs) -> DatabaseSearchQuery {
    let mut query = DatabaseSearchQuery::default();
    if !args.terms.is_empty() {
        query = query.with_query_terms(&split_terms(&args.terms));
    }
    if let Some(per_page) = args.per_page {
        query = query.with_per_page(per_page);
    }
    if let Some(page) = args.page {
        query = query.with_page(page);
    }
    query
}

pub async fn run_datasets(
    args: &DatasetsArgs,
    client: &Client,
    opts: &OutputOptions,
) -> Result<()> {
    emit(build_datasets(args), client, opts).await
}

pub async fn run_databases(
    args: &DatabasesArgs,
    client: &Client,
    opts: &OutputOptions,
) -> Result<()> {
    emit(build_databases(args), client, opts).await
}

/// Quoted arguments like `"crude oil"` become separate terms.
fn split_terms(terms: &[String]) -> Vec<String> {
    terms
        .iter()
        .flat_map(|t| t.split_whitespace())
        .map(str::to_string)
        .collect()
}
