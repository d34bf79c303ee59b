use anyhow::Result;
use clap::Args;
use quandl_api::dates::parse_date;
use quandl_api::{Client, Collapse, DataQuery, SortOrder, Transform};

use super::parse_choice;
use crate::output::{emit, OutputOptions};

#[derive(Args)]
pub struct DataArgs {
    /// Database code (e.g. WIKI)
    pub database: String,

    /// Dataset code (e.g. FB)
    pub dataset: String,

    /// Include dataset metadata alongside the rows
    #[arg(long)]
    pub metadata: bool,

    /// Return only the first n rows
    #[arg(long)]
    pub limit: Option<u32>,

    /// Return only the first n rows
    #[arg(long)]
    pub rows: Option<u32>,

    /// Return a single column (0 is the date column)
    #[arg(long)]
    pub column_index: Option<u32>,

    /// First date to include, yyyy-MM-dd
    #[arg(long)]
    pub start_date: Option<String>,

    /// Last date to include, yyyy-MM-dd
    #[arg(long)]
    pub end_date: Option<String>,

    /// Sort order: asc, desc
    #[arg(long)]
    pub order: Option<String>,

    /// Frequency: none, daily, weekly, monthly, quarterly, annual
    #[arg(long)]
    pub collapse: Option<String>,

    /// Calculation: none, diff, rdiff, rdiff_from, cumul, normalize
    #[arg(long)]
    pub transform: Option<String>,

    /// Omit column names (CSV only)
    #[arg(long)]
    pub exclude_column_names: bool,
}

pub fn build(args: &DataArgs) -> Result<DataQuery> {
    let mut query = DataQuery::new(&args.database, &args.dataset)
        .with_metadata(args.metadata)
        .with_exclude_column_names(args.exclude_column_names);

    if let Some(limit) = args.limit {
        query = query.with_limit(limit);
    }
    if let Some(rows) = args.rows {
        query = query.with_rows(rows);
    }
    if let Some(column_index) = args.column_index {
        query = query.with_column_index(column_index);
    }
    if let Some(ref start_date) = args.start_date {
        query = query.with_start_date(parse_date(start_date)?);
    }
    if let Some(ref end_date) = args.end_date {
        query = query.with_end_date(parse_date(end_date)?);
    }
    if let Some(ref order) = args.order {
        query = query.with_order(parse_choice::<SortOrder>(order, "order", "asc, desc")?);
    }
    if let Some(ref collapse) = args.collapse {
        query = query.with_collapse(parse_choice::<Collapse>(
            collapse,
            "collapse",
            "none, daily, weekly, monthly, quarterly, annual",
        )?);
    }
    if let Some(ref transform) = args.transform {
        query = query.with_transform(parse_choice::<Transform>(
            transform,
            "transform",
            "none, diff, rdiff, rdiff_from, cumul, normalize",
        )?);
    }

    Ok(query)
}

pub async fn run(args: &DataArgs, client: &Client, opts: &OutputOptions) -> Result<()> {
    emit(build(args)?, client, opts).await
}
