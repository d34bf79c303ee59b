use anyhow::Result;
use clap::Args;
use quandl_api::{
    Client, DatabaseMetadataQuery, DatasetListQuery, DownloadType, EntireDatabaseQuery,
};

use super::parse_choice;
use crate::output::{emit, OutputOptions};

#[derive(Args)]
pub struct CodesArgs {
    /// Database code (e.g. WIKI)
    pub database: String,
}

#[derive(Args)]
pub struct DatabaseArgs {
    /// Database code (e.g. WIKI)
    pub database: String,
}

#[derive(Args)]
pub struct ExportArgs {
    /// Database code (e.g. WIKI)
    pub database: String,

    /// Download type: partial, complete
    #[arg(long)]
    pub download_type: Option<String>,
}

pub fn build_export(args: &ExportArgs) -> Result<EntireDatabaseQuery> {
    let mut query = EntireDatabaseQuery::new(&args.database);
    if let Some(ref download_type) = args.download_type {
        query = query.with_download_type(parse_choice::<DownloadType>(
            download_type,
            "download type",
            "partial, complete",
        )?);
    }
    Ok(query)
}

pub async fn run_codes(args: &CodesArgs, client: &Client, opts: &OutputOptions) -> Result<()> {
    emit(DatasetListQuery::new(&args.database), client, opts).await
}

pub async fn run_database(
    args: &DatabaseArgs,
    client: &Client,
    opts: &OutputOptions,
) -> Result<()> {
    emit(DatabaseMetadataQuery::new(&args.database), client, opts).await
}

pub async fn run_export(args: &ExportArgs, client: &Client, opts: &OutputOptions) -> Result<()> {
    emit(build_export(args)?, client, opts).await
}

#[cfg(test)]
mod tests {
    use quandl_api::Query;

    use super::*;

    #[test]
    fn export_with_download_type() {
        let args = ExportArgs {
            database: "WIKI".to_string(),
            download_type: Some("partial".to_string()),
        };
        let url = build_export(&args)
            .unwrap()
            .canonical_url(Some("KEY"))
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://www.quandl.com/api/v3/databases/WIKI/data?api_key=KEY&download_type=partial&api_version=2015-04-09"
        );
    }

    #[test]
    fn export_rejects_unknown_download_type() {
        let args = ExportArgs {
            database: "WIKI".to_string(),
            download_type: Some("full".to_string()),
        };
        assert!(build_export(&args).is_err());
    }
}
