use anyhow::Result;
use clap::Args;
use quandl_api::{Client, MetadataQuery};

use crate::output::{emit, OutputOptions};

#[derive(Args)]
pub struct MetadataArgs {
    /// Database code (e.g. WIKI)
    pub database: String,

    /// Dataset code (e.g. FB)
    pub dataset: String,
}

pub async fn run(args: &MetadataArgs, client: &Client, opts: &OutputOptions) -> Result<()> {
    emit(
        MetadataQuery::new(&args.database, &args.dataset),
        client,
        opts,
    )
    .await
}
