mod commands;
mod output;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use quandl_api::{Client, Config, Format};

use crate::output::OutputOptions;

#[derive(Parser)]
#[command(name = "quandl")]
#[command(about = "Build and run Quandl v3 API queries")]
struct Cli {
    /// Response format: csv, json or xml
    #[arg(long, default_value = "json", global = true)]
    format: String,

    /// Send the request without the API key
    #[arg(long, global = true)]
    no_auth: bool,

    /// Print the request URL instead of sending it
    #[arg(long, global = true)]
    print_url: bool,

    /// Write the response body to a file instead of stdout
    #[arg(long, global = true)]
    out: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch time-series data for a dataset
    Data(commands::data::DataArgs),
    /// Fetch metadata for a dataset
    Metadata(commands::metadata::MetadataArgs),
    /// Search datasets
    Datasets(commands::search::DatasetsArgs),
    /// Search databases
    Databases(commands::search::DatabasesArgs),
    /// List the dataset codes of a database
    Codes(commands::database::CodesArgs),
    /// Fetch metadata for a database
    Database(commands::database::DatabaseArgs),
    /// Download an entire database
    Export(commands::database::ExportArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("quandl=info".parse()?)
                .add_directive("quandl_api=info".parse()?),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let opts = OutputOptions {
        format: commands::parse_choice::<Format>(&cli.format, "format", "csv, json, xml")?,
        authenticated: !cli.no_auth,
        print_url: cli.print_url,
        out: cli.out,
    };

    let client = Client::new(Config::from_env())?;

    match &cli.command {
        Commands::Data(args) => commands::data::run(args, &client, &opts).await?,
        Commands::Metadata(args) => commands::metadata::run(args, &client, &opts).await?,
        Commands::Datasets(args) => commands::search::run_datasets(args, &client, &opts).await?,
        Commands::Databases(args) => commands::search::run_databases(args, &client, &opts).await?,
        Commands::Codes(args) => commands::database::run_codes(args, &client, &opts).await?,
        Commands::Database(args) => commands::database::run_database(args, &client, &opts).await?,
        Commands::Export(args) => commands::database::run_export(args, &client, &opts).await?,
    }

    Ok(())
}
