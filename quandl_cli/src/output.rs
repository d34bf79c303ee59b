use std::io::Write;
use std::path::PathBuf;

use anyhow::{bail, Result};
use quandl_api::{Client, Format, Query, API_KEY_ENV};

/// Global flags shared by every subcommand.
#[derive(Clone, Debug)]
pub struct OutputOptions {
    pub format: Format,
    pub authenticated: bool,
    pub print_url: bool,
    pub out: Option<PathBuf>,
}

impl OutputOptions {
    /// Applies the global format and authentication flags to a query.
    pub fn apply<Q: Query>(&self, query: Q) -> Q {
        query
            .with_format(self.format)
            .with_authenticated(self.authenticated)
    }
}

/// Prints the query URL or runs it and writes the raw body.
///
/// A non-success status still writes the body, then fails.
pub async fn emit<Q: Query>(query: Q, client: &Client, opts: &OutputOptions) -> Result<()> {
    let query = opts.apply(query);
    if query.common().authenticated && client.config().api_key().is_none() {
        bail!(
            "No API key configured: set {} or pass --no-auth",
            API_KEY_ENV
        );
    }

    if opts.print_url {
        println!("{}", client.url(&query)?);
        return Ok(());
    }

    let resp = client.run(&query).await?;
    match &opts.out {
        Some(path) => {
            std::fs::write(path, &resp.body)?;
            tracing::info!("Wrote {} bytes to {}", resp.body.len(), path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(&resp.body)?;
            stdout.flush()?;
        }
    }

    if !resp.is_success() {
        bail!("Request failed with status {}", resp.status);
    }
    Ok(())
}
