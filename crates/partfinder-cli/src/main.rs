mod render;

use std::time::Duration;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use partfinder_core::{AppConfig, Catalog};
use partfinder_search::{PartsApiClient, SearchError, SearchSession, EMPTY_STATE_MESSAGE};

#[derive(Debug, Parser)]
#[command(name = "partfinder")]
#[command(about = "Look up FRC robot parts across vendors")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Search for a part by name
    Search {
        /// Free-text part name, e.g. `neo 550`
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,
        /// Override the remote lookup budget in milliseconds
        #[arg(long)]
        timeout_ms: Option<u64>,
        /// Print the outcome as JSON
        #[arg(long)]
        json: bool,
    },
    /// List the keys of the local catalog in match order
    Catalog,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = partfinder_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Some(Commands::Search {
            query,
            timeout_ms,
            json,
        }) => run_search(&config, &query.join(" "), timeout_ms, json).await?,
        Some(Commands::Catalog) => {
            let catalog = load_catalog(&config)?;
            for key in catalog.keys() {
                println!("{key}");
            }
        }
        None => println!("partfinder: run `partfinder search <QUERY>` or `partfinder --help`"),
    }

    Ok(())
}

fn load_catalog(config: &AppConfig) -> anyhow::Result<Catalog> {
    let catalog = match &config.catalog_path {
        Some(path) => {
            tracing::info!(path = %path.display(), "loading catalog file");
            partfinder_core::load_catalog(path)?
        }
        None => Catalog::builtin()?,
    };
    Ok(catalog)
}

async fn run_search(
    config: &AppConfig,
    query: &str,
    timeout_ms: Option<u64>,
    json: bool,
) -> anyhow::Result<()> {
    let timeout = timeout_ms.map_or_else(|| config.remote_timeout(), Duration::from_millis);
    let client = PartsApiClient::from_config(config)?;
    let session = SearchSession::new(client, load_catalog(config)?, timeout);

    match session.search(query).await {
        Ok(outcome) if json => println!("{}", serde_json::to_string_pretty(&outcome)?),
        Ok(outcome) => print!("{}", render::render_outcome(&outcome)),
        Err(SearchError::NoResultsAvailable { .. }) => println!("{EMPTY_STATE_MESSAGE}"),
        Err(e) => return Err(e.into()),
    }

    Ok(())
}

#[cfg(test)]
mod tests;
