//! Wartezeiten command-line client.
//!
//! Queries the Wartezeiten.APP API and prints the result to stdout.

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use wartezeiten_cli::cli::{Cli, execute};
use wartezeiten_cli::config::Config;
use wartezeiten_client::WartezeitenClient;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| cli.log_directive().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = match &cli.config {
        Some(path) => Config::load(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => Config::default(),
    };

    let client = WartezeitenClient::new(config.client_config(cli.base_url.as_deref()))
        .context("failed to create API client")?;
    info!("Using API at {}", client.base_url());

    let output = execute(&client, &cli.command, config.default_language(), cli.format).await?;
    println!("{}", output);

    Ok(())
}
