//! Pagewright - Landing Page Builder
//!
//! CLI entry point for rendering, migrating and checking stored pages.

#![forbid(unsafe_code)]

use anyhow::Result;
use clap::Parser;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod cli;
mod settings;

#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pagewright=info,pagewright_blocks=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = cli::Cli::parse();

    if cli.command.is_some() {
        debug!("Starting Pagewright v{}", env!("CARGO_PKG_VERSION"));
    }

    cli::run(cli).await
}
