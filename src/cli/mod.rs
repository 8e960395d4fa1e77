//! CLI module for Pagewright
//!
//! Provides commands over the page content directory:
//! - `render`: Render a stored page to HTML
//! - `migrate`: Rewrite stored blocks in the current shape
//! - `check`: Report empty required fields and unknown block types
//! - `palette`: List the registered block types
//! - `pages`: List stored pages
//! - `add` / `move` / `remove`: Edit a page's block sequence
//! - `config`: Print the effective configuration

use clap::{Parser, Subcommand};

use crate::settings;

pub mod check;
pub mod edit;
pub mod migrate;
pub mod pages;
pub mod palette;
pub mod render;
pub mod show_config;

/// Pagewright landing page builder CLI
#[derive(Parser, Debug)]
#[command(name = "pagewright")]
#[command(about = "Block-based landing page builder")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render a page to HTML
    Render {
        /// Page slug
        slug: String,
        /// Page locale (defaults to the configured locale)
        #[arg(short, long)]
        locale: Option<String>,
        /// Write HTML to this file instead of stdout
        #[arg(short, long)]
        out: Option<std::path::PathBuf>,
        /// Leave out placeholders for unimplemented block types
        #[arg(long)]
        no_placeholders: bool,
    },
    /// Rewrite stored pages in the current block shape
    Migrate {
        /// Only migrate pages of this locale
        #[arg(short, long)]
        locale: Option<String>,
        /// Report what would change without writing
        #[arg(long)]
        dry_run: bool,
    },
    /// Check pages for empty required fields
    Check {
        /// Only check this page
        slug: Option<String>,
        /// Page locale (defaults to all locales, or the configured one with a slug)
        #[arg(short, long)]
        locale: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// List registered block types
    Palette {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// List stored pages
    Pages {
        /// Only list pages of this locale
        #[arg(short, long)]
        locale: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Insert a new block from the palette
    Add {
        /// Page slug (created if missing)
        slug: String,
        /// Block type tag
        block_type: String,
        /// Insert at this index instead of appending
        #[arg(long)]
        at: Option<usize>,
        #[arg(short, long)]
        locale: Option<String>,
    },
    /// Move a block to the position of another block
    Move {
        /// Page slug
        slug: String,
        /// Block to move
        source: String,
        /// Block whose position it takes
        target: String,
        #[arg(short, long)]
        locale: Option<String>,
    },
    /// Delete a block
    Remove {
        /// Page slug
        slug: String,
        /// Block to delete
        block_id: String,
        #[arg(short, long)]
        locale: Option<String>,
    },
    /// Print the effective configuration
    Config,
}

/// Run the CLI command
pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let Some(command) = cli.command else {
        let mut cmd = <Cli as clap::CommandFactory>::command();
        cmd.print_help()?;
        println!();
        return Ok(());
    };

    let config = settings::load_config()?;

    match command {
        Commands::Render {
            slug,
            locale,
            out,
            no_placeholders,
        } => render::run(&config, &slug, locale.as_deref(), out.as_deref(), no_placeholders).await,
        Commands::Migrate { locale, dry_run } => {
            migrate::run(&config, locale.as_deref(), dry_run).await
        }
        Commands::Check { slug, locale, json } => {
            check::run(&config, slug.as_deref(), locale.as_deref(), json).await
        }
        Commands::Palette { json } => palette::run(&config, json),
        Commands::Pages { locale, json } => pages::run(&config, locale.as_deref(), json).await,
        Commands::Add {
            slug,
            block_type,
            at,
            locale,
        } => edit::add(&config, &slug, locale.as_deref(), &block_type, at).await,
        Commands::Move {
            slug,
            source,
            target,
            locale,
        } => edit::move_block(&config, &slug, locale.as_deref(), &source, &target).await,
        Commands::Remove {
            slug,
            block_id,
            locale,
        } => edit::remove(&config, &slug, locale.as_deref(), &block_id).await,
        Commands::Config => show_config::run(&config),
    }
}

/// Print a value as JSON, honouring the configured formatting
pub fn print_json<T: serde::Serialize>(
    config: &settings::AppConfig,
    value: &T,
) -> anyhow::Result<()> {
    let json = if config.output.pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{json}");
    Ok(())
}
