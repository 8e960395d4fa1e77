//! CLI command: `pagewright pages`

use anyhow::Context;
use pagewright_blocks::PageStore;

use crate::settings::AppConfig;

/// Run the pages subcommand.
pub async fn run(config: &AppConfig, locale: Option<&str>, json: bool) -> anyhow::Result<()> {
    let pages = config
        .page_store()
        .list(locale)
        .await
        .context("Failed to list pages")?;

    if json {
        return super::print_json(config, &pages);
    }

    if pages.is_empty() {
        println!("  (no pages in {})", config.content_dir);
        return Ok(());
    }
    println!("  {:<8} {:<24} {:<32} {:>6}  Updated", "Locale", "Slug", "Title", "Blocks");
    for page in &pages {
        println!(
            "  {:<8} {:<24} {:<32} {:>6}  {}",
            page.locale,
            page.slug,
            page.title,
            page.block_count,
            page.updated_at.format("%Y-%m-%d %H:%M")
        );
    }
    Ok(())
}
