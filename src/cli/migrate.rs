//! CLI command: `pagewright migrate`
//!
//! Loads every stored page through the normalizer and writes the blocks back
//! in the current envelope shape. Unrecoverable records are dropped.

use anyhow::Context;
use pagewright_blocks::PageStore;
use tracing::info;

use crate::settings::AppConfig;

/// Run the migrate subcommand.
pub async fn run(config: &AppConfig, locale: Option<&str>, dry_run: bool) -> anyhow::Result<()> {
    let store = config.page_store();
    let pages = store.list(locale).await.context("Failed to list pages")?;

    let mut changed = 0usize;
    for summary in &pages {
        let mut page = store
            .load(&summary.locale, &summary.slug)
            .await
            .with_context(|| format!("Failed to load page {}/{}", summary.locale, summary.slug))?;

        let editor = page.editor();
        let records = editor.to_records();
        if records == page.blocks {
            continue;
        }
        changed += 1;

        let dropped = page.blocks.len() - editor.block_count();
        println!(
            "  {}/{}: {} blocks{}",
            page.locale,
            page.slug,
            editor.block_count(),
            if dropped > 0 {
                format!(", {dropped} dropped")
            } else {
                String::new()
            }
        );

        if !dry_run {
            page.apply(&editor);
            store
                .save(&page)
                .await
                .with_context(|| format!("Failed to save page {}/{}", page.locale, page.slug))?;
        }
    }

    info!(pages = pages.len(), changed, dry_run, "Migration finished");
    if dry_run {
        println!("{changed} of {} pages would change", pages.len());
    } else {
        println!("{changed} of {} pages migrated", pages.len());
    }
    Ok(())
}
