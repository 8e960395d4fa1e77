//! CLI commands: `pagewright add`, `move` and `remove`
//!
//! Scripted edits of a page's block sequence. Each command opens the page in
//! a block editor, applies one mutation and saves the page back.

use anyhow::Context;
use pagewright_blocks::{
    BlockEditor, BlockId, DragSubject, DropTarget, Error, FilePageStore, MoveOutcome, PageStore,
    StoredPage,
};
use tracing::info;

use crate::settings::AppConfig;

/// Insert a block from the palette, creating the page if needed.
pub async fn add(
    config: &AppConfig,
    slug: &str,
    locale: Option<&str>,
    block_type: &str,
    at: Option<usize>,
) -> anyhow::Result<()> {
    let store = config.page_store();
    let locale = config.locale(locale);
    let mut page = match store.load(locale, slug).await {
        Ok(page) => page,
        Err(Error::PageNotFound { .. }) => {
            info!(locale, slug, "Creating page");
            StoredPage::new(locale, slug)
        }
        Err(e) => return Err(e).with_context(|| format!("Failed to load page {locale}/{slug}")),
    };

    let mut editor = page.editor();
    let block_id = editor.insert_from_palette(block_type, at)?;
    let index = editor.position(&block_id).unwrap_or_default();

    save(&store, &mut page, &editor).await?;
    println!("Added {block_type} block {block_id} at position {index}");
    Ok(())
}

/// Drop an existing block onto another block's position.
pub async fn move_block(
    config: &AppConfig,
    slug: &str,
    locale: Option<&str>,
    source: &str,
    target: &str,
) -> anyhow::Result<()> {
    let (store, mut page) = open(config, slug, locale).await?;
    let mut editor = page.editor();

    editor.begin_move(DragSubject::Existing(BlockId::from(source)))?;
    match editor.commit_move(DropTarget::Block(BlockId::from(target)))? {
        MoveOutcome::Moved {
            block_id,
            from_index,
            to_index,
        } => {
            save(&store, &mut page, &editor).await?;
            println!("Moved {block_id} from position {from_index} to {to_index}");
        }
        _ => println!("Nothing to move"),
    }
    Ok(())
}

/// Delete a block.
pub async fn remove(
    config: &AppConfig,
    slug: &str,
    locale: Option<&str>,
    block_id: &str,
) -> anyhow::Result<()> {
    let (store, mut page) = open(config, slug, locale).await?;
    let mut editor = page.editor();

    match editor.delete(&BlockId::from(block_id))? {
        Some(block) => {
            save(&store, &mut page, &editor).await?;
            println!("Removed {} block {}", block.type_name(), block.id);
        }
        None => println!("No block {block_id} on {}/{}", page.locale, page.slug),
    }
    Ok(())
}

async fn open(
    config: &AppConfig,
    slug: &str,
    locale: Option<&str>,
) -> anyhow::Result<(FilePageStore, StoredPage)> {
    let store = config.page_store();
    let locale = config.locale(locale);
    let page = store
        .load(locale, slug)
        .await
        .with_context(|| format!("Failed to load page {locale}/{slug}"))?;
    Ok((store, page))
}

async fn save(
    store: &FilePageStore,
    page: &mut StoredPage,
    editor: &BlockEditor,
) -> anyhow::Result<()> {
    page.apply(editor);
    store
        .save(page)
        .await
        .with_context(|| format!("Failed to save page {}/{}", page.locale, page.slug))
}
