//! CLI command: `pagewright render`
//!
//! Loads a stored page, repairs legacy block shapes on the fly and writes the
//! rendered sections as HTML.

use std::path::Path;

use anyhow::Context;
use pagewright_blocks::{PageRenderer, PageStore};
use tracing::{info, warn};

use crate::settings::AppConfig;

/// Run the render subcommand.
pub async fn run(
    config: &AppConfig,
    slug: &str,
    locale: Option<&str>,
    out: Option<&Path>,
    no_placeholders: bool,
) -> anyhow::Result<()> {
    let locale = config.locale(locale);
    let page = config
        .page_store()
        .load(locale, slug)
        .await
        .with_context(|| format!("Failed to load page {locale}/{slug}"))?;

    let mut options = config.render.clone();
    if no_placeholders {
        options.show_placeholders = false;
    }
    let rendered = PageRenderer::with_options(options).render_records(&page.blocks);

    if rendered.skipped > 0 {
        warn!(skipped = rendered.skipped, "Some stored blocks could not be recovered");
    }
    let placeholders = rendered.placeholder_count();
    if placeholders > 0 {
        warn!(placeholders, "Page contains block types without a renderer");
    }

    let html = rendered.html();
    match out {
        Some(path) => {
            tokio::fs::write(path, &html)
                .await
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!(
                path = %path.display(),
                blocks = rendered.blocks.len(),
                hidden = rendered.hidden,
                "Page rendered"
            );
        }
        None => println!("{html}"),
    }

    Ok(())
}
