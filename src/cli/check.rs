//! CLI command: `pagewright check`
//!
//! Validates stored pages against the block registry. Exits non-zero when a
//! required field is empty; unknown block types are reported as warnings.

use anyhow::{bail, Context};
use pagewright_blocks::schema::validate_all;
use pagewright_blocks::{FieldViolation, PageStore, Severity, StoredPage};
use serde::Serialize;

use crate::settings::AppConfig;

#[derive(Debug, Serialize)]
struct PageReport {
    locale: String,
    slug: String,
    skipped: usize,
    violations: Vec<FieldViolation>,
}

/// Run the check subcommand.
pub async fn run(
    config: &AppConfig,
    slug: Option<&str>,
    locale: Option<&str>,
    json: bool,
) -> anyhow::Result<()> {
    let store = config.page_store();

    let pages = match slug {
        Some(slug) => vec![store.load(config.locale(locale), slug).await?],
        None => {
            let mut pages = Vec::new();
            for summary in store.list(locale).await.context("Failed to list pages")? {
                pages.push(store.load(&summary.locale, &summary.slug).await?);
            }
            pages
        }
    };

    let reports: Vec<PageReport> = pages.iter().map(check_page).collect();
    let errors = reports
        .iter()
        .flat_map(|r| &r.violations)
        .filter(|v| v.severity == Severity::Error)
        .count();

    if json {
        super::print_json(config, &reports)?;
    } else {
        print_reports(&reports);
    }

    if errors > 0 {
        bail!("{errors} required fields are empty");
    }
    Ok(())
}

fn check_page(page: &StoredPage) -> PageReport {
    let editor = page.editor();
    PageReport {
        locale: page.locale.clone(),
        slug: page.slug.clone(),
        skipped: page.blocks.len() - editor.block_count(),
        violations: validate_all(editor.blocks()),
    }
}

fn print_reports(reports: &[PageReport]) {
    for report in reports {
        if report.violations.is_empty() && report.skipped == 0 {
            println!("  ok    {}/{}", report.locale, report.slug);
            continue;
        }
        println!("  issue {}/{}", report.locale, report.slug);
        if report.skipped > 0 {
            println!("        {} unrecoverable blocks", report.skipped);
        }
        for violation in &report.violations {
            let level = match violation.severity {
                Severity::Error => "error",
                Severity::Warning => "warn ",
            };
            println!(
                "        {level} {} ({}): {}",
                violation.block_id, violation.block_type, violation.message
            );
        }
    }
}
