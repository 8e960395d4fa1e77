//! CLI command: `pagewright palette`

use pagewright_blocks::BlockKind;
use serde_json::json;

use crate::settings::AppConfig;

/// Run the palette subcommand.
pub fn run(config: &AppConfig, json: bool) -> anyhow::Result<()> {
    if json {
        let kinds: Vec<serde_json::Value> = BlockKind::ALL
            .iter()
            .map(|kind| {
                json!({
                    "type": kind.as_str(),
                    "label": kind.label(),
                    "fields": kind.fields(),
                })
            })
            .collect();
        return super::print_json(config, &kinds);
    }

    println!();
    println!("  {:<14} {:<16} Required fields", "Type", "Label");
    println!("  {}", "-".repeat(60));
    for kind in BlockKind::ALL {
        let required: Vec<&str> = kind
            .fields()
            .iter()
            .filter(|f| f.required)
            .map(|f| f.name)
            .collect();
        println!(
            "  {:<14} {:<16} {}",
            kind.as_str(),
            kind.label(),
            required.join(", ")
        );
    }
    println!();
    Ok(())
}
