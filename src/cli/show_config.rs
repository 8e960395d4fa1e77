//! CLI command: `pagewright config`

use anyhow::Context;

use crate::settings::AppConfig;

/// Print the effective configuration as TOML.
pub fn run(config: &AppConfig) -> anyhow::Result<()> {
    let content = toml::to_string_pretty(config).context("Failed to serialize config")?;
    print!("{content}");
    Ok(())
}
