//! Configuration types

use pagewright_blocks::{FilePageStore, RenderOptions};
use serde::{Deserialize, Serialize};

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Directory holding `<locale>/<slug>.json` page files
    #[serde(default = "default_content_dir")]
    pub content_dir: String,
    /// Locale used when a command is given none
    #[serde(default = "default_locale")]
    pub default_locale: String,
    #[serde(default)]
    pub render: RenderOptions,
    #[serde(default)]
    pub output: OutputConfig,
}

fn default_content_dir() -> String {
    "content/pages".to_string()
}

fn default_locale() -> String {
    "en".to_string()
}

impl AppConfig {
    /// Page store over the configured content directory
    pub fn page_store(&self) -> FilePageStore {
        FilePageStore::new(&self.content_dir).with_pretty(self.output.pretty)
    }

    /// Resolve an optional locale argument
    pub fn locale<'a>(&'a self, locale: Option<&'a str>) -> &'a str {
        locale.unwrap_or(&self.default_locale)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            content_dir: default_content_dir(),
            default_locale: default_locale(),
            render: RenderOptions::default(),
            output: OutputConfig::default(),
        }
    }
}

/// Output formatting
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Pretty-print JSON written to disk and stdout
    #[serde(default = "default_true")]
    pub pretty: bool,
}

fn default_true() -> bool {
    true
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { pretty: true }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.content_dir, "content/pages");
        assert_eq!(config.locale(None), "en");
        assert_eq!(config.locale(Some("de")), "de");
        assert!(config.render.show_placeholders);
        assert!(config.output.pretty);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: AppConfig = serde_json::from_str(r#"{"render": {"section_class": "blk"}}"#).unwrap();
        assert_eq!(config.render.section_class, "blk");
        assert!(config.render.show_placeholders);
        assert_eq!(config.default_locale, "en");
    }
}
