//! Page Store
//!
//! Pages are persisted as JSON documents holding the raw stored block list.
//! Records are kept as written, legacy shapes included; they only become
//! [`Block`](crate::block::Block)s when loaded into an editor or renderer.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::editor::BlockEditor;
use crate::error::{Error, Result};

/// A persisted page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredPage {
    /// Page ID
    pub id: Uuid,
    /// URL slug, unique per locale
    pub slug: String,
    /// Locale code ("en", "pt-BR")
    pub locale: String,
    /// Page title
    #[serde(default)]
    pub title: String,
    /// Stored block records, possibly in legacy shapes
    #[serde(default)]
    pub blocks: Vec<Value>,
    /// Last save time
    #[serde(default = "Utc::now")]
    pub updated_at: DateTime<Utc>,
}

impl StoredPage {
    /// Create an empty page
    #[must_use]
    pub fn new(locale: impl Into<String>, slug: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            slug: slug.into(),
            locale: locale.into(),
            title: String::new(),
            blocks: Vec::new(),
            updated_at: Utc::now(),
        }
    }

    /// Set the title
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the stored block records
    #[must_use]
    pub fn with_blocks(mut self, blocks: Vec<Value>) -> Self {
        self.blocks = blocks;
        self
    }

    /// Open the page's blocks in an editor
    #[must_use]
    pub fn editor(&self) -> BlockEditor {
        BlockEditor::from_stored(&self.blocks)
    }

    /// Replace the stored blocks with the editor's current sequence
    pub fn apply(&mut self, editor: &BlockEditor) {
        self.blocks = editor.to_records();
        self.updated_at = Utc::now();
    }

    /// Short listing entry
    #[must_use]
    pub fn summary(&self) -> PageSummary {
        PageSummary {
            locale: self.locale.clone(),
            slug: self.slug.clone(),
            title: self.title.clone(),
            block_count: self.blocks.len(),
            updated_at: self.updated_at,
        }
    }
}

/// Listing entry for a stored page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageSummary {
    /// Locale code
    pub locale: String,
    /// URL slug
    pub slug: String,
    /// Page title
    pub title: String,
    /// Number of stored block records
    pub block_count: usize,
    /// Last save time
    pub updated_at: DateTime<Utc>,
}

/// Page persistence backend
#[async_trait]
pub trait PageStore: Send + Sync {
    /// Load a page by locale and slug
    async fn load(&self, locale: &str, slug: &str) -> Result<StoredPage>;

    /// Save a page, replacing any previous version
    async fn save(&self, page: &StoredPage) -> Result<()>;

    /// List stored pages, optionally for one locale only
    async fn list(&self, locale: Option<&str>) -> Result<Vec<PageSummary>>;
}

/// Stores each page as `<root>/<locale>/<slug>.json`
#[derive(Debug, Clone)]
pub struct FilePageStore {
    root: PathBuf,
    pretty: bool,
}

impl FilePageStore {
    /// Create a store rooted at the given directory
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            pretty: true,
        }
    }

    /// Write compact JSON instead of pretty-printed
    #[must_use]
    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Store root directory
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the file holding a page
    pub fn page_path(&self, locale: &str, slug: &str) -> Result<PathBuf> {
        validate_key(locale)?;
        validate_key(slug)?;
        Ok(self.root.join(locale).join(format!("{slug}.json")))
    }

    async fn list_locale(&self, locale: &str, out: &mut Vec<PageSummary>) -> Result<()> {
        let dir_path = self.root.join(locale);
        let mut dir = match tokio::fs::read_dir(&dir_path).await {
            Ok(dir) => dir,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(()),
            Err(e) => return Err(e.into()),
        };

        while let Some(entry) = dir.next_entry().await? {
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            let Some(slug) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            match self.load(locale, slug).await {
                Ok(page) => out.push(page.summary()),
                Err(e) => warn!(path = %path.display(), error = %e, "Skipping unreadable page"),
            }
        }
        Ok(())
    }
}

#[async_trait]
impl PageStore for FilePageStore {
    async fn load(&self, locale: &str, slug: &str) -> Result<StoredPage> {
        let path = self.page_path(locale, slug)?;
        let raw = match tokio::fs::read_to_string(&path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(Error::PageNotFound {
                    locale: locale.to_string(),
                    slug: slug.to_string(),
                });
            }
            Err(e) => return Err(e.into()),
        };

        let mut page: StoredPage = serde_json::from_str(&raw)?;
        // The file location is authoritative
        page.locale = locale.to_string();
        page.slug = slug.to_string();

        debug!(locale, slug, blocks = page.blocks.len(), "Page loaded");
        Ok(page)
    }

    async fn save(&self, page: &StoredPage) -> Result<()> {
        let path = self.page_path(&page.locale, &page.slug)?;
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        let json = if self.pretty {
            serde_json::to_string_pretty(page)?
        } else {
            serde_json::to_string(page)?
        };

        // Write next to the target and rename so readers never see a partial file
        let tmp = path.with_extension("json.tmp");
        tokio::fs::write(&tmp, json).await?;
        tokio::fs::rename(&tmp, &path).await?;

        info!(locale = %page.locale, slug = %page.slug, blocks = page.blocks.len(), "Page saved");
        Ok(())
    }

    async fn list(&self, locale: Option<&str>) -> Result<Vec<PageSummary>> {
        let mut pages = Vec::new();

        match locale {
            Some(locale) => {
                validate_key(locale)?;
                self.list_locale(locale, &mut pages).await?;
            }
            None => {
                let mut dir = match tokio::fs::read_dir(&self.root).await {
                    Ok(dir) => dir,
                    Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(pages),
                    Err(e) => return Err(e.into()),
                };
                while let Some(entry) = dir.next_entry().await? {
                    if !entry.file_type().await?.is_dir() {
                        continue;
                    }
                    let name = entry.file_name();
                    let Some(locale) = name.to_str() else {
                        continue;
                    };
                    if validate_key(locale).is_ok() {
                        self.list_locale(locale, &mut pages).await?;
                    }
                }
            }
        }

        pages.sort_by(|a, b| (&a.locale, &a.slug).cmp(&(&b.locale, &b.slug)));
        Ok(pages)
    }
}

/// Locales and slugs become path segments
fn validate_key(key: &str) -> Result<()> {
    let valid = !key.is_empty()
        && !key.starts_with('.')
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'));
    if valid {
        Ok(())
    } else {
        Err(Error::InvalidPageKey(key.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::BlockId;
    use serde_json::json;
    use tempfile::TempDir;

    fn legacy_page() -> StoredPage {
        StoredPage::new("en", "home")
            .with_title("Home")
            .with_blocks(vec![
                json!({"id": "h", "type": "hero", "order": 1, "data": {"headline": "Welcome"}}),
                json!({"id": "r", "type": "richText", "order": 0, "data": {"data": {"content": "Intro"}}}),
            ])
    }

    #[test]
    fn test_validate_key() {
        assert!(validate_key("en").is_ok());
        assert!(validate_key("pt-BR").is_ok());
        assert!(validate_key("about_us").is_ok());
        assert!(validate_key("").is_err());
        assert!(validate_key("..").is_err());
        assert!(validate_key("a/b").is_err());
        assert!(validate_key("a b").is_err());
    }

    #[test]
    fn test_page_editor_normalizes_legacy_blocks() {
        let page = legacy_page();
        let editor = page.editor();
        let ids: Vec<&str> = editor.blocks().iter().map(|b| b.id.as_str()).collect();
        assert_eq!(ids, ["r", "h"]);
    }

    #[tokio::test]
    async fn test_save_and_load() {
        let dir = TempDir::new().unwrap();
        let store = FilePageStore::new(dir.path());
        let page = legacy_page();

        store.save(&page).await.unwrap();
        assert!(dir.path().join("en").join("home.json").exists());

        let loaded = store.load("en", "home").await.unwrap();
        assert_eq!(loaded.id, page.id);
        assert_eq!(loaded.title, "Home");
        assert_eq!(loaded.blocks, page.blocks);
    }

    #[tokio::test]
    async fn test_load_missing_page() {
        let dir = TempDir::new().unwrap();
        let store = FilePageStore::new(dir.path());

        let err = store.load("en", "missing").await.unwrap_err();
        assert!(matches!(err, Error::PageNotFound { .. }));
        assert_eq!(err.code(), "page_not_found");
    }

    #[tokio::test]
    async fn test_rejects_path_traversal() {
        let dir = TempDir::new().unwrap();
        let store = FilePageStore::new(dir.path());

        let err = store.load("en", "../secrets").await.unwrap_err();
        assert!(matches!(err, Error::InvalidPageKey(_)));
    }

    #[tokio::test]
    async fn test_apply_editor_changes() {
        let dir = TempDir::new().unwrap();
        let store = FilePageStore::new(dir.path()).with_pretty(false);
        let mut page = legacy_page();

        let mut editor = page.editor();
        editor
            .reorder(&BlockId::from("h"), &BlockId::from("r"))
            .unwrap();
        page.apply(&editor);
        store.save(&page).await.unwrap();

        let loaded = store.load("en", "home").await.unwrap();
        assert_eq!(loaded.blocks[0]["id"], "h");
        assert_eq!(loaded.blocks[0]["order"], 0);
        assert_eq!(loaded.blocks[1]["data"]["content"], "Intro");
    }

    #[tokio::test]
    async fn test_list_pages() {
        let dir = TempDir::new().unwrap();
        let store = FilePageStore::new(dir.path());

        store.save(&StoredPage::new("en", "home")).await.unwrap();
        store.save(&StoredPage::new("en", "about")).await.unwrap();
        store.save(&legacy_page().with_title("Início")).await.unwrap();
        store.save(&StoredPage::new("pt-BR", "home")).await.unwrap();

        let all = store.list(None).await.unwrap();
        let keys: Vec<(&str, &str)> = all
            .iter()
            .map(|p| (p.locale.as_str(), p.slug.as_str()))
            .collect();
        assert_eq!(keys, [("en", "about"), ("en", "home"), ("pt-BR", "home")]);

        let en = store.list(Some("en")).await.unwrap();
        assert_eq!(en.len(), 2);
        assert_eq!(en[1].block_count, 2);

        assert!(store.list(Some("fr")).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_list_empty_root() {
        let dir = TempDir::new().unwrap();
        let store = FilePageStore::new(dir.path().join("missing"));
        assert!(store.list(None).await.unwrap().is_empty());
    }
}
