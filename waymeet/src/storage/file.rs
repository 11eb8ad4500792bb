use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use super::KeyValueStorage;
use crate::errors::StoreResult;

/// Keeps every item in one JSON object on disk. A missing file reads as empty.
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn load(&self) -> StoreResult<BTreeMap<String, String>> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(content) if content.trim().is_empty() => Ok(BTreeMap::new()),
            Ok(content) => Ok(serde_json::from_str(&content)?),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(err) => Err(err.into()),
        }
    }

    async fn save(&self, items: &BTreeMap<String, String>) -> StoreResult<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            tokio::fs::create_dir_all(parent).await?;
        }
        let json = serde_json::to_string_pretty(items)?;
        tokio::fs::write(&self.path, json).await?;
        Ok(())
    }
}

impl KeyValueStorage for FileStorage {
    async fn get_item(&mut self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.load().await?.remove(key))
    }

    async fn set_item(&mut self, key: &str, value: &str) -> StoreResult<()> {
        let mut items = self.load().await?;
        items.insert(key.to_string(), value.to_string());
        self.save(&items).await
    }

    async fn remove_item(&mut self, key: &str) -> StoreResult<()> {
        let mut items = self.load().await?;
        if items.remove(key).is_some() {
            self.save(&items).await?;
        }
        Ok(())
    }
}
