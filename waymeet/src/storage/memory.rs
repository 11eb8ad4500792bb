use std::collections::HashMap;

use super::KeyValueStorage;
use crate::errors::StoreResult;

/// Process-local storage; forgets everything on drop.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    items: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populated storage, handy for simulating a previous run.
    pub fn with_items<K, V, I>(items: I) -> Self
    where
        K: Into<String>,
        V: Into<String>,
        I: IntoIterator<Item = (K, V)>,
    {
        Self {
            items: items.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn peek(&self, key: &str) -> Option<&str> {
        self.items.get(key).map(String::as_str)
    }
}

impl KeyValueStorage for MemoryStorage {
    async fn get_item(&mut self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.items.get(key).cloned())
    }

    async fn set_item(&mut self, key: &str, value: &str) -> StoreResult<()> {
        self.items.insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove_item(&mut self, key: &str) -> StoreResult<()> {
        self.items.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn set_get_remove() {
        let mut storage = MemoryStorage::new();
        assert_eq!(storage.get_item("session").await.unwrap(), None);

        storage.set_item("session", "{\"userId\":\"1\"}").await.unwrap();
        assert_eq!(storage.get_item("session").await.unwrap().as_deref(), Some("{\"userId\":\"1\"}"));

        storage.remove_item("session").await.unwrap();
        assert!(storage.is_empty());
        // removing twice is fine
        storage.remove_item("session").await.unwrap();
    }
}
