//! Local key-value persistence.
//!
//! The session flags are the only state that survives a restart. They live behind
//! [`KeyValueStorage`] so the stores can run against memory in tests, a JSON file
//! on a device, or a shared Redis instance.

mod file;
mod memory;
mod redis_backend;

pub use file::FileStorage;
pub use memory::MemoryStorage;
pub use redis_backend::RedisStorage;

use crate::config::{StorageBackend, StorageSettings};
use crate::errors::StoreResult;

/// String key-value store with async access.
#[allow(async_fn_in_trait)]
pub trait KeyValueStorage {
    async fn get_item(&mut self, key: &str) -> StoreResult<Option<String>>;
    async fn set_item(&mut self, key: &str, value: &str) -> StoreResult<()>;
    async fn remove_item(&mut self, key: &str) -> StoreResult<()>;
}

/// Backend picked at runtime from configuration.
pub enum AnyStorage {
    Memory(MemoryStorage),
    File(FileStorage),
    Redis(RedisStorage),
}

impl AnyStorage {
    pub async fn from_settings(settings: &StorageSettings) -> StoreResult<Self> {
        let storage = match settings.backend {
            StorageBackend::Memory => AnyStorage::Memory(MemoryStorage::new()),
            StorageBackend::File => AnyStorage::File(FileStorage::new(settings.path.clone())),
            StorageBackend::Redis => {
                let url = settings.resolved_redis_url()?;
                AnyStorage::Redis(RedisStorage::connect(&url, settings.prefix.clone()).await?)
            }
        };
        log::debug!("using {} storage", storage.backend_name());
        Ok(storage)
    }

    pub fn backend_name(&self) -> &'static str {
        match self {
            AnyStorage::Memory(_) => "memory",
            AnyStorage::File(_) => "file",
            AnyStorage::Redis(_) => "redis",
        }
    }
}

impl KeyValueStorage for AnyStorage {
    async fn get_item(&mut self, key: &str) -> StoreResult<Option<String>> {
        match self {
            AnyStorage::Memory(inner) => inner.get_item(key).await,
            AnyStorage::File(inner) => inner.get_item(key).await,
            AnyStorage::Redis(inner) => inner.get_item(key).await,
        }
    }

    async fn set_item(&mut self, key: &str, value: &str) -> StoreResult<()> {
        match self {
            AnyStorage::Memory(inner) => inner.set_item(key, value).await,
            AnyStorage::File(inner) => inner.set_item(key, value).await,
            AnyStorage::Redis(inner) => inner.set_item(key, value).await,
        }
    }

    async fn remove_item(&mut self, key: &str) -> StoreResult<()> {
        match self {
            AnyStorage::Memory(inner) => inner.remove_item(key).await,
            AnyStorage::File(inner) => inner.remove_item(key).await,
            AnyStorage::Redis(inner) => inner.remove_item(key).await,
        }
    }
}
