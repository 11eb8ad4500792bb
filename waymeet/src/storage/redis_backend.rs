use redis::AsyncCommands;
use redis::aio::ConnectionManager;

use super::KeyValueStorage;
use crate::errors::StoreResult;
use crate::keys::KeyContext;

const SERVICE: &str = "device";

/// Stores items as plain Redis strings under `{prefix}:device:{key}`.
#[derive(Clone)]
pub struct RedisStorage {
    conn: ConnectionManager,
    prefix: String,
}

impl RedisStorage {
    pub fn new(conn: ConnectionManager, prefix: impl Into<String>) -> Self {
        Self {
            conn,
            prefix: prefix.into(),
        }
    }

    pub async fn connect(url: &str, prefix: impl Into<String>) -> StoreResult<Self> {
        let client = redis::Client::open(url)?;
        let conn = ConnectionManager::new(client).await?;
        Ok(Self::new(conn, prefix))
    }

    fn key(&self, key: &str) -> String {
        KeyContext::new(&self.prefix, SERVICE).item(key)
    }

    /// Delete every item under this prefix (for test cleanup).
    pub async fn clear(&mut self) -> StoreResult<u64> {
        let pattern = KeyContext::new(&self.prefix, SERVICE).pattern();
        let keys: Vec<String> = self.conn.keys(pattern).await?;
        if keys.is_empty() {
            return Ok(0);
        }
        let deleted: u64 = self.conn.del(keys).await?;
        Ok(deleted)
    }
}

impl KeyValueStorage for RedisStorage {
    async fn get_item(&mut self, key: &str) -> StoreResult<Option<String>> {
        let key = self.key(key);
        let value: Option<String> = self.conn.get(key).await?;
        Ok(value)
    }

    async fn set_item(&mut self, key: &str, value: &str) -> StoreResult<()> {
        let key = self.key(key);
        let _: () = self.conn.set(key, value).await?;
        Ok(())
    }

    async fn remove_item(&mut self, key: &str) -> StoreResult<()> {
        let key = self.key(key);
        let _: u64 = self.conn.del(key).await?;
        Ok(())
    }
}
