use async_trait::async_trait;
use redis::AsyncCommands;
use tracing::info;

use crate::store::{KvStore, StoreError};

/// Redis-backed store. Every key is namespaced with `prefix`.
#[derive(Clone)]
pub struct RedisStore {
    client: redis::Client,
    prefix: String,
}

impl RedisStore {
    pub fn open(redis_url: &str, prefix: impl Into<String>) -> Result<Self, StoreError> {
        let client = redis::Client::open(redis_url)?;
        let prefix = prefix.into();
        info!("Redis store initialized (key prefix '{prefix}')");
        Ok(Self { client, prefix })
    }

    fn key(&self, key: &str) -> String {
        format!("{}{}", self.prefix, key)
    }

    async fn connection(&self) -> Result<redis::aio::MultiplexedConnection, StoreError> {
        Ok(self.client.get_multiplexed_async_connection().await?)
    }
}

#[async_trait]
impl KvStore for RedisStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let mut conn = self.connection().await?;
        let value: Option<String> = conn.get(self.key(key)).await?;
        Ok(value)
    }

    async fn set(&self, key: &str, value: String) -> Result<(), StoreError> {
        let mut conn = self.connection().await?;
        conn.set::<_, _, ()>(self.key(key), value).await?;
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), StoreError> {
        let mut conn = self.connection().await?;
        conn.del::<_, ()>(self.key(key)).await?;
        Ok(())
    }
}
