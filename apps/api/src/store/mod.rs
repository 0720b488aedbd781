//! Key-value persistence port.
//!
//! The session controller only ever talks to `KvStore`; which backend sits behind it is decided
//! once at startup. Values are JSON text, addressed by the fixed keys below.

pub mod memory;
pub mod redis_store;

use async_trait::async_trait;
use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;
use tracing::warn;

pub use memory::MemoryStore;
pub use redis_store::RedisStore;

/// Current analysis record slot.
pub const CURRENT_ANALYSIS_KEY: &str = "currentAnalysis";
/// Every fully analyzed record, keyed by record id.
pub const ANALYSIS_HISTORY_KEY: &str = "analysisHistory";
/// Test-id → passed flag map written by the checklist view.
pub const TEST_CHECKLIST_KEY: &str = "testChecklist";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store backend error: {0}")]
    Backend(String),

    #[error("redis error: {0}")]
    Redis(#[from] redis::RedisError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Get/set/remove by string key. Implementations must be safe to share across tasks.
#[async_trait]
pub trait KvStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    async fn set(&self, key: &str, value: String) -> Result<(), StoreError>;
    async fn remove(&self, key: &str) -> Result<(), StoreError>;
}

/// Reads and decodes `key`. Undecodable content is logged and treated as absent.
pub async fn read_json<T: DeserializeOwned>(
    store: &dyn KvStore,
    key: &str,
) -> Result<Option<T>, StoreError> {
    let Some(raw) = store.get(key).await? else {
        return Ok(None);
    };
    match serde_json::from_str(&raw) {
        Ok(value) => Ok(Some(value)),
        Err(e) => {
            warn!("Ignoring malformed JSON under '{key}': {e}");
            Ok(None)
        }
    }
}

pub async fn write_json<T: Serialize + ?Sized>(
    store: &dyn KvStore,
    key: &str,
    value: &T,
) -> Result<(), StoreError> {
    let payload = serde_json::to_string(value)?;
    store.set(key, payload).await
}
