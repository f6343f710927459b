//! Local key-value storage backends.
//!
//! The calculator persists only two records: the saved scenario list and the
//! UI preferences. Both go through the [`KeyValueStore`] trait so embedders
//! can swap the backing store; the crate ships an in-memory store and a
//! JSON-file store.

mod file;

pub use file::JsonFileStore;

use std::collections::HashMap;
use std::sync::Arc;

use serde_json::Value;
use thiserror::Error;
use tokio::sync::RwLock;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("stored record is not valid JSON: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type StorageResult<T> = std::result::Result<T, StorageError>;

/// A string-keyed store of JSON records.
///
/// Failures are always recoverable: a backend must never leave a caller's
/// in-memory state depending on a half-applied write.
#[async_trait::async_trait]
pub trait KeyValueStore: Send + Sync {
    fn name(&self) -> &str;

    async fn get(&self, key: &str) -> StorageResult<Option<Value>>;

    async fn put(&self, key: &str, value: Value) -> StorageResult<()>;

    /// Returns true if the key existed.
    async fn remove(&self, key: &str) -> StorageResult<bool>;
}

/// In-memory store for tests and ephemeral embedders.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: Arc<RwLock<HashMap<String, Value>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn count(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn clear(&self) {
        self.records.write().await.clear();
    }
}

#[async_trait::async_trait]
impl KeyValueStore for MemoryStore {
    fn name(&self) -> &str {
        "memory"
    }

    async fn get(&self, key: &str) -> StorageResult<Option<Value>> {
        Ok(self.records.read().await.get(key).cloned())
    }

    async fn put(&self, key: &str, value: Value) -> StorageResult<()> {
        self.records.write().await.insert(key.to_string(), value);
        Ok(())
    }

    async fn remove(&self, key: &str) -> StorageResult<bool> {
        Ok(self.records.write().await.remove(key).is_some())
    }
}
