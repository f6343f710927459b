//! JSON-file key-value store.
//!
//! One `<key>.json` file per record under a base directory. Writes go
//! through a temp file and a rename so a crash mid-write never leaves a
//! truncated record behind.

use std::path::{Path, PathBuf};

use serde_json::Value;

use super::{KeyValueStore, StorageResult};

/// File-backed store rooted at a base directory.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    base_dir: PathBuf,
}

impl JsonFileStore {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    /// Store rooted at the platform data directory
    /// (e.g. `~/.local/share/fabric-cost` on Linux).
    ///
    /// Falls back to the current directory when no home is available.
    pub fn default_location() -> Self {
        let base_dir = directories::ProjectDirs::from("com", "m365calc", "fabric-cost")
            .map(|dirs| dirs.data_dir().to_path_buf())
            .unwrap_or_else(|| PathBuf::from("."));
        Self::new(base_dir)
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    fn record_path(&self, key: &str) -> PathBuf {
        // Key becomes the file name; anything outside [A-Za-z0-9_-] folds to '-'.
        let encoded: String = key
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                    c
                } else {
                    '-'
                }
            })
            .collect();
        self.base_dir.join(format!("{encoded}.json"))
    }
}

#[async_trait::async_trait]
impl KeyValueStore for JsonFileStore {
    fn name(&self) -> &str {
        "json-file"
    }

    async fn get(&self, key: &str) -> StorageResult<Option<Value>> {
        let path = self.record_path(key);
        let raw = match tokio::fs::read_to_string(&path).await {
            Ok(raw) => raw,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };
        Ok(Some(serde_json::from_str(&raw)?))
    }

    async fn put(&self, key: &str, value: Value) -> StorageResult<()> {
        tokio::fs::create_dir_all(&self.base_dir).await?;

        let path = self.record_path(key);
        let tmp = path.with_extension("json.tmp");
        let raw = serde_json::to_string_pretty(&value)?;

        tokio::fs::write(&tmp, raw.as_bytes()).await?;
        tokio::fs::rename(&tmp, &path).await?;
        Ok(())
    }

    async fn remove(&self, key: &str) -> StorageResult<bool> {
        match tokio::fs::remove_file(self.record_path(key)).await {
            Ok(()) => Ok(true),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(err) => Err(err.into()),
        }
    }
}
