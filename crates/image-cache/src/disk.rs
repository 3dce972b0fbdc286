//! Disk persistence tier
//!
//! Optional second-tier store for cache entries, backed by sled. The
//! in-memory cache treats it as a slower lookup consulted on miss before the
//! network; records survive process restarts.

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::SystemTime;
use thiserror::Error;

/// Disk store error types
#[derive(Debug, Error)]
pub enum DiskError {
    /// Sled database error
    #[error("database error: {0}")]
    Database(#[from] sled::Error),

    /// Record encoding error
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for disk operations
pub type Result<T> = std::result::Result<T, DiskError>;

/// On-disk record format
#[derive(Debug, Clone, Serialize, Deserialize)]
struct DiskRecord {
    key: String,
    bytes: Vec<u8>,
    stored_at: SystemTime,
}

/// Sled-backed store of fetched image bytes
pub struct DiskStore {
    db: sled::Db,
}

impl DiskStore {
    /// Open (or create) a store at the given path
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let db = sled::Config::new()
            .path(path.as_ref())
            .use_compression(true)
            .open()?;
        Ok(Self { db })
    }

    /// Create an in-memory store (for testing)
    pub fn in_memory() -> Result<Self> {
        let db = sled::Config::new().temporary(true).open()?;
        Ok(Self { db })
    }

    /// Read the bytes stored for a locator
    pub fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        match self.db.get(key.as_bytes())? {
            Some(raw) => {
                let record: DiskRecord = serde_json::from_slice(&raw)?;
                Ok(Some(record.bytes))
            }
            None => Ok(None),
        }
    }

    /// Store bytes for a locator, replacing any previous record
    pub fn put(&self, key: &str, bytes: &[u8]) -> Result<()> {
        let record = DiskRecord {
            key: key.to_string(),
            bytes: bytes.to_vec(),
            stored_at: SystemTime::now(),
        };
        let raw = serde_json::to_vec(&record)?;
        self.db.insert(key.as_bytes(), raw)?;
        Ok(())
    }

    /// Remove the record for a locator
    pub fn remove(&self, key: &str) -> Result<bool> {
        Ok(self.db.remove(key.as_bytes())?.is_some())
    }

    /// Remove every record
    pub fn clear(&self) -> Result<()> {
        self.db.clear()?;
        Ok(())
    }

    /// Number of stored records
    pub fn len(&self) -> usize {
        self.db.len()
    }

    /// Whether the store holds no records
    pub fn is_empty(&self) -> bool {
        self.db.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        let store = DiskStore::in_memory().unwrap();
        store.put("https://example.com/a.png", &[1, 2, 3]).unwrap();

        assert_eq!(store.get("https://example.com/a.png").unwrap(), Some(vec![1, 2, 3]));
        assert_eq!(store.get("https://example.com/missing.png").unwrap(), None);
    }

    #[test]
    fn test_put_replaces() {
        let store = DiskStore::in_memory().unwrap();
        store.put("key", &[1]).unwrap();
        store.put("key", &[2, 3]).unwrap();

        assert_eq!(store.get("key").unwrap(), Some(vec![2, 3]));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_remove() {
        let store = DiskStore::in_memory().unwrap();
        store.put("key", &[1]).unwrap();

        assert!(store.remove("key").unwrap());
        assert!(!store.remove("key").unwrap());
        assert_eq!(store.get("key").unwrap(), None);
    }

    #[test]
    fn test_clear() {
        let store = DiskStore::in_memory().unwrap();
        store.put("a", &[1]).unwrap();
        store.put("b", &[2]).unwrap();

        store.clear().unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn test_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("images.db");

        {
            let store = DiskStore::open(&path).unwrap();
            store.put("key", &[7, 8, 9]).unwrap();
        }

        let store = DiskStore::open(&path).unwrap();
        assert_eq!(store.get("key").unwrap(), Some(vec![7, 8, 9]));
    }
}
