use async_trait::async_trait;
use dashmap::DashMap;
use signpost_core::{KvStore, StoreError};

/// In-memory implementation of the store contract using DashMap.
///
/// DashMap's sharded locks allow concurrent reads and writes to different
/// buckets without blocking. Listing is sorted lexicographically so that
/// enumeration order is deterministic, matching how hosted KV services
/// list keys.
#[derive(Debug, Clone, Default)]
pub struct MemoryKvStore {
    entries: DashMap<String, String>,
}

impl MemoryKvStore {
    /// Creates an empty in-memory store.
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
        }
    }

    /// Number of stored keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[async_trait]
impl KvStore for MemoryKvStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.get(key).map(|v| v.clone()))
    }

    async fn put(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<(), StoreError> {
        self.entries.remove(key);
        Ok(())
    }

    async fn list_keys(&self, prefix: Option<&str>) -> Result<Vec<String>, StoreError> {
        let mut keys: Vec<String> = self
            .entries
            .iter()
            .map(|entry| entry.key().clone())
            .filter(|key| prefix.is_none_or(|p| key.starts_with(p)))
            .collect();
        keys.sort_unstable();
        Ok(keys)
    }
}
