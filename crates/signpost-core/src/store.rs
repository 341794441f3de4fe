use crate::error::StoreError;
use async_trait::async_trait;

/// Contract for the string-keyed, string-valued store backing the registry.
///
/// The store is the sole owner of record state; the registry holds no
/// cache and treats every read as authoritative but possibly stale
/// (eventual consistency from the underlying service).
#[async_trait]
pub trait KvStore: Send + Sync + 'static {
    /// Reads the value at `key`, or `None` if absent.
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Writes `value` at `key`, fully overwriting any existing value.
    async fn put(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Deletes `key`. Deleting an absent key is not an error; callers
    /// wanting not-found semantics must check existence themselves.
    async fn delete(&self, key: &str) -> Result<(), StoreError>;

    /// Lists every key, optionally filtered by prefix.
    ///
    /// Implementations must drain whatever pagination the backend uses
    /// before returning; callers rely on the result being exhaustive.
    async fn list_keys(&self, prefix: Option<&str>) -> Result<Vec<String>, StoreError>;
}
