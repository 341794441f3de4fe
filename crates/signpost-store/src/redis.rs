use async_trait::async_trait;
use redis::AsyncCommands;
use signpost_core::{KvStore, StoreError};
use tracing::{debug, trace};

/// How many keys to request per SCAN round trip.
const SCAN_BATCH: usize = 100;

/// Redis-backed implementation of the store contract.
///
/// Registry keys are namespaced under a configurable prefix so that the
/// short-link keyspace can share a Redis instance with other data.
/// `list_keys` walks the SCAN cursor to exhaustion before returning, so
/// callers always see the complete keyspace.
#[derive(Debug, Clone)]
pub struct RedisKvStore {
    conn: redis::aio::MultiplexedConnection,
    key_prefix: String,
}

/// Maps a registry key to its namespaced Redis key.
fn namespaced_key(prefix: &str, key: &str) -> String {
    format!("{prefix}{key}")
}

/// Strips the namespace from a Redis key, or `None` for foreign keys.
fn strip_namespace<'a>(prefix: &str, redis_key: &'a str) -> Option<&'a str> {
    redis_key.strip_prefix(prefix)
}

fn map_redis_error(operation: &str, err: redis::RedisError) -> StoreError {
    let message = format!("{operation}: {err}");
    if err.is_timeout() {
        StoreError::Timeout(message)
    } else if err.is_io_error() || err.is_connection_refusal() {
        StoreError::Unavailable(message)
    } else {
        StoreError::Operation(message)
    }
}

impl RedisKvStore {
    /// Creates a store over an existing multiplexed connection.
    pub fn new(conn: redis::aio::MultiplexedConnection) -> Self {
        Self {
            conn,
            key_prefix: "sp:link:".to_string(),
        }
    }

    /// Creates a store with a custom key namespace (e.g. `"myapp:link:"`).
    pub fn with_prefix(
        conn: redis::aio::MultiplexedConnection,
        key_prefix: impl Into<String>,
    ) -> Self {
        Self {
            conn,
            key_prefix: key_prefix.into(),
        }
    }

    /// Creates a store by opening a new connection to `redis_url`.
    pub async fn connect(redis_url: &str) -> Result<Self, StoreError> {
        let client = redis::Client::open(redis_url)
            .map_err(|e| map_redis_error("failed to parse redis url", e))?;
        let conn = client
            .get_multiplexed_async_connection()
            .await
            .map_err(|e| map_redis_error("failed to connect to redis", e))?;
        Ok(Self::new(conn))
    }

    fn redis_key(&self, key: &str) -> String {
        namespaced_key(&self.key_prefix, key)
    }
}

#[async_trait]
impl KvStore for RedisKvStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        trace!(key = %key, "fetching value from redis");
        let mut conn = self.conn.clone();
        conn.get::<_, Option<String>>(self.redis_key(key))
            .await
            .map_err(|e| map_redis_error("failed to fetch value from redis", e))
    }

    async fn put(&self, key: &str, value: &str) -> Result<(), StoreError> {
        trace!(key = %key, "writing value to redis");
        let mut conn = self.conn.clone();
        conn.set::<_, _, ()>(self.redis_key(key), value)
            .await
            .map_err(|e| map_redis_error("failed to write value to redis", e))
    }

    async fn delete(&self, key: &str) -> Result<(), StoreError> {
        trace!(key = %key, "deleting key from redis");
        let mut conn = self.conn.clone();
        conn.del::<_, ()>(self.redis_key(key))
            .await
            .map_err(|e| map_redis_error("failed to delete key from redis", e))
    }

    async fn list_keys(&self, prefix: Option<&str>) -> Result<Vec<String>, StoreError> {
        let pattern = format!("{}{}*", self.key_prefix, prefix.unwrap_or(""));
        trace!(pattern = %pattern, "scanning redis keyspace");

        let mut conn = self.conn.clone();
        let mut keys = Vec::new();
        let mut cursor: u64 = 0;

        // SCAN returns partial pages; the listing is only complete once
        // the cursor comes back around to zero.
        loop {
            let (next, batch): (u64, Vec<String>) = redis::cmd("SCAN")
                .arg(cursor)
                .arg("MATCH")
                .arg(&pattern)
                .arg("COUNT")
                .arg(SCAN_BATCH)
                .query_async(&mut conn)
                .await
                .map_err(|e| map_redis_error("failed to scan redis keyspace", e))?;

            keys.extend(
                batch
                    .iter()
                    .filter_map(|k| strip_namespace(&self.key_prefix, k))
                    .map(str::to_owned),
            );

            cursor = next;
            if cursor == 0 {
                break;
            }
        }

        debug!(count = keys.len(), "scanned redis keyspace");
        keys.sort_unstable();
        Ok(keys)
    }
}
