//! Key-value store adapters for the Signpost registry.
//!
//! Two implementations of the [`KvStore`](signpost_core::KvStore) contract:
//! an in-memory store for tests and single-process deployments, and a
//! Redis-backed store whose prefix listing drains the SCAN cursor fully.

pub mod memory;
pub mod redis;

pub use self::memory::MemoryKvStore;
pub use self::redis::RedisKvStore;
