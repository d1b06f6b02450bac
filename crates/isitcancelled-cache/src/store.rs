//! The read interface shared by every cache backend.

use async_trait::async_trait;

/// Error type for cache operations.
#[derive(Debug, thiserror::Error)]
pub enum CacheError {
    #[error("Redis connection error: {0}")]
    Connection(#[from] ::redis::RedisError),

    #[error("Deserialization error: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Cache miss")]
    Miss,
}

/// A read-only view of the cache.
///
/// Implementations must be safe to share between concurrent request handlers
/// without external locking.
#[async_trait]
pub trait CacheStore: Send + Sync {
    /// Returns the raw string stored under `key`.
    ///
    /// # Errors
    ///
    /// `CacheError::Miss` when the key does not exist, `CacheError::Connection`
    /// when the backend cannot be reached or rejects the command.
    async fn get_raw(&self, key: &str) -> Result<String, CacheError>;

    /// Human readable backend name for startup logs.
    fn backend(&self) -> &'static str;
}
