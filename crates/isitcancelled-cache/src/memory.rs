//! In-process cache store for tests.
//!
//! Holds raw string values in a map so handlers can be exercised without a
//! Redis instance.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::{debug, instrument};

use crate::store::{CacheError, CacheStore};

#[derive(Clone, Debug, Default)]
pub struct MemoryCache {
    entries: Arc<RwLock<HashMap<String, String>>>,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `value` under `key`, replacing any previous value.
    pub async fn insert(&self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.write().await.insert(key.into(), value.into());
    }
}

#[async_trait]
impl CacheStore for MemoryCache {
    #[instrument(skip(self), fields(cache.operation = "GET"))]
    async fn get_raw(&self, key: &str) -> Result<String, CacheError> {
        match self.entries.read().await.get(key) {
            Some(value) => {
                debug!(cache.key = %key, "Cache hit");
                Ok(value.clone())
            }
            None => {
                debug!(cache.key = %key, "Cache miss");
                Err(CacheError::Miss)
            }
        }
    }

    fn backend(&self) -> &'static str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_insert_and_get() {
        let cache = MemoryCache::new();
        cache.insert("meta", r#"{"weeks":[]}"#).await;

        assert_eq!(cache.get_raw("meta").await.unwrap(), r#"{"weeks":[]}"#);
    }

    #[tokio::test]
    async fn test_missing_key_is_miss() {
        let cache = MemoryCache::new();
        assert!(matches!(cache.get_raw("meta").await, Err(CacheError::Miss)));
    }

    #[tokio::test]
    async fn test_clones_share_entries() {
        let cache = MemoryCache::new();
        let other = cache.clone();
        other.insert("k", "v").await;

        assert_eq!(cache.get_raw("k").await.unwrap(), "v");

        cache.insert("k", "w").await;
        assert_eq!(other.get_raw("k").await.unwrap(), "w");
    }
}
