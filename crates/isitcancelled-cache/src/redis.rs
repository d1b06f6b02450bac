//! Redis-backed cache store.
//!
//! One managed connection is shared by every clone of [`RedisCache`]. The
//! connection is established on first use. A failed connect is reported to
//! the caller at once; the next read makes a fresh attempt.

use std::sync::Arc;

use async_trait::async_trait;
use redis::{
    AsyncCommands, Client,
    aio::{ConnectionManager, ConnectionManagerConfig},
};
use tokio::sync::OnceCell;
use tracing::{debug, error, instrument};

use crate::config::CacheConfig;
use crate::store::{CacheError, CacheStore};

/// Redis cache client with a shared, lazily established connection.
#[derive(Clone)]
pub struct RedisCache {
    client: Client,
    conn: Arc<OnceCell<ConnectionManager>>,
    address: String,
}

impl std::fmt::Debug for RedisCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedisCache")
            .field("address", &self.address)
            .field("connected", &self.conn.initialized())
            .finish_non_exhaustive()
    }
}

impl RedisCache {
    /// Creates a new Redis cache client.
    ///
    /// No connection is opened here; the first read connects.
    ///
    /// # Errors
    ///
    /// Returns `CacheError::Connection` if the connection info is rejected.
    pub fn new(config: &CacheConfig) -> Result<Self, CacheError> {
        let client = Client::open(config.connection_target())?;

        Ok(Self {
            client,
            conn: Arc::new(OnceCell::new()),
            address: config.address(),
        })
    }

    /// Returns a handle to the shared connection, connecting if needed.
    ///
    /// A single connect attempt is made per call, without backoff. A failed
    /// attempt leaves the cell empty so the next call tries again.
    async fn connection(&self) -> Result<ConnectionManager, CacheError> {
        let conn = self
            .conn
            .get_or_try_init(|| async {
                debug!(redis.address = %self.address, "Connecting to Redis");
                let config = ConnectionManagerConfig::new().set_number_of_retries(0);
                ConnectionManager::new_with_config(self.client.clone(), config).await
            })
            .await?;

        Ok(conn.clone())
    }
}

#[async_trait]
impl CacheStore for RedisCache {
    #[instrument(skip(self), fields(cache.operation = "GET"))]
    async fn get_raw(&self, key: &str) -> Result<String, CacheError> {
        let mut conn = self.connection().await.inspect_err(|e| {
            error!(redis.address = %self.address, error = %e, "Redis connection error");
        })?;

        match conn.get::<_, Option<String>>(key).await {
            Ok(Some(value)) => {
                debug!(cache.key = %key, "Cache hit");
                Ok(value)
            }
            Ok(None) => {
                debug!(cache.key = %key, "Cache miss");
                Err(CacheError::Miss)
            }
            Err(e) => {
                error!(cache.key = %key, error = %e, "Redis GET error");
                Err(CacheError::Connection(e))
            }
        }
    }

    fn backend(&self) -> &'static str {
        "redis"
    }
}
