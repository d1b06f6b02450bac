use std::sync::Arc;

use isitcancelled_cache::{CacheConfig, CacheError, CacheStore, RedisCache};
use isitcancelled_config::CorsConfig;

#[derive(Clone)]
pub struct AppState {
    /// Shared by every request handler for the life of the process.
    pub cache: Arc<dyn CacheStore>,
    pub cors_config: CorsConfig,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("cache", &self.cache.backend())
            .field("cors_config", &self.cors_config)
            .finish()
    }
}

impl AppState {
    pub fn new(cache: Arc<dyn CacheStore>, cors_config: CorsConfig) -> Self {
        Self { cache, cors_config }
    }
}

/// Builds the state used by the server: a Redis-backed cache and CORS settings
/// from the environment.
pub fn init_app_state(cache_config: &CacheConfig) -> Result<AppState, CacheError> {
    let cache = RedisCache::new(cache_config)?;

    Ok(AppState::new(Arc::new(cache), CorsConfig::from_env()))
}
