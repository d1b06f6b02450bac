use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use axum::body::{Body, Bytes};
use axum::http::{HeaderMap, Request, StatusCode};
use http_body_util::BodyExt;
use isitcancelled::router::init_router;
use isitcancelled::state::AppState;
use isitcancelled_cache::{CacheError, CacheStore, MemoryCache};
use isitcancelled_config::CorsConfig;
use tower::ServiceExt;

/// A store whose backend is always unreachable.
#[derive(Clone, Default)]
pub struct UnreachableCache {
    calls: Arc<AtomicUsize>,
}

impl UnreachableCache {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CacheStore for UnreachableCache {
    async fn get_raw(&self, _key: &str) -> Result<String, CacheError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(CacheError::Connection(redis::RedisError::from((
            redis::ErrorKind::IoError,
            "connection refused",
        ))))
    }

    fn backend(&self) -> &'static str {
        "unreachable"
    }
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl TestResponse {
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_slice(&self.body).unwrap()
    }
}

pub fn setup_test_app(cache: Arc<dyn CacheStore>) -> axum::Router {
    init_router(AppState::new(cache, CorsConfig::default()))
}

pub async fn get(app: axum::Router, uri: &str) -> TestResponse {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let body = response.into_body().collect().await.unwrap().to_bytes();

    TestResponse {
        status,
        headers,
        body,
    }
}

pub async fn memory_cache_with(entries: &[(&str, &str)]) -> MemoryCache {
    let cache = MemoryCache::new();
    for (key, value) in entries {
        cache.insert(*key, *value).await;
    }
    cache
}
