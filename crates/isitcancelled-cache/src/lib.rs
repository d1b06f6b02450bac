//! # IsItCancelled Cache
//!
//! Read access to the key-value cache that holds pre-computed scheduling data.
//!
//! This crate provides:
//! - The [`CacheStore`] trait the HTTP layer reads through
//! - A Redis-backed store sharing one managed connection
//! - An in-memory store for tests
//! - Cache configuration from environment variables
//! - Key builders matching the layout written by the ingestion job
//!
//! # Example
//!
//! ```ignore
//! use isitcancelled_cache::{CacheConfig, CacheStore, RedisCache, keys};
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = CacheConfig::from_env();
//!     let cache = RedisCache::new(&config).unwrap();
//!
//!     let raw: String = cache.get_raw(&keys::metadata::document()).await.unwrap();
//! }
//! ```

pub mod config;
pub mod keys;
pub mod memory;
pub mod redis;
pub mod store;

pub use self::config::CacheConfig;
pub use self::memory::MemoryCache;
pub use self::redis::RedisCache;
pub use self::store::{CacheError, CacheStore};
