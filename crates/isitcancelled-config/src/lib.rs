//! # IsItCancelled Config
//!
//! Configuration types for the IsItCancelled API.
//!
//! - [`cors`]: CORS (Cross-Origin Resource Sharing) configuration
//! - [`server`]: Listener settings
//!
//! Redis settings live next to the cache client in `isitcancelled-cache`.
//!
//! # Example
//!
//! ```ignore
//! use isitcancelled_config::{CorsConfig, ServerConfig};
//!
//! let cors_config = CorsConfig::from_env();
//! let server_config = ServerConfig::default();
//! ```

pub mod cors;
pub mod server;

pub use cors::CorsConfig;
pub use server::ServerConfig;
