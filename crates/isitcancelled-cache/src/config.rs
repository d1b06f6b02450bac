//! Redis cache configuration.
//!
//! Connection settings are loaded from environment variables.

use std::env;

use tracing::warn;

const DEFAULT_HOST: &str = "redis";
const DEFAULT_PORT: u16 = 6379;

/// Redis cache configuration loaded from environment variables.
///
/// # Environment Variables
///
/// - `REDIS_HOST`: Redis host name (default: `redis`)
/// - `REDIS_PORT`: Redis TCP port (default: `6379`)
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CacheConfig {
    /// Redis host name or address.
    pub host: String,

    /// Redis TCP port.
    pub port: u16,
}

impl CacheConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_vars(env::var("REDIS_HOST").ok(), env::var("REDIS_PORT").ok())
    }

    /// Build a configuration from optional raw values.
    ///
    /// Empty values fall back to the defaults. A port that does not parse as
    /// a `u16` is reported and replaced by the default.
    pub fn from_vars(host: Option<String>, port: Option<String>) -> Self {
        let host = host
            .filter(|h| !h.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_HOST.into());

        let port = match port.as_deref().map(str::trim) {
            None | Some("") => DEFAULT_PORT,
            Some(raw) => raw.parse().unwrap_or_else(|_| {
                warn!(redis.port = %raw, "Invalid REDIS_PORT, using default {}", DEFAULT_PORT);
                DEFAULT_PORT
            }),
        };

        Self { host, port }
    }

    /// Address in `host:port` form, for logs.
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// `(host, port)` pair accepted by `redis::Client::open`.
    pub fn connection_target(&self) -> (String, u16) {
        (self.host.clone(), self.port)
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.into(),
            port: DEFAULT_PORT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_unset() {
        let config = CacheConfig::from_vars(None, None);
        assert_eq!(config, CacheConfig::default());
        assert_eq!(config.address(), "redis:6379");
    }

    #[test]
    fn test_explicit_host_and_port() {
        let config = CacheConfig::from_vars(Some("localhost".into()), Some("6380".into()));
        assert_eq!(config.host, "localhost");
        assert_eq!(config.port, 6380);
    }

    #[test]
    fn test_empty_values_fall_back() {
        let config = CacheConfig::from_vars(Some("".into()), Some(" ".into()));
        assert_eq!(config, CacheConfig::default());
    }

    #[test]
    fn test_invalid_port_falls_back() {
        let config = CacheConfig::from_vars(None, Some("not-a-port".into()));
        assert_eq!(config.port, 6379);
    }

    #[test]
    fn test_connection_target() {
        let config = CacheConfig::from_vars(Some("cache.internal".into()), Some("7000".into()));
        assert_eq!(config.connection_target(), ("cache.internal".to_string(), 7000));
        assert_eq!(config.address(), "cache.internal:7000");
    }
}
