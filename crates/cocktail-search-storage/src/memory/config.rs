//! Collection configuration

use serde::{Deserialize, Deserializer};
use std::time::Duration;

use cocktail_search_core::{CacheError, Result};

/// Configuration shared by both cache collections
///
/// Deserializes from `{ "ttl_secs": 300, "max_size": 1000 }`; missing fields
/// take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Strict expiry window, measured from insertion
    #[serde(rename = "ttl_secs", deserialize_with = "duration_from_secs")]
    pub ttl: Duration,
    /// Maximum number of entries per collection
    pub max_size: usize,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(300), // 5 minutes
            max_size: 1000,
        }
    }
}

impl CacheConfig {
    /// Create config with specific TTL
    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            ttl,
            ..Default::default()
        }
    }

    /// Create config with specific capacity
    pub fn with_max_size(max_size: usize) -> Self {
        Self {
            max_size,
            ..Default::default()
        }
    }

    /// Override the TTL
    pub fn ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    /// Override the capacity
    pub fn max_size(mut self, max_size: usize) -> Self {
        self.max_size = max_size;
        self
    }

    /// Reject configurations that would make every entry unusable
    pub fn validate(&self) -> Result<()> {
        if self.max_size == 0 {
            return Err(CacheError::InvalidConfig(
                "max_size must be greater than zero".into(),
            ));
        }
        if self.ttl.is_zero() {
            return Err(CacheError::InvalidConfig(
                "ttl must be greater than zero".into(),
            ));
        }
        Ok(())
    }
}

fn duration_from_secs<'de, D>(deserializer: D) -> std::result::Result<Duration, D::Error>
where
    D: Deserializer<'de>,
{
    u64::deserialize(deserializer).map(Duration::from_secs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CacheConfig::default();
        assert_eq!(config.ttl, Duration::from_secs(300));
        assert_eq!(config.max_size, 1000);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builders() {
        let config = CacheConfig::with_ttl(Duration::from_secs(30)).max_size(8);
        assert_eq!(config.ttl, Duration::from_secs(30));
        assert_eq!(config.max_size, 8);
    }

    #[test]
    fn test_validate_rejects_zero() {
        assert!(CacheConfig::with_max_size(0).validate().is_err());
        assert!(CacheConfig::with_ttl(Duration::ZERO).validate().is_err());
    }

    #[test]
    fn test_deserialize_partial() {
        let config: CacheConfig = serde_json::from_str(r#"{ "ttl_secs": 60 }"#).unwrap();
        assert_eq!(config.ttl, Duration::from_secs(60));
        assert_eq!(config.max_size, 1000);
    }
}
