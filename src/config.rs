//! Configuration Module
//!
//! Handles loading the store configuration from environment variables.

use std::env;

/// Capacity used when `CACHE_CAPACITY` is unset or unparseable.
pub const DEFAULT_CAPACITY: usize = 1000;

/// Store configuration parameters.
///
/// Values are validated when the cache is built, not here, so that a
/// configured capacity of zero surfaces as a construction error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Maximum number of entries the cache can hold
    pub capacity: usize,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_CAPACITY` - Maximum cache entries (default: 1000)
    pub fn from_env() -> Self {
        Self {
            capacity: env::var("CACHE_CAPACITY")
                .ok()
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(DEFAULT_CAPACITY),
        }
    }

    /// Creates a Config with an explicit capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self { capacity }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
        }
    }
}
