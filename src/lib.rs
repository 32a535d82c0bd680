//! LRU Store - A bounded in-memory key/value store
//!
//! Provides O(1) lookup and insertion with least-recently-used eviction.

pub mod cache;
pub mod command;
pub mod config;
pub mod error;
pub mod shared;

pub use cache::{CacheStats, LruCache};
pub use config::Config;
pub use error::{CacheError, Result};
pub use shared::SharedCache;
