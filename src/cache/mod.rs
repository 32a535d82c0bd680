//! Cache Module
//!
//! Provides a bounded in-memory store with O(1) LRU eviction.

mod entry;
mod recency;
mod stats;
mod store;


// Re-export public types
pub use entry::Entry;
pub use recency::RecencyList;
pub use stats::CacheStats;
pub use store::LruCache;
