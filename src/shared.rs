//! Shared Cache Handle
//!
//! Mutual-exclusion wrapper for hosts that share one cache across tasks.

use std::hash::Hash;
use std::sync::Arc;

use tokio::sync::Mutex;

use crate::cache::{CacheStats, LruCache};
use crate::config::Config;
use crate::error::Result;

/// Cloneable handle to a single [`LruCache`] guarded by a mutex.
///
/// Every `get` reorders the recency list, so reads need exclusive access
/// too; a `Mutex` is used rather than an `RwLock`.
#[derive(Debug)]
pub struct SharedCache<K, V> {
    /// Lock-guarded cache instance
    inner: Arc<Mutex<LruCache<K, V>>>,
}

impl<K, V> Clone for SharedCache<K, V> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<K, V> SharedCache<K, V>
where
    K: Hash + Eq + Clone,
    V: Clone,
{
    /// Wraps an existing cache.
    pub fn new(cache: LruCache<K, V>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(cache)),
        }
    }

    /// Builds a cache sized from the configuration.
    ///
    /// # Errors
    /// Fails when the configured capacity is zero.
    pub fn from_config(config: &Config) -> Result<Self> {
        LruCache::new(config.capacity).map(Self::new)
    }

    /// Looks up a key, returning a clone of the value.
    pub async fn get(&self, key: &K) -> Option<V> {
        self.inner.lock().await.get(key).cloned()
    }

    /// Stores a value, returning the value it replaced.
    pub async fn put(&self, key: K, value: V) -> Option<V> {
        self.inner.lock().await.put(key, value)
    }

    /// Looks up a key without affecting recency.
    pub async fn peek(&self, key: &K) -> Option<V> {
        self.inner.lock().await.peek(key).cloned()
    }

    /// Snapshot of resident keys, most recently used first.
    pub async fn keys(&self) -> Vec<K> {
        self.inner.lock().await.keys().cloned().collect()
    }

    pub async fn stats(&self) -> CacheStats {
        self.inner.lock().await.stats()
    }

    pub async fn len(&self) -> usize {
        self.inner.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.lock().await.is_empty()
    }

    pub async fn capacity(&self) -> usize {
        self.inner.lock().await.capacity()
    }
}
