//! Cache Store Module
//!
//! Main cache engine combining a HashMap index with an arena-backed recency list.

use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::Hash;
use std::mem;

use tracing::debug;

use crate::cache::{CacheStats, Entry, RecencyList};
use crate::error::{CacheError, Result};

/// Upper bound on slots reserved up front; larger caches grow on demand.
const PREALLOCATE_LIMIT: usize = 4096;

// == LRU Cache ==
/// Bounded key/value store with least-recently-used eviction.
///
/// `get` and `put` run in O(1): the index maps each key to a slot, and the
/// slot's links in the [`RecencyList`] are rewired without traversal. Once
/// the cache is full, inserting a new key reuses the least recently used
/// slot, so the cache never holds more than `capacity` entries.
///
/// The cache has no internal synchronization. Every access that updates
/// recency needs `&mut self`; hosts sharing one instance across tasks must
/// hold it behind a lock (see [`SharedCache`](crate::SharedCache)).
#[derive(Debug)]
pub struct LruCache<K, V> {
    /// Key to slot mapping
    index: HashMap<K, usize>,
    /// Entry payloads, addressed by slot
    entries: Vec<Entry<K, V>>,
    /// Access order over slots
    recency: RecencyList,
    /// Performance statistics
    stats: CacheStats,
    /// Maximum number of entries allowed
    capacity: usize,
}

impl<K, V> LruCache<K, V>
where
    K: Hash + Eq + Clone,
{
    // == Constructor ==
    /// Creates an empty cache holding at most `capacity` entries.
    ///
    /// # Errors
    /// Returns [`CacheError::InvalidCapacity`] if `capacity` is zero.
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(CacheError::InvalidCapacity(capacity));
        }

        let reserved = capacity.min(PREALLOCATE_LIMIT);
        debug!("Creating LRU cache with capacity {}", capacity);

        Ok(Self {
            index: HashMap::with_capacity(reserved),
            entries: Vec::with_capacity(reserved),
            recency: RecencyList::with_capacity(reserved),
            stats: CacheStats::new(),
            capacity,
        })
    }

    // == Get ==
    /// Retrieves a value by key and marks it most recently used.
    ///
    /// A miss leaves the cache untouched apart from the miss counter.
    pub fn get<Q>(&mut self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        match self.index.get(key) {
            Some(&slot) => {
                self.recency.move_to_front(slot);
                self.stats.record_hit();
                Some(&self.entries[slot].value)
            }
            None => {
                self.stats.record_miss();
                None
            }
        }
    }

    // == Put ==
    /// Stores a key-value pair and marks it most recently used.
    ///
    /// If the key already exists its value is replaced in place and the old
    /// value is returned; nothing is evicted. If the key is new and the cache
    /// is full, the least recently used entry is evicted to make room.
    pub fn put(&mut self, key: K, value: V) -> Option<V> {
        if let Some(&slot) = self.index.get(&key) {
            let previous = mem::replace(&mut self.entries[slot].value, value);
            self.recency.move_to_front(slot);
            self.stats.record_update();
            return Some(previous);
        }

        // Full means the list is non-empty, so there is always a victim
        let victim = self
            .recency
            .back()
            .filter(|_| self.index.len() >= self.capacity);

        match victim {
            Some(slot) => {
                let evicted =
                    mem::replace(&mut self.entries[slot], Entry::new(key.clone(), value));
                let (evicted_key, _) = evicted.into_pair();
                self.index.remove(&evicted_key);
                self.index.insert(key, slot);
                self.recency.move_to_front(slot);
                self.stats.record_eviction();
                debug!(
                    "Evicted least recently used entry (capacity {})",
                    self.capacity
                );
            }
            None => {
                let slot = self.recency.push_front();
                debug_assert_eq!(slot, self.entries.len());
                self.entries.push(Entry::new(key.clone(), value));
                self.index.insert(key, slot);
            }
        }

        self.stats.record_insertion();
        self.stats.set_total_entries(self.index.len());
        None
    }

    // == Peek ==
    /// Retrieves a value without touching recency or statistics.
    pub fn peek<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.get(key).map(|&slot| &self.entries[slot].value)
    }

    // == Contains ==
    /// Checks whether a key is resident without touching recency.
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.contains_key(key)
    }

    // == Peek LRU ==
    /// Returns the entry that the next new-key `put` would evict.
    pub fn peek_lru(&self) -> Option<(&K, &V)> {
        self.recency.back().map(|slot| self.pair(slot))
    }

    // == Peek MRU ==
    /// Returns the most recently touched entry.
    pub fn peek_mru(&self) -> Option<(&K, &V)> {
        self.recency.front().map(|slot| self.pair(slot))
    }

    // == Iter ==
    /// Iterates entries from most to least recently used.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (&K, &V)> + '_ {
        self.recency.iter().map(move |slot| self.pair(slot))
    }

    // == Keys ==
    /// Iterates keys from most to least recently used.
    pub fn keys(&self) -> impl ExactSizeIterator<Item = &K> + '_ {
        self.iter().map(|(key, _)| key)
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.index.len());
        stats
    }

    // == Length ==
    /// Returns the current number of entries in the cache.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    // == Is Empty ==
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    // == Capacity ==
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    fn pair(&self, slot: usize) -> (&K, &V) {
        let entry = &self.entries[slot];
        (&entry.key, &entry.value)
    }
}
