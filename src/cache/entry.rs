//! Cache Entry Module
//!
//! Defines the key/value payload held in each occupied arena slot.

// == Cache Entry ==
/// A resident key/value pair.
///
/// The entry's `prev`/`next` links live in the [`RecencyList`] under the same
/// slot number, so the payload arena and the link arena stay parallel.
///
/// [`RecencyList`]: super::RecencyList
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry<K, V> {
    /// Key under which the entry is indexed
    pub key: K,
    /// The stored value
    pub value: V,
}

impl<K, V> Entry<K, V> {
    // == Constructor ==
    /// Creates a new entry.
    pub fn new(key: K, value: V) -> Self {
        Self { key, value }
    }

    // == Into Pair ==
    /// Consumes the entry, returning its key and value.
    pub fn into_pair(self) -> (K, V) {
        (self.key, self.value)
    }
}
