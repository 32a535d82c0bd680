//! Error types for the LRU store
//!
//! Provides unified error handling using thiserror.

use thiserror::Error;

// == Cache Error Enum ==
/// Unified error type for the LRU store.
///
/// A cache miss is not an error; lookups report it as `None`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CacheError {
    /// The cache was configured with a capacity that cannot hold any entry
    #[error("Invalid capacity: {0} (must be at least 1)")]
    InvalidCapacity(usize),

    /// A driver command line could not be parsed
    #[error("Invalid command: {0}")]
    InvalidCommand(String),
}

// == Result Type Alias ==
/// Convenience Result type for the LRU store.
pub type Result<T> = std::result::Result<T, CacheError>;
