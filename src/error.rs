//! Error types for fallible growth of a `HashTable`

use std::collections::TryReserveError;
use std::fmt;

use thiserror::Error;

/// The bucket array could not be reallocated to the requested size.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("failed to grow bucket array to {requested} buckets")]
pub struct GrowError {
    /// Number of buckets the grow tried to allocate
    pub requested: usize,
    /// Allocator failure reported by `Vec::try_reserve_exact`
    #[source]
    pub source: TryReserveError,
}

/// Returned by `HashTable::try_put` when the insert needed a grow that could not be allocated.
///
/// The table is left untouched; the rejected key and value are handed back.
#[derive(Error)]
#[error("put rejected: {source}")]
pub struct PutError<K, V> {
    /// The key that was not inserted
    pub key: K,
    /// The value that was not inserted
    pub value: V,
    /// Why the grow failed
    #[source]
    pub source: GrowError,
}

impl<K, V> PutError<K, V> {
    /// Recovers the rejected key and value.
    pub fn into_inner(self) -> (K, V) {
        (self.key, self.value)
    }
}

// Keys and values need not be `Debug`, so only the cause is shown.
impl<K, V> fmt::Debug for PutError<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PutError").field("source", &self.source).finish_non_exhaustive()
    }
}
