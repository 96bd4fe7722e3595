//! Utility functions and traits for `HashTable`

use crate::HashTable;
use std::hash::Hash;

/// Extension trait for tables that provides owned snapshots of their contents
pub trait HashTableExtensions<K, V> {
    /// Returns the keys of the table as a Vec
    fn keys(&self) -> Vec<K>;

    /// Returns the values of the table as a Vec
    fn values(&self) -> Vec<V>;

    /// Returns the key-value pairs ordered by key
    fn sorted_entries(&self) -> Vec<(K, V)>
    where
        K: Ord;
}

impl<K, V> HashTableExtensions<K, V> for HashTable<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    fn keys(&self) -> Vec<K> {
        self.iter().map(|(k, _)| k.clone()).collect()
    }

    fn values(&self) -> Vec<V> {
        self.iter().map(|(_, v)| v.clone()).collect()
    }

    fn sorted_entries(&self) -> Vec<(K, V)>
    where
        K: Ord,
    {
        let mut entries: Vec<(K, V)> = self.iter().map(|(k, v)| (k.clone(), v.clone())).collect();
        entries.sort_by(|a, b| a.0.cmp(&b.0));
        entries
    }
}

/// Creates a `HashTable` sized for the pairs yielded by `iter`.
///
/// Later pairs overwrite earlier ones with the same key.
pub fn from_pairs<K, V, I>(iter: I) -> HashTable<K, V>
where
    K: Eq + Hash,
    I: IntoIterator<Item = (K, V)>,
{
    let iter = iter.into_iter();
    // Room for the lower bound without crossing the growth threshold
    let capacity = iter.size_hint().0.saturating_mul(2).max(1);
    let mut table = HashTable::with_capacity(capacity);
    table.extend(iter);
    table
}
