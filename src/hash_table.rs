use std::{
    borrow::Borrow,
    collections::hash_map::DefaultHasher,
    fmt,
    hash::{Hash, Hasher},
    iter::{self, FusedIterator},
    mem, slice,
};

use log::{debug, warn};

use crate::error::{GrowError, PutError};

/// Number of buckets a table created with [`HashTable::new`] starts with
pub const DEFAULT_CAPACITY: usize = 2500;

/// Load factor at which inserting a new key doubles the bucket array
pub const GROWTH_THRESHOLD: f64 = 0.7;

/// Numerator of [`GROWTH_THRESHOLD`] expressed as an integer ratio
const THRESHOLD_NUMERATOR: usize = 7;
/// Denominator of [`GROWTH_THRESHOLD`] expressed as an integer ratio
const THRESHOLD_DENOMINATOR: usize = 10;

/// Owning link to the next entry of a chain, `None` at the end
type Link<K, V> = Option<Box<Entry<K, V>>>;

/// A key-value pair linked into a bucket chain
struct Entry<K, V> {
    /// The key; never changes once linked
    key: K,
    /// The value associated with the key
    value: V,
    /// Rest of the chain
    next: Link<K, V>,
}

/// A hash table resolving collisions by separate chaining.
///
/// Each bucket owns a singly linked chain of entries. New keys are linked at the head
/// of their chain; when the load factor reaches [`GROWTH_THRESHOLD`] the bucket array is
/// doubled and every entry is relinked into it without being reallocated.
///
/// Note: This implementation is not thread-safe and gives no iteration order guarantees.
pub struct HashTable<K, V> {
    /// Chain heads; the length of this vector is the table's capacity
    buckets: Vec<Link<K, V>>,
    /// Number of live entries across all chains
    len: usize,
}

/// Chain-length statistics of a table at one point in time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableStats {
    /// Number of buckets
    pub capacity: usize,
    /// Number of entries
    pub len: usize,
    /// Buckets holding at least one entry
    pub occupied_buckets: usize,
    /// Length of the longest chain
    pub longest_chain: usize,
}

impl TableStats {
    /// Ratio of entries to buckets
    #[must_use]
    #[allow(clippy::arithmetic_side_effects, clippy::cast_precision_loss)]
    pub fn load_factor(&self) -> f64 {
        self.len as f64 / self.capacity.max(1) as f64
    }

    /// Average chain length over the occupied buckets, `0.0` for an empty table
    #[must_use]
    #[allow(clippy::arithmetic_side_effects, clippy::cast_precision_loss)]
    pub fn mean_chain_length(&self) -> f64 {
        if self.occupied_buckets == 0 {
            return 0.0;
        }
        self.len as f64 / self.occupied_buckets as f64
    }
}

/// Allocates `capacity` empty buckets; allocation failure aborts like it does for `Vec`
fn empty_buckets<K, V>(capacity: usize) -> Vec<Link<K, V>> {
    iter::repeat_with(|| None).take(capacity).collect()
}

/// Allocates `capacity` empty buckets, reporting allocation failure instead of aborting
fn try_empty_buckets<K, V>(capacity: usize) -> Result<Vec<Link<K, V>>, GrowError> {
    let mut buckets = Vec::new();
    buckets.try_reserve_exact(capacity).map_err(|source| GrowError { requested: capacity, source })?;
    buckets.resize_with(capacity, || None);
    Ok(buckets)
}

/// Hashes a key with the standard library's default hasher
fn hash<Q: ?Sized + Hash>(key: &Q) -> u64 {
    let mut hasher = DefaultHasher::new();
    key.hash(&mut hasher);
    hasher.finish()
}

/// Maps a hash onto `0..capacity`.
///
/// The hash is unsigned, so every value reduces to a valid index.
fn reduce(hash: u64, capacity: usize) -> usize {
    let capacity = u64::try_from(capacity).unwrap_or(u64::MAX);
    hash.checked_rem(capacity).and_then(|index| usize::try_from(index).ok()).unwrap_or(0)
}

/// Whether `len` entries over `capacity` buckets is at or above [`GROWTH_THRESHOLD`]
fn at_threshold(len: usize, capacity: usize) -> bool {
    len.saturating_mul(THRESHOLD_DENOMINATOR) >= capacity.saturating_mul(THRESHOLD_NUMERATOR)
}

/// Drops a chain one entry at a time so long chains cannot exhaust the stack
fn drop_chain<K, V>(mut link: Link<K, V>) {
    while let Some(mut entry) = link {
        link = entry.next.take();
    }
}

impl<K, V> HashTable<K, V> {
    /// Returns the number of entries in the table
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the table holds no entries
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of buckets
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    /// Returns the current load factor of the table
    #[must_use]
    #[allow(clippy::arithmetic_side_effects, clippy::cast_precision_loss)]
    pub fn load_factor(&self) -> f64 {
        self.len as f64 / self.buckets.len() as f64
    }

    /// Removes every entry, keeping the current capacity
    pub fn clear(&mut self) {
        for head in &mut self.buckets {
            drop_chain(head.take());
        }
        self.len = 0;
    }

    /// Returns an iterator over the key-value pairs in unspecified order
    #[must_use]
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter { buckets: self.buckets.iter(), chain: None, remaining: self.len }
    }

    /// Walks every chain and summarises how entries are spread over the buckets
    #[must_use]
    pub fn stats(&self) -> TableStats {
        let mut occupied_buckets: usize = 0;
        let mut longest_chain: usize = 0;
        for head in &self.buckets {
            let mut chain_len: usize = 0;
            let mut link = head.as_deref();
            while let Some(entry) = link {
                chain_len = chain_len.saturating_add(1);
                link = entry.next.as_deref();
            }
            if chain_len > 0 {
                occupied_buckets = occupied_buckets.saturating_add(1);
            }
            longest_chain = longest_chain.max(chain_len);
        }
        TableStats { capacity: self.buckets.len(), len: self.len, occupied_buckets, longest_chain }
    }
}

impl<K, V> HashTable<K, V>
where
    K: Hash + Eq,
{
    /// Creates an empty table with [`DEFAULT_CAPACITY`] buckets
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates an empty table with `capacity` buckets (at least one)
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self { buckets: empty_buckets(capacity.max(1)), len: 0 }
    }

    /// Index of the bucket whose chain holds `key` under the current capacity
    fn bucket_index<Q: ?Sized + Hash>(&self, key: &Q) -> usize {
        reduce(hash(key), self.buckets.len())
    }

    /// Finds the entry holding `key`
    fn find<Q>(&self, key: &Q) -> Option<&Entry<K, V>>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let mut link = self.buckets.get(self.bucket_index(key))?.as_deref();
        while let Some(entry) = link {
            if entry.key.borrow() == key {
                return Some(entry);
            }
            link = entry.next.as_deref();
        }
        None
    }

    /// Finds the entry holding `key` for mutation
    fn find_mut<Q>(&mut self, key: &Q) -> Option<&mut Entry<K, V>>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let index = self.bucket_index(key);
        let mut link = self.buckets.get_mut(index)?.as_deref_mut();
        while let Some(entry) = link {
            if entry.key.borrow() == key {
                return Some(entry);
            }
            link = entry.next.as_deref_mut();
        }
        None
    }

    /// Returns true if the table holds `key`
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.find(key).is_some()
    }

    /// Retrieves the value stored for `key`
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.find(key).map(|entry| &entry.value)
    }

    /// Get a mutable reference to the value stored for `key`
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.find_mut(key).map(|entry| &mut entry.value)
    }

    /// Maps `key` to `value`.
    ///
    /// An existing value is overwritten in place. A new key is linked at the head of its
    /// chain, and if that brings the load factor to [`GROWTH_THRESHOLD`] the bucket array
    /// doubles before this call returns.
    pub fn put(&mut self, key: K, value: V) {
        if let Some(entry) = self.find_mut(&key) {
            entry.value = value;
            return;
        }
        let grown = self.grows_on_insert().then(|| empty_buckets(self.grown_capacity()));
        self.insert_new(key, value, grown);
    }

    /// Like [`put`](Self::put), but reports a failed grow instead of aborting.
    ///
    /// The doubled bucket array is allocated before the table is touched.
    ///
    /// # Errors
    ///
    /// Returns [`PutError`] carrying `key` and `value` back when inserting a new key needs a
    /// grow and the new bucket array cannot be allocated. The table is unchanged in that case.
    pub fn try_put(&mut self, key: K, value: V) -> Result<(), PutError<K, V>> {
        if let Some(entry) = self.find_mut(&key) {
            entry.value = value;
            return Ok(());
        }
        let grown = if self.grows_on_insert() {
            match try_empty_buckets(self.grown_capacity()) {
                Ok(buckets) => Some(buckets),
                Err(source) => {
                    warn!("{source}; keeping {} buckets", self.buckets.len());
                    return Err(PutError { key, value, source });
                }
            }
        } else {
            None
        };
        self.insert_new(key, value, grown);
        Ok(())
    }

    /// Removes `key` and returns its value
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let index = self.bucket_index(key);
        let mut link = self.buckets.get_mut(index)?;
        while link.as_ref().is_some_and(|entry| entry.key.borrow() != key) {
            link = &mut link.as_mut()?.next;
        }
        let removed = link.take()?;
        let Entry { value, next, .. } = *removed;
        *link = next;
        self.len = self.len.saturating_sub(1);
        Some(value)
    }

    /// Whether linking one more entry reaches the growth threshold
    fn grows_on_insert(&self) -> bool {
        at_threshold(self.len.saturating_add(1), self.buckets.len())
    }

    /// Capacity after the next grow
    fn grown_capacity(&self) -> usize {
        self.buckets.len().saturating_mul(2)
    }

    /// Links a key known to be absent, then moves everything into `grown` if given
    fn insert_new(&mut self, key: K, value: V, grown: Option<Vec<Link<K, V>>>) {
        let index = self.bucket_index(&key);
        if let Some(head) = self.buckets.get_mut(index) {
            let next = head.take();
            *head = Some(Box::new(Entry { key, value, next }));
            self.len = self.len.saturating_add(1);
        }
        if let Some(buckets) = grown {
            self.migrate(buckets);
        }
    }

    /// Relinks every entry into `buckets`, which then replaces the bucket array
    fn migrate(&mut self, mut buckets: Vec<Link<K, V>>) {
        let capacity = buckets.len();
        debug!(
            "growing bucket array from {} to {capacity} buckets ({} entries)",
            self.buckets.len(),
            self.len
        );
        for mut chain in mem::take(&mut self.buckets) {
            while let Some(mut entry) = chain {
                chain = entry.next.take();
                if let Some(head) = buckets.get_mut(reduce(hash(&entry.key), capacity)) {
                    entry.next = head.take();
                    *head = Some(entry);
                }
            }
        }
        self.buckets = buckets;
    }
}

impl<K, V> Drop for HashTable<K, V> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<K, V> Default for HashTable<K, V>
where
    K: Hash + Eq,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> Clone for HashTable<K, V>
where
    K: Clone,
    V: Clone,
{
    fn clone(&self) -> Self {
        let mut buckets = empty_buckets(self.buckets.len());
        // Same capacity, so every entry keeps its bucket; only chain order flips.
        for (source, target) in self.buckets.iter().zip(buckets.iter_mut()) {
            let mut link = source.as_deref();
            while let Some(entry) = link {
                let next = target.take();
                *target = Some(Box::new(Entry {
                    key: entry.key.clone(),
                    value: entry.value.clone(),
                    next,
                }));
                link = entry.next.as_deref();
            }
        }
        Self { buckets, len: self.len }
    }
}

impl<K, V> fmt::Debug for HashTable<K, V>
where
    K: fmt::Debug,
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K, V> Extend<(K, V)> for HashTable<K, V>
where
    K: Hash + Eq,
{
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (k, v) in iter {
            self.put(k, v);
        }
    }
}

impl<K, V> FromIterator<(K, V)> for HashTable<K, V>
where
    K: Hash + Eq,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut table = Self::new();
        table.extend(iter);
        table
    }
}

impl<'a, K, V> IntoIterator for &'a HashTable<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the key-value pairs of a [`HashTable`]
pub struct Iter<'a, K, V> {
    /// Buckets not yet visited
    buckets: slice::Iter<'a, Link<K, V>>,
    /// Remainder of the chain being walked
    chain: Option<&'a Entry<K, V>>,
    /// Entries not yet yielded
    remaining: usize,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(entry) = self.chain {
                self.chain = entry.next.as_deref();
                self.remaining = self.remaining.saturating_sub(1);
                return Some((&entry.key, &entry.value));
            }
            self.chain = self.buckets.next()?.as_deref();
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}

impl<K, V> FusedIterator for Iter<'_, K, V> {}

impl<K, V> Clone for Iter<'_, K, V> {
    fn clone(&self) -> Self {
        Self { buckets: self.buckets.clone(), chain: self.chain, remaining: self.remaining }
    }
}

impl<K, V> fmt::Debug for Iter<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Iter").field("remaining", &self.remaining).finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{collections::HashSet, rc::Rc};

    /// Key whose hash is the same for every value, forcing a single chain
    #[derive(Debug, Clone, PartialEq, Eq)]
    struct Collide(u32);

    impl Hash for Collide {
        fn hash<H: Hasher>(&self, state: &mut H) {
            0_u8.hash(state);
        }
    }

    #[test]
    fn test_put_and_get() {
        let mut table = HashTable::new();
        table.put("key1".to_string(), 1);
        table.put("key2".to_string(), 2);
        table.put("key3".to_string(), 3);

        assert_eq!(table.get("key1"), Some(&1));
        assert_eq!(table.get("key2"), Some(&2));
        assert_eq!(table.get("key3"), Some(&3));
        assert_eq!(table.get("key4"), None);
        assert!(table.contains_key("key2"));
        assert!(!table.contains_key("key4"));
    }

    #[test]
    fn test_grow_from_four_to_eight() {
        let mut table = HashTable::with_capacity(4);
        table.put("a", 1);
        table.put("b", 2);
        assert_eq!(table.capacity(), 4);

        // 3 / 4 = 0.75 reaches the threshold
        table.put("c", 3);
        assert_eq!(table.capacity(), 8);

        assert_eq!(table.get("a"), Some(&1));
        assert_eq!(table.get("b"), Some(&2));
        assert_eq!(table.get("c"), Some(&3));
        assert_eq!(table.len(), 3);
    }

    #[test]
    fn test_overwrite_keeps_len() {
        let mut table = HashTable::new();
        table.put("x", 1);
        table.put("x", 2);
        assert_eq!(table.get("x"), Some(&2));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_overwrite_never_grows() {
        let mut table = HashTable::with_capacity(4);
        table.put(1, "a");
        table.put(2, "b");
        for _ in 0..10 {
            table.put(2, "c");
        }
        assert_eq!(table.capacity(), 4);
        assert_eq!(table.get(&2), Some(&"c"));
    }

    #[test]
    fn test_remove_on_empty_table() {
        let mut table: HashTable<String, i32> = HashTable::new();
        assert_eq!(table.remove("x"), None);
        assert_eq!(table.len(), 0);
        assert!(table.is_empty());
    }

    #[test]
    fn test_remove() {
        let mut table = HashTable::new();
        table.put("key1".to_string(), 1);
        table.put("key2".to_string(), 2);

        assert_eq!(table.remove("key1"), Some(1));
        assert_eq!(table.len(), 1);
        assert!(!table.contains_key("key1"));
        assert_eq!(table.get("key2"), Some(&2));
        assert_eq!(table.remove("key1"), None);
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_remove_head_middle_and_tail_of_chain() {
        let mut table = HashTable::with_capacity(64);
        for i in 0..5 {
            table.put(Collide(i), i);
        }
        assert_eq!(table.stats().longest_chain, 5);

        // Chain order is 4 3 2 1 0: head, middle, tail
        assert_eq!(table.remove(&Collide(4)), Some(4));
        assert_eq!(table.remove(&Collide(2)), Some(2));
        assert_eq!(table.remove(&Collide(0)), Some(0));
        assert_eq!(table.remove(&Collide(7)), None);

        assert_eq!(table.len(), 2);
        assert_eq!(table.get(&Collide(3)), Some(&3));
        assert_eq!(table.get(&Collide(1)), Some(&1));
        assert_eq!(table.stats().longest_chain, 2);
    }

    #[test]
    fn test_remove_never_shrinks() {
        let mut table = HashTable::with_capacity(2);
        for i in 0..100 {
            table.put(i, i);
        }
        let capacity = table.capacity();
        for i in 0..100 {
            assert_eq!(table.remove(&i), Some(i));
        }
        assert!(table.is_empty());
        assert_eq!(table.capacity(), capacity);
    }

    #[test]
    fn test_absent_is_distinct_from_stored_none() {
        let mut table: HashTable<&str, Option<i32>> = HashTable::new();
        table.put("nothing", None);

        assert_eq!(table.get("nothing"), Some(&None));
        assert_eq!(table.get("missing"), None);
        assert!(table.contains_key("nothing"));
        assert_eq!(table.remove("nothing"), Some(None));
        assert_eq!(table.remove("nothing"), None);
    }

    #[test]
    fn test_growth_matches_doubling_formula() {
        for initial in [1_usize, 3, 4, 10, 16] {
            let mut table = HashTable::with_capacity(initial);
            let mut expected = initial;
            for n in 1..=500_usize {
                table.put(n, n);
                while at_threshold(n, expected) {
                    expected = expected.saturating_mul(2);
                }
                assert_eq!(table.capacity(), expected, "initial {initial}, after {n} keys");
            }
        }
    }

    #[test]
    fn test_single_grow_restores_bound() {
        // Capacity 1 is the tightest case: one insert reaches 1 / 1 and must land below 0.7
        for initial in 1..=64_usize {
            let mut table = HashTable::with_capacity(initial);
            for n in 0..200_usize {
                let before = table.capacity();
                table.put(n, ());
                assert!(table.load_factor() < GROWTH_THRESHOLD);
                assert!(table.capacity() == before || table.capacity() == before * 2);
            }
        }
    }

    #[test]
    fn test_zero_capacity_is_clamped() {
        let mut table = HashTable::with_capacity(0);
        assert_eq!(table.capacity(), 1);
        table.put("a", 1);
        assert_eq!(table.capacity(), 2);
        assert_eq!(table.get("a"), Some(&1));
    }

    #[test]
    fn test_default_capacity() {
        let table: HashTable<u32, u32> = HashTable::default();
        assert_eq!(table.capacity(), DEFAULT_CAPACITY);
        assert!(table.is_empty());
    }

    #[test]
    fn test_entries_land_in_their_bucket_after_grow() {
        let mut table = HashTable::with_capacity(3);
        for i in 0..1000_u32 {
            table.put(i, i);
        }
        let capacity = table.capacity();
        for (index, head) in table.buckets.iter().enumerate() {
            let mut link = head.as_deref();
            while let Some(entry) = link {
                assert_eq!(reduce(hash(&entry.key), capacity), index);
                link = entry.next.as_deref();
            }
        }
        assert_eq!(table.stats().len, 1000);
    }

    #[test]
    fn test_grow_moves_values_without_cloning() {
        let value = Rc::new(());
        let mut table = HashTable::with_capacity(2);
        for i in 0..50 {
            table.put(i, Rc::clone(&value));
        }
        assert_eq!(Rc::strong_count(&value), 51);

        drop(table.remove(&0));
        assert_eq!(Rc::strong_count(&value), 50);

        table.clear();
        assert_eq!(Rc::strong_count(&value), 1);
        assert!(table.is_empty());
    }

    #[test]
    fn test_drop_releases_long_chain() {
        let value = Rc::new(());
        let mut table = HashTable::with_capacity(1 << 14);
        for i in 0..2000 {
            table.put(Collide(i), Rc::clone(&value));
        }
        assert_eq!(table.stats().longest_chain, 2000);
        drop(table);
        assert_eq!(Rc::strong_count(&value), 1);
    }

    #[test]
    fn test_get_mut() {
        let mut table = HashTable::new();
        table.put("key1".to_string(), 1);

        if let Some(value) = table.get_mut("key1") {
            *value += 10;
        }

        assert_eq!(table.get("key1"), Some(&11));
        assert_eq!(table.get_mut("key2"), None);
    }

    #[test]
    fn test_try_put() {
        let mut table = HashTable::with_capacity(4);
        assert!(table.try_put("a", 1).is_ok());
        assert!(table.try_put("b", 2).is_ok());
        assert!(table.try_put("c", 3).is_ok());
        assert!(table.try_put("c", 30).is_ok());

        assert_eq!(table.capacity(), 8);
        assert_eq!(table.len(), 3);
        assert_eq!(table.get("c"), Some(&30));
    }

    #[test]
    fn test_try_empty_buckets_reports_failure() {
        let err = try_empty_buckets::<u32, u32>(usize::MAX).err();
        assert_eq!(err.map(|e| e.requested), Some(usize::MAX));

        let buckets = try_empty_buckets::<u32, u32>(16);
        assert_eq!(buckets.map(|b| b.len()).ok(), Some(16));
    }

    #[test]
    fn test_reduce_covers_extreme_hashes() {
        for capacity in [1_usize, 7, 2500, 4096] {
            for h in [0, 1, u64::MAX, u64::MAX / 2, 1 << 63] {
                assert!(reduce(h, capacity) < capacity);
            }
        }
    }

    #[test]
    fn test_iter() {
        let mut table = HashTable::with_capacity(2);
        for i in 0..100 {
            table.put(i, i * 2);
        }

        let iter = table.iter();
        assert_eq!(iter.len(), 100);

        let keys: HashSet<i32> = table.iter().map(|(k, _)| *k).collect();
        assert_eq!(keys, (0..100).collect());
        assert!(table.iter().all(|(k, v)| *v == k * 2));
        assert_eq!((&table).into_iter().count(), 100);
    }

    #[test]
    fn test_clone_is_independent() {
        let mut table = HashTable::with_capacity(4);
        table.put("a".to_string(), 1);
        table.put("b".to_string(), 2);

        let mut copy = table.clone();
        copy.put("a".to_string(), 10);
        copy.remove("b");

        assert_eq!(table.get("a"), Some(&1));
        assert_eq!(table.get("b"), Some(&2));
        assert_eq!(copy.get("a"), Some(&10));
        assert_eq!(copy.len(), 1);
        assert_eq!(copy.capacity(), table.capacity());
    }

    #[test]
    fn test_debug_as_map() {
        let mut table = HashTable::new();
        table.put("only", 1);
        assert_eq!(format!("{table:?}"), r#"{"only": 1}"#);
    }

    #[test]
    fn test_from_iter_and_extend() {
        let mut table: HashTable<i32, i32> = (0..10).map(|i| (i, i)).collect();
        table.extend([(3, 30), (10, 100)]);

        assert_eq!(table.len(), 11);
        assert_eq!(table.get(&3), Some(&30));
        assert_eq!(table.get(&10), Some(&100));
    }

    #[test]
    fn test_stats() {
        let mut table = HashTable::with_capacity(64);
        assert!(table.stats().mean_chain_length().abs() < f64::EPSILON);

        table.put(Collide(1), ());
        table.put(Collide(2), ());
        let stats = table.stats();
        assert_eq!(stats.capacity, 64);
        assert_eq!(stats.occupied_buckets, 1);
        assert_eq!(stats.longest_chain, 2);
        assert!((stats.mean_chain_length() - 2.0).abs() < f64::EPSILON);
        assert!((stats.load_factor() - 2.0 / 64.0).abs() < f64::EPSILON);
    }
}
