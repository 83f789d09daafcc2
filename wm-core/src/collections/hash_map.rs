use std::fmt;
use std::hash::{
    DefaultHasher,
    Hash,
    Hasher,
};

use tracing::debug;

use super::{
    BucketFactory,
    ChainedHashSet,
    Dictionary,
    MoveToFrontMap,
};

/// Bucket-array lengths, in growth order.
const PRIMES: [usize; 18] = [
    2, 5, 11, 23, 47, 97, 197, 397, 797, 1597, 3203, 6421, 12_853, 25_717, 51_437, 102_877, 205_759, 411_527,
];

/// A separately chained hash mapping with prime-sized tables.
///
/// The bucket array starts at length 2 and only grows. Before an insertion of a new key that
/// would bring the entry count up to the table length, the table moves to the next prime and every
/// entry is redistributed; the load factor therefore stays strictly below 1. Removal never shrinks
/// the table and never frees a bucket, so an emptied bucket stays allocated for reuse.
///
/// Buckets are created lazily by the [`BucketFactory`] supplied at construction, which makes the
/// chain representation pluggable. A `ChainedHashMap` is itself a [`Dictionary`], so it can be the
/// bucket type of another map (see [`ChainedHashMap::nested`]).
///
/// Lookups delegate to the owning bucket and inherit its reordering behaviour; with the default
/// [`MoveToFrontMap`] buckets, `get` and `contains_key` mutate bucket order.
pub struct ChainedHashMap<K, V> {
    /// Bucket array; `None` until the first key hashes to that slot.
    buckets: Vec<Option<Box<dyn Dictionary<K, V>>>>,
    /// Number of live entries across all buckets.
    len: usize,
    /// Index into [`PRIMES`] of the current table length. Past the end of the table, lengths are
    /// computed instead.
    prime_index: usize,
    /// Constructor for empty buckets.
    factory: BucketFactory<K, V>,
}

impl<K, V> ChainedHashMap<K, V>
where
    K: Hash + Eq + 'static,
    V: 'static,
{
    /// Create an empty map with [`MoveToFrontMap`] buckets.
    #[must_use]
    pub fn new() -> Self {
        Self::with_factory(MoveToFrontMap::boxed)
    }

    /// Create an empty map whose buckets come from `factory`.
    #[must_use]
    pub fn with_factory(factory: BucketFactory<K, V>) -> Self {
        Self {
            buckets: empty_table(PRIMES[0]),
            len: 0,
            prime_index: 0,
            factory,
        }
    }

    /// Create an empty map whose buckets are themselves `ChainedHashMap`s with
    /// [`MoveToFrontMap`] buckets.
    #[must_use]
    pub fn nested() -> Self {
        Self::with_factory(Self::boxed)
    }

    /// Bucket constructor producing a default `ChainedHashMap`.
    #[must_use]
    pub fn boxed() -> Box<dyn Dictionary<K, V>> {
        Box::new(Self::new())
    }

    /// Current length of the bucket array.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.buckets.len()
    }

    /// Linear scan over every bucket for `value`.
    #[must_use]
    pub fn contains_value(&self, value: &V) -> bool
    where
        V: PartialEq,
    {
        self.iter().any(|(_, v)| v == value)
    }

    /// Materialise the key space as a set.
    #[must_use]
    pub fn key_set(&self) -> ChainedHashSet<K>
    where
        K: Clone,
    {
        self.iter().map(|(k, _)| k.clone()).collect()
    }

    /// Iterate over the entries bucket by bucket. Does not reorder anything.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> + '_ {
        self.buckets.iter().flatten().flat_map(|bucket| bucket.iter())
    }

    /// Bucket slot for `key` in a table of `len` buckets.
    // The remainder is below `len`, so narrowing back to usize is lossless.
    #[allow(clippy::cast_possible_truncation)]
    fn slot(key: &K, len: usize) -> usize {
        let mut hasher = DefaultHasher::new();
        key.hash(&mut hasher);
        (hasher.finish() % len as u64) as usize
    }

    /// Length of the table after the next growth step.
    fn next_length(&self) -> usize {
        PRIMES
            .get(self.prime_index + 1)
            .copied()
            .unwrap_or_else(|| next_prime(2 * self.buckets.len() + 1))
    }

    /// Move every entry into a table of the next prime length.
    ///
    /// The new table is populated off to the side and swapped in once complete.
    fn expand(&mut self) {
        let new_len = self.next_length();
        debug!(from = self.buckets.len(), to = new_len, entries = self.len, "expanding hash table");

        let mut table = empty_table(new_len);
        for bucket in std::mem::take(&mut self.buckets).into_iter().flatten() {
            for (key, value) in bucket.into_entries() {
                let slot = Self::slot(&key, new_len);
                table[slot].get_or_insert_with(self.factory).put(key, value);
            }
        }

        self.buckets = table;
        self.prime_index += 1;
    }
}

impl<K, V> Dictionary<K, V> for ChainedHashMap<K, V>
where
    K: Hash + Eq + 'static,
    V: 'static,
{
    fn get(&mut self, key: &K) -> Option<&V> {
        let slot = Self::slot(key, self.buckets.len());
        self.buckets[slot].as_mut()?.get(key)
    }

    fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        let slot = Self::slot(key, self.buckets.len());
        self.buckets[slot].as_mut()?.get_mut(key)
    }

    fn put(&mut self, key: K, value: V) -> Option<V> {
        if let Some(existing) = self.get_mut(&key) {
            return Some(std::mem::replace(existing, value));
        }

        if self.len + 1 >= self.buckets.len() {
            self.expand();
        }

        let slot = Self::slot(&key, self.buckets.len());
        self.buckets[slot].get_or_insert_with(self.factory).put(key, value);
        self.len += 1;
        None
    }

    fn remove(&mut self, key: &K) -> Option<V> {
        let slot = Self::slot(key, self.buckets.len());
        let removed = self.buckets[slot].as_mut()?.remove(key);
        if removed.is_some() {
            self.len -= 1;
        }
        removed
    }

    fn contains_key(&mut self, key: &K) -> bool {
        let slot = Self::slot(key, self.buckets.len());
        self.buckets[slot].as_mut().is_some_and(|bucket| bucket.contains_key(key))
    }

    fn len(&self) -> usize {
        self.len
    }

    fn iter(&self) -> Box<dyn Iterator<Item = (&K, &V)> + '_> {
        Box::new(ChainedHashMap::iter(self))
    }

    fn into_entries(self: Box<Self>) -> Vec<(K, V)> {
        let mut entries = Vec::with_capacity(self.len);
        for bucket in self.buckets.into_iter().flatten() {
            entries.extend(bucket.into_entries());
        }
        entries
    }
}

impl<K, V> Default for ChainedHashMap<K, V>
where
    K: Hash + Eq + 'static,
    V: 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> fmt::Debug for ChainedHashMap<K, V>
where
    K: Hash + Eq + fmt::Debug + 'static,
    V: fmt::Debug + 'static,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K, V> FromIterator<(K, V)> for ChainedHashMap<K, V>
where
    K: Hash + Eq + 'static,
    V: 'static,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}

impl<K, V> Extend<(K, V)> for ChainedHashMap<K, V>
where
    K: Hash + Eq + 'static,
    V: 'static,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (k, v) in iter {
            self.put(k, v);
        }
    }
}

/// A bucket array of `len` unallocated buckets.
fn empty_table<K, V>(len: usize) -> Vec<Option<Box<dyn Dictionary<K, V>>>> {
    std::iter::repeat_with(|| None).take(len).collect()
}

/// Smallest prime that is at least `n`.
///
/// There is always a prime in `m..=2m` for `m >= 2`, so the search range is bounded.
fn next_prime(n: usize) -> usize {
    let from = n.max(2);
    (from..=2 * from).find(|&c| is_prime(c)).unwrap_or(from)
}

/// Trial division primality test.
fn is_prime(n: usize) -> bool {
    if n < 2 {
        return false;
    }
    (2..n).take_while(|d| d * d <= n).all(|d| n % d != 0)
}
