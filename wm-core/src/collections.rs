//! Associative containers and the indexed priority queue.
//!
//! The containers are built to compose: a [`ChainedHashMap`] is an array of buckets, and each
//! bucket is any [`Dictionary`] produced by a [`BucketFactory`]. The default bucket is a
//! [`MoveToFrontMap`], but a `ChainedHashMap` is itself a `Dictionary` and can serve as the bucket
//! of another one.
//!
//! Lookups on these containers take `&mut self`: a successful lookup in a [`MoveToFrontMap`]
//! reorders the list, and that reordering is observable through iteration order.

/// Prime-sized separately chained hash mapping
mod hash_map;
/// Set view over a hash mapping's key space
mod hash_set;
/// Indexed 4-ary min-heap
mod heap;
/// Self-organising linked mapping
mod move_to_front;

pub use hash_map::ChainedHashMap;
pub use hash_set::ChainedHashSet;
pub use heap::{
    FourHeap,
    PqElement,
};
pub use move_to_front::MoveToFrontMap;

/// Constructor for empty buckets of a [`ChainedHashMap`].
pub type BucketFactory<K, V> = fn() -> Box<dyn Dictionary<K, V>>;

/// The mapping contract shared by every bucket implementation.
///
/// Keys are unique within one dictionary. Implementations are free to reorder entries on access;
/// callers may rely only on what each implementation documents about iteration order.
pub trait Dictionary<K, V> {
    /// Look up `key`, possibly reordering the dictionary as a side effect.
    fn get(&mut self, key: &K) -> Option<&V>;

    /// Mutable lookup with the same reordering behaviour as [`Dictionary::get`].
    fn get_mut(&mut self, key: &K) -> Option<&mut V>;

    /// Insert or overwrite, returning the previous value if the key was present.
    fn put(&mut self, key: K, value: V) -> Option<V>;

    /// Remove `key`, returning its value. Removing an absent key is a no-op.
    fn remove(&mut self, key: &K) -> Option<V>;

    /// Membership test with the same reordering behaviour as [`Dictionary::get`].
    fn contains_key(&mut self, key: &K) -> bool;

    /// Number of entries.
    fn len(&self) -> usize;

    /// Iterate over the entries without reordering anything.
    fn iter(&self) -> Box<dyn Iterator<Item = (&K, &V)> + '_>;

    /// Consume the dictionary and hand back every entry.
    fn into_entries(self: Box<Self>) -> Vec<(K, V)>;

    /// `true` when the dictionary holds no entries.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate over the keys in the same order as [`Dictionary::iter`].
    fn keys<'a>(&'a self) -> Box<dyn Iterator<Item = &'a K> + 'a>
    where
        K: 'a,
        V: 'a,
    {
        Box::new(self.iter().map(|(k, _)| k))
    }

    /// Iterate over the values in the same order as [`Dictionary::iter`].
    fn values<'a>(&'a self) -> Box<dyn Iterator<Item = &'a V> + 'a>
    where
        K: 'a,
        V: 'a,
    {
        Box::new(self.iter().map(|(_, v)| v))
    }
}
