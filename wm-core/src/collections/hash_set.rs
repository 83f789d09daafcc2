use std::fmt;
use std::hash::Hash;

use super::{
    BucketFactory,
    ChainedHashMap,
    Dictionary,
};

/// A set of unique elements backed by a [`ChainedHashMap`] with unit values.
///
/// The set has no storage of its own and inherits the map's growth policy and its reordering
/// lookups, which is why [`contains`](Self::contains) takes `&mut self`.
pub struct ChainedHashSet<T> {
    /// Elements are stored as keys.
    map: ChainedHashMap<T, ()>,
}

impl<T> ChainedHashSet<T>
where
    T: Hash + Eq + 'static,
{
    /// Create an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self { map: ChainedHashMap::new() }
    }

    /// Create an empty set whose backing map uses buckets from `factory`.
    #[must_use]
    pub fn with_factory(factory: BucketFactory<T, ()>) -> Self {
        Self { map: ChainedHashMap::with_factory(factory) }
    }

    /// Insert `element`, returning `true` if it was not already present.
    pub fn add(&mut self, element: T) -> bool {
        self.map.put(element, ()).is_none()
    }

    /// Remove `element`, returning `true` if it was present.
    pub fn remove(&mut self, element: &T) -> bool {
        self.map.remove(element).is_some()
    }

    /// Membership test. Reorders the owning bucket on a hit.
    pub fn contains(&mut self, element: &T) -> bool {
        self.map.contains_key(element)
    }

    /// Number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// `true` when the set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Iterate over the elements without reordering anything.
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.map.iter().map(|(element, ())| element)
    }
}

impl<T> Default for ChainedHashSet<T>
where
    T: Hash + Eq + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for ChainedHashSet<T>
where
    T: Hash + Eq + fmt::Debug + 'static,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T> FromIterator<T> for ChainedHashSet<T>
where
    T: Hash + Eq + 'static,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl<T> Extend<T> for ChainedHashSet<T>
where
    T: Hash + Eq + 'static,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            self.add(element);
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::*;

    use super::*;
    use crate::collections::MoveToFrontMap;

    #[rstest]
    fn test_add_reports_novelty() {
        let mut set = ChainedHashSet::new();
        assert!(set.add("a"));
        assert!(!set.add("a"));
        assert!(set.add("b"));
        assert_eq!(set.len(), 2);
    }

    #[rstest]
    fn test_remove_and_contains() {
        let mut set: ChainedHashSet<u32> = (0..10).collect();
        assert!(set.contains(&3));
        assert!(set.remove(&3));
        assert!(!set.remove(&3));
        assert!(!set.contains(&3));
        assert_eq!(set.len(), 9);
    }

    #[rstest]
    fn test_iter_yields_each_element_once() {
        let set: ChainedHashSet<u32> = (0..100).chain(0..100).collect();
        let mut elements: Vec<u32> = set.iter().copied().collect();
        elements.sort_unstable();
        assert_eq!(elements, (0..100).collect::<Vec<_>>());
    }

    #[rstest]
    fn test_custom_factory() {
        let mut set = ChainedHashSet::with_factory(MoveToFrontMap::boxed);
        set.extend(["x", "y", "x"]);
        assert_eq!(set.len(), 2);
        assert!(set.contains(&"y"));
        assert!(!set.is_empty());
    }
}
