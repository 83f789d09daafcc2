use std::fmt;
use std::mem;

use super::Dictionary;

/// A single entry in the linked list. Links are indices into [`MoveToFrontMap::nodes`].
struct Node<K, V> {
    /// Entry key.
    key: K,
    /// Entry value.
    value: V,
    /// Previous node in link order, `None` for the head.
    prev: Option<usize>,
    /// Next node in link order, `None` for the tail.
    next: Option<usize>,
}

/// A self-organising association list.
///
/// Entries form a doubly-linked list with an explicit head. Every successful
/// [`get`](Dictionary::get), [`get_mut`](Dictionary::get_mut),
/// [`contains_key`](Dictionary::contains_key) or [`put`](Dictionary::put) moves the touched entry
/// to the front, so the most recently accessed key is always the cheapest one to find again.
/// Iteration follows link order.
///
/// Every operation is a linear scan; the structure is meant to be a hash bucket, where the owning
/// table keeps the list short.
///
/// Nodes live in a dense vector and link to each other by index. Removal swaps the last node into
/// the vacated slot and patches its neighbours, so the vector never holds holes.
pub struct MoveToFrontMap<K, V> {
    /// Node storage; the list order is given by the links, not by position.
    nodes: Vec<Node<K, V>>,
    /// Index of the first node in link order, `None` iff the map is empty.
    head: Option<usize>,
}

impl<K: Eq, V> MoveToFrontMap<K, V> {
    /// Create an empty map.
    #[must_use]
    pub const fn new() -> Self {
        Self { nodes: Vec::new(), head: None }
    }

    /// Bucket constructor for [`ChainedHashMap`](super::ChainedHashMap).
    #[must_use]
    pub fn boxed() -> Box<dyn Dictionary<K, V>>
    where
        K: 'static,
        V: 'static,
    {
        Box::new(Self::new())
    }

    /// Linear scan for a value. Does not reorder the list.
    #[must_use]
    pub fn contains_value(&self, value: &V) -> bool
    where
        V: PartialEq,
    {
        self.iter().any(|(_, v)| v == value)
    }

    /// Iterate over the entries from the head.
    pub const fn iter(&self) -> Iter<'_, K, V> {
        Iter { map: self, cursor: self.head }
    }

    /// Position of `key` in `nodes`, without reordering.
    fn find(&self, key: &K) -> Option<usize> {
        let mut cursor = self.head;
        while let Some(idx) = cursor {
            let node = &self.nodes[idx];
            if node.key == *key {
                return Some(idx);
            }
            cursor = node.next;
        }
        None
    }

    /// Detach `idx` from its neighbours, leaving it unlinked.
    fn unlink(&mut self, idx: usize) {
        let (prev, next) = (self.nodes[idx].prev, self.nodes[idx].next);
        match prev {
            Some(p) => self.nodes[p].next = next,
            None => self.head = next,
        }
        if let Some(n) = next {
            self.nodes[n].prev = prev;
        }
        self.nodes[idx].prev = None;
        self.nodes[idx].next = None;
    }

    /// Link an unlinked node in as the new head.
    fn push_front(&mut self, idx: usize) {
        self.nodes[idx].prev = None;
        self.nodes[idx].next = self.head;
        if let Some(h) = self.head {
            self.nodes[h].prev = Some(idx);
        }
        self.head = Some(idx);
    }

    /// Find `key` and make it the head.
    fn access(&mut self, key: &K) -> Option<usize> {
        let idx = self.find(key)?;
        if self.head != Some(idx) {
            self.unlink(idx);
            self.push_front(idx);
        }
        Some(idx)
    }
}

impl<K: Eq, V> Dictionary<K, V> for MoveToFrontMap<K, V> {
    /// Reorders: a hit becomes the head.
    fn get(&mut self, key: &K) -> Option<&V> {
        let idx = self.access(key)?;
        Some(&self.nodes[idx].value)
    }

    fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        let idx = self.access(key)?;
        Some(&mut self.nodes[idx].value)
    }

    fn put(&mut self, key: K, value: V) -> Option<V> {
        if let Some(idx) = self.access(&key) {
            return Some(mem::replace(&mut self.nodes[idx].value, value));
        }

        self.nodes.push(Node { key, value, prev: None, next: None });
        self.push_front(self.nodes.len() - 1);
        None
    }

    fn remove(&mut self, key: &K) -> Option<V> {
        let idx = self.find(key)?;
        self.unlink(idx);
        let removed = self.nodes.swap_remove(idx);

        // The former last node now sits at `idx`; its neighbours still point at the old slot.
        if idx < self.nodes.len() {
            let (prev, next) = (self.nodes[idx].prev, self.nodes[idx].next);
            match prev {
                Some(p) => self.nodes[p].next = Some(idx),
                None => self.head = Some(idx),
            }
            if let Some(n) = next {
                self.nodes[n].prev = Some(idx);
            }
        }

        Some(removed.value)
    }

    /// Reorders: a hit becomes the head.
    fn contains_key(&mut self, key: &K) -> bool {
        self.access(key).is_some()
    }

    fn len(&self) -> usize {
        self.nodes.len()
    }

    fn iter(&self) -> Box<dyn Iterator<Item = (&K, &V)> + '_> {
        Box::new(MoveToFrontMap::iter(self))
    }

    fn into_entries(self: Box<Self>) -> Vec<(K, V)> {
        self.nodes.into_iter().map(|node| (node.key, node.value)).collect()
    }
}

impl<K: Eq, V> Default for MoveToFrontMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Eq + fmt::Debug, V: fmt::Debug> fmt::Debug for MoveToFrontMap<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K: Eq, V> FromIterator<(K, V)> for MoveToFrontMap<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (k, v) in iter {
            map.put(k, v);
        }
        map
    }
}

impl<'a, K: Eq, V> IntoIterator for &'a MoveToFrontMap<K, V> {
    type IntoIter = Iter<'a, K, V>;
    type Item = (&'a K, &'a V);

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Link-order iterator over a [`MoveToFrontMap`].
pub struct Iter<'a, K, V> {
    /// The map being walked.
    map: &'a MoveToFrontMap<K, V>,
    /// Next node to yield.
    cursor: Option<usize>,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let node = &self.map.nodes[self.cursor?];
        self.cursor = node.next;
        Some((&node.key, &node.value))
    }
}
