use std::fmt;
use std::hash::Hash;

use tracing::trace;

use super::{
    ChainedHashMap,
    Dictionary,
};
use crate::errors::{
    CoreError,
    CoreResult,
};

/// Children per node.
const ARITY: usize = 4;

/// Initial array capacity of a new heap.
const DEFAULT_CAPACITY: usize = 5;

/// A payload paired with its priority. The payload is the element's identity inside a
/// [`FourHeap`]; the priority only decides its position.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PqElement<E, P> {
    /// Identity of the element.
    pub data: E,
    /// Ordering key; smaller is served first.
    pub priority: P,
}

impl<E, P> PqElement<E, P> {
    /// Pair `data` with `priority`.
    #[must_use]
    pub const fn new(data: E, priority: P) -> Self {
        Self { data, priority }
    }
}

/// An indexed 4-ary min-heap.
///
/// Elements live in a dense array in heap order: the children of slot `i` are
/// `4i + 1 ..= 4i + 4`, and no child has a smaller priority than its parent. Alongside the array, a
/// [`ChainedHashMap`] records the current slot of every payload, which lets
/// [`decrease_key`](Self::decrease_key) and [`increase_key`](Self::increase_key) find an element
/// without searching. Payloads are unique; enqueueing one that is already present is an error.
///
/// All movement inside the array goes through [`FourHeap::swap`], which updates the array and the
/// index map together.
pub struct FourHeap<E, P> {
    /// Heap-ordered elements.
    data: Vec<PqElement<E, P>>,
    /// Payload to current slot in `data`.
    index: ChainedHashMap<E, usize>,
}

impl<E, P> FourHeap<E, P>
where
    E: Hash + Eq + Clone + 'static,
    P: Ord + 'static,
{
    /// Create an empty heap.
    #[must_use]
    pub fn new() -> Self {
        Self {
            data: Vec::with_capacity(DEFAULT_CAPACITY),
            index: ChainedHashMap::new(),
        }
    }

    /// Number of enqueued elements.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.data.len()
    }

    /// `true` when nothing is enqueued.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Whether an element with payload `data` is enqueued.
    pub fn contains(&mut self, data: &E) -> bool {
        self.index.contains_key(data)
    }

    /// Iterate over the elements in array order, which is heap order but not sorted order.
    pub fn iter(&self) -> std::slice::Iter<'_, PqElement<E, P>> {
        self.data.iter()
    }

    /// Add `element`, failing if its payload is already enqueued.
    ///
    /// # Errors
    ///
    /// [`CoreError::DuplicateElement`] if an element with the same payload is enqueued.
    pub fn enqueue(&mut self, element: PqElement<E, P>) -> CoreResult<()> {
        if self.index.contains_key(&element.data) {
            return Err(CoreError::DuplicateElement);
        }

        if self.data.len() == self.data.capacity() {
            let grow_by = self.data.capacity().max(DEFAULT_CAPACITY);
            trace!(from = self.data.capacity(), by = grow_by, "doubling heap array");
            self.data.reserve_exact(grow_by);
        }

        let slot = self.data.len();
        self.index.put(element.data.clone(), slot);
        self.data.push(element);
        self.sift_up(slot);
        Ok(())
    }

    /// Remove and return the element with the smallest priority.
    ///
    /// # Errors
    ///
    /// [`CoreError::EmptyQueue`] if nothing is enqueued.
    pub fn dequeue(&mut self) -> CoreResult<PqElement<E, P>> {
        let last = self.data.len().checked_sub(1).ok_or(CoreError::EmptyQueue)?;
        self.swap(0, last);

        let min = self.data.pop().ok_or(CoreError::EmptyQueue)?;
        self.index.remove(&min.data);
        if !self.data.is_empty() {
            self.sift_down(0);
        }
        Ok(min)
    }

    /// The element with the smallest priority.
    ///
    /// # Errors
    ///
    /// [`CoreError::EmptyQueue`] if nothing is enqueued.
    pub fn peek(&self) -> CoreResult<&PqElement<E, P>> {
        self.data.first().ok_or(CoreError::EmptyQueue)
    }

    /// Lower the priority of an enqueued payload to `element.priority` and restore heap order
    /// towards the root.
    ///
    /// A priority that is actually higher than the stored one is handled as
    /// [`increase_key`](Self::increase_key) would.
    ///
    /// # Errors
    ///
    /// [`CoreError::MissingElement`] if the payload is not enqueued.
    pub fn decrease_key(&mut self, element: PqElement<E, P>) -> CoreResult<()> {
        self.rekey(element)
    }

    /// Raise the priority of an enqueued payload to `element.priority` and restore heap order
    /// towards the leaves.
    ///
    /// A priority that is actually lower than the stored one is handled as
    /// [`decrease_key`](Self::decrease_key) would.
    ///
    /// # Errors
    ///
    /// [`CoreError::MissingElement`] if the payload is not enqueued.
    pub fn increase_key(&mut self, element: PqElement<E, P>) -> CoreResult<()> {
        self.rekey(element)
    }

    /// Replace the stored element with the same payload and sift it whichever way its priority
    /// moved.
    fn rekey(&mut self, element: PqElement<E, P>) -> CoreResult<()> {
        let slot = *self.index.get(&element.data).ok_or(CoreError::MissingElement)?;
        let lowered = element.priority < self.data[slot].priority;
        self.data[slot] = element;
        if lowered {
            self.sift_up(slot);
        } else {
            self.sift_down(slot);
        }
        Ok(())
    }

    /// Exchange two slots, keeping the index map in step with the array.
    fn swap(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        self.data.swap(a, b);
        for slot in [a, b] {
            if let Some(recorded) = self.index.get_mut(&self.data[slot].data) {
                *recorded = slot;
            }
        }
    }

    /// Move the element at `slot` up while its parent has a strictly greater priority.
    fn sift_up(&mut self, mut slot: usize) {
        while slot > 0 {
            let parent = (slot - 1) / ARITY;
            if self.data[parent].priority <= self.data[slot].priority {
                break;
            }
            self.swap(parent, slot);
            slot = parent;
        }
    }

    /// Move the element at `slot` down while its smallest child has a strictly smaller priority.
    /// Ties between children go to the leftmost one.
    fn sift_down(&mut self, mut slot: usize) {
        while let Some(child) = self.smallest_child(slot) {
            if self.data[child].priority >= self.data[slot].priority {
                break;
            }
            self.swap(slot, child);
            slot = child;
        }
    }

    /// Slot of the smallest-priority child of `slot`, if it has children.
    fn smallest_child(&self, slot: usize) -> Option<usize> {
        let first = ARITY * slot + 1;
        let end = (first + ARITY).min(self.data.len());
        (first..end).min_by(|&a, &b| self.data[a].priority.cmp(&self.data[b].priority))
    }
}

impl<E, P> Default for FourHeap<E, P>
where
    E: Hash + Eq + Clone + 'static,
    P: Ord + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, E, P> IntoIterator for &'a FourHeap<E, P>
where
    E: Hash + Eq + Clone + 'static,
    P: Ord + 'static,
{
    type IntoIter = std::slice::Iter<'a, PqElement<E, P>>;
    type Item = &'a PqElement<E, P>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<E: fmt::Debug, P: fmt::Debug> fmt::Debug for FourHeap<E, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(&self.data).finish()
    }
}
