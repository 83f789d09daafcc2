use std::collections::VecDeque;
use std::fmt::Debug;
use std::hash::Hash;

use ordered_float::OrderedFloat;
use tracing::{
    debug,
    instrument,
};

use super::Graph;
use crate::collections::{
    ChainedHashMap,
    ChainedHashSet,
    Dictionary,
    FourHeap,
    PqElement,
};
use crate::errors::CoreResult;

/// Distances and predecessor links produced by [`dijkstra`].
///
/// A vertex missing from the distance table was never reached and is at infinite distance.
pub struct ShortestPaths<V> {
    /// The vertex the search started from.
    source: V,
    /// Best known distance from `source`.
    distances: ChainedHashMap<V, OrderedFloat<f64>>,
    /// Previous hop on the best known path from `source`.
    predecessors: ChainedHashMap<V, V>,
}

impl<V> ShortestPaths<V>
where
    V: Hash + Eq + Clone + 'static,
{
    /// The vertex the search started from.
    #[must_use]
    pub const fn source(&self) -> &V {
        &self.source
    }

    /// Length of the shortest path to `vertex`, or `None` if it was not reached.
    pub fn distance(&mut self, vertex: &V) -> Option<f64> {
        self.distances.get(vertex).map(|d| d.into_inner())
    }

    /// The vertices of the shortest path from the source to `target`, both ends included.
    ///
    /// Returns `None` when `target` was not reached.
    pub fn path_to(&mut self, target: &V) -> Option<VecDeque<V>> {
        if !self.distances.contains_key(target) {
            return None;
        }
        let mut path = VecDeque::new();
        let mut current = target.clone();
        while current != self.source {
            let previous = self.predecessors.get(&current)?.clone();
            path.push_front(current);
            current = previous;
        }
        path.push_front(current);
        Some(path)
    }
}

/// Single-source shortest paths over non-negative edge weights.
///
/// The frontier is a [`FourHeap`] keyed by vertex, so a shorter route to a vertex already in the
/// frontier lowers its key in place instead of enqueueing it again. A vertex is settled once it
/// has been dequeued and its edges relaxed; settled vertices are never relaxed again.
///
/// `admit` decides which vertices may be relaxed at all. Vertices it rejects are never reached,
/// so no path runs through them; the source is always admitted. When `target` is given the
/// search stops as soon as the target is dequeued, at which point its distance is final.
///
/// A `source` that is not in the graph reaches nothing: every path and distance is `None`.
///
/// # Errors
///
/// [`CoreError::UnknownVertex`](crate::CoreError::UnknownVertex) only if the graph's adjacency is
/// inconsistent, which the graph's own operations never produce.
#[instrument(skip(graph, admit), fields(vertices = graph.vertex_count()))]
pub fn dijkstra<V, F>(
    graph: &mut Graph<V, f64>,
    source: &V,
    target: Option<&V>,
    mut admit: F,
) -> CoreResult<ShortestPaths<V>>
where
    V: Hash + Eq + Clone + Debug + 'static,
    F: FnMut(&V) -> bool,
{
    let mut distances = ChainedHashMap::new();
    let mut predecessors = ChainedHashMap::new();
    let mut settled = ChainedHashSet::new();
    let mut frontier = FourHeap::new();

    if !graph.contains_vertex(source) {
        debug!("source is not in the graph");
        return Ok(ShortestPaths { source: source.clone(), distances, predecessors });
    }

    distances.put(source.clone(), OrderedFloat(0.0));
    frontier.enqueue(PqElement::new(source.clone(), OrderedFloat(0.0)))?;

    while !frontier.is_empty() {
        let PqElement { data: vertex, priority: distance } = frontier.dequeue()?;
        if target == Some(&vertex) {
            break;
        }

        for neighbor in graph.neighbors(&vertex)?.iter() {
            if settled.contains(neighbor) || !admit(neighbor) {
                continue;
            }
            let Some(&weight) = graph.adjacent(&vertex, neighbor) else {
                continue;
            };

            let candidate = OrderedFloat(distance.into_inner() + weight);
            if distances.get(neighbor).is_some_and(|&best| best <= candidate) {
                continue;
            }

            distances.put(neighbor.clone(), candidate);
            predecessors.put(neighbor.clone(), vertex.clone());
            let element = PqElement::new(neighbor.clone(), candidate);
            if frontier.contains(neighbor) {
                frontier.decrease_key(element)?;
            } else {
                frontier.enqueue(element)?;
            }
        }

        settled.add(vertex);
    }

    debug!(reached = distances.len(), settled = settled.len(), "shortest path search finished");
    Ok(ShortestPaths { source: source.clone(), distances, predecessors })
}
