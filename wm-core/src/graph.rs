//! A weighted directed graph built from [`ChainedHashMap`]s, and the traversals run over it.
//!
//! The graph is stored as `vertex -> (neighbour -> weight)`. Undirected edges are two directed
//! entries. The graph keeps no state besides that nested mapping; every operation is a short
//! composition of mapping calls.

/// Bounded-distance exploration
mod radius;
/// Single-source shortest paths
mod shortest_path;

use std::fmt::Debug;
use std::hash::Hash;

pub use radius::radius_search;
pub use shortest_path::{
    dijkstra,
    ShortestPaths,
};

use crate::collections::{
    ChainedHashMap,
    ChainedHashSet,
    Dictionary,
};
use crate::errors::{
    CoreError,
    CoreResult,
};

/// A directed graph over vertex ids `V` with edge values `E`.
///
/// Lookups reorder the underlying buckets (see [`MoveToFrontMap`](crate::collections::MoveToFrontMap)),
/// so even read-only queries such as [`adjacent`](Self::adjacent) take `&mut self`.
pub struct Graph<V, E> {
    /// Vertex to its outgoing edges.
    adjacency: ChainedHashMap<V, ChainedHashMap<V, E>>,
}

impl<V, E> Graph<V, E>
where
    V: Hash + Eq + Clone + Debug + 'static,
    E: 'static,
{
    /// Create an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self { adjacency: ChainedHashMap::new() }
    }

    /// Add `vertex` with no outgoing edges. Returns `false` if it was already present.
    pub fn add_vertex(&mut self, vertex: V) -> bool {
        if self.adjacency.contains_key(&vertex) {
            return false;
        }
        self.adjacency.put(vertex, ChainedHashMap::new());
        true
    }

    /// Whether `vertex` has been added.
    pub fn contains_vertex(&mut self, vertex: &V) -> bool {
        self.adjacency.contains_key(vertex)
    }

    /// Number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Set the edge `src -> dest` to `edge`.
    ///
    /// Returns `Ok(false)` if the edge already existed; its value is overwritten either way. Both
    /// endpoints must already be vertices.
    ///
    /// # Errors
    ///
    /// [`CoreError::UnknownVertex`] if either endpoint has not been added.
    pub fn add_edge(&mut self, src: V, dest: V, edge: E) -> CoreResult<bool> {
        self.require(&src)?;
        self.require(&dest)?;
        let neighbors = self.adjacency.get_mut(&src).ok_or_else(|| unknown(&src))?;
        Ok(neighbors.put(dest, edge).is_none())
    }

    /// Set both `a -> b` and `b -> a` to `edge`.
    ///
    /// Returns `Ok(false)` only if both directions already existed. Nothing is written unless both
    /// endpoints are vertices.
    ///
    /// # Errors
    ///
    /// [`CoreError::UnknownVertex`] if either endpoint has not been added.
    pub fn add_undirected_edge(&mut self, a: V, b: V, edge: E) -> CoreResult<bool>
    where
        E: Clone,
    {
        self.require(&a)?;
        self.require(&b)?;
        let forward = self.add_edge(a.clone(), b.clone(), edge.clone())?;
        let backward = self.add_edge(b, a, edge)?;
        Ok(forward || backward)
    }

    /// Remove the single directed edge `src -> dest`. Returns `false` if there was none.
    pub fn remove_edge(&mut self, src: &V, dest: &V) -> bool {
        self.adjacency
            .get_mut(src)
            .is_some_and(|neighbors| neighbors.remove(dest).is_some())
    }

    /// The value of edge `i -> j`, if it exists.
    pub fn adjacent(&mut self, i: &V, j: &V) -> Option<&E> {
        self.adjacency.get_mut(i)?.get(j)
    }

    /// All vertex ids.
    #[must_use]
    pub fn vertices(&self) -> ChainedHashSet<V> {
        self.adjacency.key_set()
    }

    /// Ids directly reachable from `vertex` by one edge.
    ///
    /// # Errors
    ///
    /// [`CoreError::UnknownVertex`] if `vertex` has not been added.
    pub fn neighbors(&mut self, vertex: &V) -> CoreResult<ChainedHashSet<V>> {
        self.adjacency
            .get(vertex)
            .map(ChainedHashMap::key_set)
            .ok_or_else(|| unknown(vertex))
    }

    /// Fail unless `vertex` has been added.
    fn require(&mut self, vertex: &V) -> CoreResult<()> {
        if self.adjacency.contains_key(vertex) {
            Ok(())
        } else {
            Err(unknown(vertex))
        }
    }
}

impl<V, E> Default for Graph<V, E>
where
    V: Hash + Eq + Clone + Debug + 'static,
    E: 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

/// Error for a vertex that is not in the graph.
fn unknown<V: Debug>(vertex: &V) -> CoreError {
    CoreError::UnknownVertex(format!("{vertex:?}"))
}

#[cfg(test)]
mod tests;
