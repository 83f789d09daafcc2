use std::collections::VecDeque;
use std::fmt::Debug;
use std::hash::Hash;

use tracing::{
    debug,
    instrument,
};

use super::Graph;
use crate::collections::ChainedHashSet;
use crate::errors::CoreResult;

/// Explore everything reachable from `start` and keep the vertices `retain` accepts.
///
/// Each reachable vertex is expanded exactly once, whether or not it is retained: the predicate
/// filters the result, not the exploration. The work-list is last-in first-out. A `start` that is
/// not in the graph yields an empty set.
///
/// # Errors
///
/// [`CoreError::UnknownVertex`](crate::CoreError::UnknownVertex) only if the graph's adjacency is
/// inconsistent, which the graph's own operations never produce.
#[instrument(skip(graph, retain), fields(vertices = graph.vertex_count()))]
pub fn radius_search<V, E, F>(graph: &mut Graph<V, E>, start: &V, mut retain: F) -> CoreResult<ChainedHashSet<V>>
where
    V: Hash + Eq + Clone + Debug + 'static,
    E: 'static,
    F: FnMut(&V) -> bool,
{
    let mut found = ChainedHashSet::new();
    if !graph.contains_vertex(start) {
        return Ok(found);
    }

    let mut expanded = ChainedHashSet::new();
    let mut worklist = VecDeque::from([start.clone()]);
    while let Some(vertex) = worklist.pop_front() {
        if !expanded.add(vertex.clone()) {
            continue;
        }
        if retain(&vertex) {
            found.add(vertex.clone());
        }
        for neighbor in graph.neighbors(&vertex)?.iter() {
            if !expanded.contains(neighbor) {
                worklist.push_front(neighbor.clone());
            }
        }
    }

    debug!(expanded = expanded.len(), found = found.len(), "radius search finished");
    Ok(found)
}
