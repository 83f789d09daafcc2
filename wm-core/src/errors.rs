//! Error types shared by the collections and the graph.

use thiserror::Error;

/// Result alias used by every fallible operation in this crate.
pub type CoreResult<T> = Result<T, CoreError>;

/// Precondition violations reported by the collections and the graph.
///
/// Lookups of absent keys are never errors; they return `None`.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// An element with the same payload is already enqueued.
    #[error("an element with this payload is already enqueued")]
    DuplicateElement,

    /// A key update named a payload that is not enqueued.
    #[error("no element with this payload is enqueued")]
    MissingElement,

    /// `dequeue` or `peek` on an empty priority queue.
    #[error("priority queue is empty")]
    EmptyQueue,

    /// An edge referenced a vertex that was never added to the graph.
    #[error("vertex {0} is not in the graph")]
    UnknownVertex(String),
}
