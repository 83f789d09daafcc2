#![deny(
    // Strict on purpose: the goal is to force inline allows wherever a pedantic lint is waived, so
    // that each waiver is visible to the next reader.
    clippy::nursery,
    clippy::pedantic,
    missing_docs,
)]

//! # wm-core – collections and graph primitives for Waymark
//!
//! Everything the campus map is built from lives here:
//!
//! 1. [`MoveToFrontMap`](crate::collections::MoveToFrontMap) – a self-organising linked mapping
//!    that moves every successfully accessed key to the front. It is the default bucket type.
//! 2. [`ChainedHashMap`](crate::collections::ChainedHashMap) – a prime-sized, separately chained
//!    hash mapping whose buckets come from a pluggable [`BucketFactory`](crate::collections::BucketFactory).
//! 3. [`ChainedHashSet`](crate::collections::ChainedHashSet) – the key space of a
//!    `ChainedHashMap` presented as a set.
//! 4. [`FourHeap`](crate::collections::FourHeap) – an indexed 4-ary min-heap with true
//!    decrease-key and increase-key.
//! 5. [`Graph`](crate::graph::Graph) – a weighted directed graph stored as nested hash mappings,
//!    with [`dijkstra`](crate::graph::dijkstra) and [`radius_search`](crate::graph::radius_search)
//!    on top.
//!
//! All structures are single-threaded and exclusively owned by their caller.

pub mod collections;
pub mod errors;
pub mod graph;
pub mod logging;

pub use errors::{
    CoreError,
    CoreResult,
};
