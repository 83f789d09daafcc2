#![deny(
    // Strict on purpose: the goal is to force inline allows wherever a pedantic lint is waived, so
    // that each waiver is visible to the next reader.
    clippy::nursery,
    clippy::pedantic,
    missing_docs,
)]

//! # wm-maps – campus navigation for Waymark
//!
//! A campus is a set of [`Location`]s (named buildings and anonymous waypoints) joined by roads.
//! [`CampusMap`] loads one from JSON ([`loader`]) and answers three kinds of question:
//!
//! * which buildings are within a given straight-line distance of a location
//!   ([`CampusMap::nearby`]);
//! * what is the shortest road route between two locations, passing only through waypoints
//!   ([`CampusMap::shortest_path`]);
//! * which building is closest to an arbitrary coordinate ([`CampusMap::closest_building`]).
//!
//! Distances are great-circle distances in feet ([`geo`]).

pub mod geo;
pub mod loader;
pub mod location;
pub mod map;

pub use loader::MapSources;
pub use location::{
    Location,
    LocationKind,
};
pub use map::{
    CampusMap,
    Route,
};
