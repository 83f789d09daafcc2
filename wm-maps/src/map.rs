//! The campus map and its queries.

use std::collections::VecDeque;
use std::path::Path;

use anyhow::{
    bail,
    Result,
};
use itertools::Itertools;
use ordered_float::OrderedFloat;
use serde::Serialize;
use tracing::{
    debug,
    instrument,
    warn,
};
use wm_core::collections::{
    ChainedHashMap,
    ChainedHashSet,
    Dictionary,
    FourHeap,
    PqElement,
};
use wm_core::graph::{
    dijkstra,
    radius_search,
    Graph,
};

use crate::loader::MapSources;
use crate::location::Location;

/// A shortest route between two locations.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Route {
    /// Every location along the route, both ends included.
    pub stops: VecDeque<Location>,
    /// Total length in feet.
    pub length_feet: f64,
}

/// A road network of buildings and waypoints.
///
/// Vertices are location ids and edge weights are straight-line distances in feet between the two
/// ends of a road segment. Buildings are destinations only: routes between two buildings run
/// through waypoints and never pass through a third building.
pub struct CampusMap {
    /// Road network over location ids.
    graph: Graph<u64, f64>,
    /// Every location by id.
    locations: ChainedHashMap<u64, Location>,
    /// Ids of the buildings.
    buildings: ChainedHashSet<u64>,
}

impl CampusMap {
    /// An empty map.
    #[must_use]
    pub fn new() -> Self {
        Self {
            graph: Graph::new(),
            locations: ChainedHashMap::new(),
            buildings: ChainedHashSet::new(),
        }
    }

    /// Build a map from parsed data: every building and waypoint becomes a vertex and every pair
    /// of consecutive ids in a road becomes an undirected edge.
    ///
    /// # Errors
    ///
    /// Fails if a road names an id that is neither a building nor a waypoint.
    #[instrument(skip(sources), fields(roads = sources.roads.len()))]
    pub fn from_sources(sources: MapSources) -> Result<Self> {
        let mut map = Self::new();
        for location in sources.buildings.into_iter().chain(sources.waypoints) {
            let id = location.id;
            if !map.add_location(location) {
                warn!(id, "duplicate location id, keeping the first");
            }
        }

        let mut segments = 0;
        for road in &sources.roads {
            segments += map.add_road(road)?;
        }
        debug!(vertices = map.graph.vertex_count(), segments, "map built");
        Ok(map)
    }

    /// Load the three data files and build a map from them.
    ///
    /// # Errors
    ///
    /// Fails if a file cannot be opened or parsed, or if a road names an unknown id.
    pub fn from_files(buildings: &Path, waypoints: &Path, roads: &Path) -> Result<Self> {
        Self::from_sources(MapSources::from_files(buildings, waypoints, roads)?)
    }

    /// Add a location as a new vertex. Returns `false`, changing nothing, if the id is taken.
    pub fn add_location(&mut self, location: Location) -> bool {
        if !self.graph.add_vertex(location.id) {
            return false;
        }
        if location.is_building() {
            self.buildings.add(location.id);
        }
        self.locations.put(location.id, location);
        true
    }

    /// Join each consecutive pair of ids in `road` with an undirected edge weighted by the
    /// distance between them. Returns the number of segments added.
    ///
    /// # Errors
    ///
    /// Fails on the first segment whose ends are not both known locations; earlier segments stay
    /// added.
    pub fn add_road(&mut self, road: &[u64]) -> Result<usize> {
        let mut segments = 0;
        for (a, b) in road.iter().copied().tuple_windows() {
            let (Some(from), Some(to)) = (self.locations.get(&a).cloned(), self.locations.get(&b).cloned()) else {
                bail!("road segment {a} -> {b} references an unknown location");
            };
            self.graph.add_undirected_edge(a, b, from.distance_to(&to))?;
            segments += 1;
        }
        Ok(segments)
    }

    /// The location with this id.
    pub fn location_by_id(&mut self, id: u64) -> Option<&Location> {
        self.locations.get(&id)
    }

    /// Every building called `name`.
    #[must_use]
    pub fn locations_by_name(&self, name: &str) -> VecDeque<Location> {
        self.locations
            .values()
            .filter(|location| location.is_building() && location.name.as_deref() == Some(name))
            .cloned()
            .collect()
    }

    /// Ids of all buildings.
    #[must_use]
    pub const fn buildings(&self) -> &ChainedHashSet<u64> {
        &self.buildings
    }

    /// Number of locations on the map.
    #[must_use]
    pub fn len(&self) -> usize {
        self.locations.len()
    }

    /// `true` when the map has no locations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    /// The building nearest to a coordinate, by straight-line distance.
    ///
    /// Every building is ranked; there is no spatial index.
    ///
    /// # Errors
    ///
    /// Propagates priority queue failures, which do not occur for a consistent map.
    pub fn closest_building(&mut self, lat: f64, lon: f64) -> Result<Option<Location>> {
        let mut ranked = FourHeap::new();
        for id in self.buildings.iter() {
            if let Some(location) = self.locations.get(id) {
                ranked.enqueue(PqElement::new(*id, OrderedFloat(location.distance_from(lat, lon))))?;
            }
        }

        if ranked.is_empty() {
            return Ok(None);
        }
        let nearest = ranked.dequeue()?;
        Ok(self.locations.get(&nearest.data).cloned())
    }

    /// Buildings within `threshold` feet (straight line) of the location `start`, nearest first.
    ///
    /// Everything reachable from `start` by road is explored, so buildings that can only be
    /// reached through locations outside the radius are still found. An unknown `start` yields an
    /// empty list.
    ///
    /// # Errors
    ///
    /// Propagates graph failures, which do not occur for a consistent map.
    #[instrument(skip(self))]
    pub fn nearby(&mut self, start: u64, threshold: f64) -> Result<Vec<Location>> {
        let Some(origin) = self.locations.get(&start).cloned() else {
            return Ok(Vec::new());
        };

        let locations = &mut self.locations;
        let buildings = &mut self.buildings;
        let found = radius_search(&mut self.graph, &start, |id| {
            buildings.contains(id) && locations.get(id).is_some_and(|loc| origin.distance_to(loc) <= threshold)
        })?;

        let mut nearby: Vec<Location> = found.iter().filter_map(|id| self.locations.get(id).cloned()).collect();
        nearby.sort_by_key(|loc| OrderedFloat(origin.distance_to(loc)));
        Ok(nearby)
    }

    /// The shortest road route from `start` to `target`, or `None` if there is none or either id
    /// is unknown.
    ///
    /// Only waypoints are used as intermediate stops.
    ///
    /// # Errors
    ///
    /// Propagates graph failures, which do not occur for a consistent map.
    #[instrument(skip(self))]
    pub fn shortest_path(&mut self, start: u64, target: u64) -> Result<Option<Route>> {
        if !self.locations.contains_key(&start) || !self.locations.contains_key(&target) {
            return Ok(None);
        }

        let buildings = &mut self.buildings;
        let mut paths = dijkstra(&mut self.graph, &start, Some(&target), |id| {
            *id == target || !buildings.contains(id)
        })?;

        let (Some(ids), Some(length_feet)) = (paths.path_to(&target), paths.distance(&target)) else {
            debug!("no route");
            return Ok(None);
        };
        let stops = ids.iter().filter_map(|id| self.locations.get(id).cloned()).collect();
        Ok(Some(Route { stops, length_feet }))
    }
}

impl Default for CampusMap {
    fn default() -> Self {
        Self::new()
    }
}
