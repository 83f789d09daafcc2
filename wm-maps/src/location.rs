//! Places on the map.

use serde::{
    Deserialize,
    Serialize,
};

use crate::geo::distance_feet;

/// What role a location plays in routing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LocationKind {
    /// A named destination such as a building. Routes may start or end here but never pass
    /// through.
    Building,
    /// An unnamed road junction usable as an intermediate hop.
    #[default]
    Waypoint,
}

/// A vertex of the campus map together with its coordinates.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Location {
    /// Unique id, shared by buildings and waypoints.
    pub id: u64,
    /// Latitude in degrees.
    pub lat: f64,
    /// Longitude in degrees.
    pub lon: f64,
    /// Display name; waypoints usually have none.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Building or waypoint. Data files do not carry this; the loader sets it.
    #[serde(default)]
    pub kind: LocationKind,
}

impl Location {
    /// A building with an optional name.
    #[must_use]
    pub fn building(id: u64, lat: f64, lon: f64, name: Option<&str>) -> Self {
        Self { id, lat, lon, name: name.map(str::to_owned), kind: LocationKind::Building }
    }

    /// An unnamed waypoint.
    #[must_use]
    pub const fn waypoint(id: u64, lat: f64, lon: f64) -> Self {
        Self { id, lat, lon, name: None, kind: LocationKind::Waypoint }
    }

    /// Whether this location is a building.
    #[must_use]
    pub fn is_building(&self) -> bool {
        self.kind == LocationKind::Building
    }

    /// Straight-line distance in feet to `other`.
    #[must_use]
    pub fn distance_to(&self, other: &Self) -> f64 {
        self.distance_from(other.lat, other.lon)
    }

    /// Straight-line distance in feet to a raw coordinate.
    #[must_use]
    pub fn distance_from(&self, lat: f64, lon: f64) -> f64 {
        distance_feet(self.lat, self.lon, lat, lon)
    }
}
