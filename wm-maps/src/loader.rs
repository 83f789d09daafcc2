//! Reading map data from JSON files.
//!
//! A map is described by three files:
//!
//! * buildings – `[{"id": 1, "lat": 34.13, "lon": -118.12, "name": "Library"}, ...]`
//! * waypoints – `[{"id": 2, "lat": 34.13, "lon": -118.12}, ...]`
//! * roads – `[[1, 2, 3], [3, 4], ...]`, each an ordered polyline of location ids
//!
//! Loading is stateless; each call builds its own reader.

use std::fs::File;
use std::io::{
    BufReader,
    Read,
};
use std::path::Path;

use anyhow::{
    Context,
    Result,
};
use serde::de::DeserializeOwned;
use tracing::{
    info,
    instrument,
};

use crate::location::{
    Location,
    LocationKind,
};

/// Everything needed to build a [`CampusMap`](crate::map::CampusMap), in load order.
#[derive(Clone, Debug, Default)]
pub struct MapSources {
    /// Points of interest.
    pub buildings: Vec<Location>,
    /// Transit junctions.
    pub waypoints: Vec<Location>,
    /// Polylines of location ids; consecutive ids are joined by an undirected edge.
    pub roads: Vec<Vec<u64>>,
}

impl MapSources {
    /// Parse the three data streams.
    ///
    /// # Errors
    ///
    /// Fails if any stream is not valid JSON of the expected shape; the message names which one.
    pub fn from_readers(buildings: impl Read, waypoints: impl Read, roads: impl Read) -> Result<Self> {
        Ok(Self {
            buildings: read_locations(buildings, LocationKind::Building).context("invalid buildings data")?,
            waypoints: read_locations(waypoints, LocationKind::Waypoint).context("invalid waypoints data")?,
            roads: read_json(roads).context("invalid roads data")?,
        })
    }

    /// Open and parse the three data files.
    ///
    /// # Errors
    ///
    /// Fails if a file cannot be opened, naming its path, or cannot be parsed.
    #[instrument]
    pub fn from_files(buildings: &Path, waypoints: &Path, roads: &Path) -> Result<Self> {
        let sources = Self::from_readers(open(buildings)?, open(waypoints)?, open(roads)?)?;
        info!(
            buildings = sources.buildings.len(),
            waypoints = sources.waypoints.len(),
            roads = sources.roads.len(),
            "loaded map data"
        );
        Ok(sources)
    }
}

/// Parse an array of locations and stamp each with `kind`.
fn read_locations(reader: impl Read, kind: LocationKind) -> Result<Vec<Location>> {
    let mut locations: Vec<Location> = read_json(reader)?;
    for location in &mut locations {
        location.kind = kind;
    }
    Ok(locations)
}

/// Deserialize one JSON document.
fn read_json<T: DeserializeOwned>(reader: impl Read) -> Result<T> {
    Ok(serde_json::from_reader(BufReader::new(reader))?)
}

/// Open `path` for reading, naming it in the error.
fn open(path: &Path) -> Result<File> {
    File::open(path).with_context(|| format!("could not open {}", path.display()))
}

#[cfg(test)]
mod tests {
    use rstest::*;

    use super::*;

    #[rstest]
    fn test_from_readers() {
        let buildings = r#"[{"id": 1, "lat": 1.0, "lon": 2.0, "name": "Library"}, {"id": 2, "lat": 0.0, "lon": 0.0}]"#;
        let waypoints = r#"[{"id": 3, "lat": 1.5, "lon": 2.5}]"#;
        let roads = "[[1, 3, 2], [3]]";

        let sources = MapSources::from_readers(buildings.as_bytes(), waypoints.as_bytes(), roads.as_bytes()).unwrap();
        assert_eq!(sources.buildings[0], Location::building(1, 1.0, 2.0, Some("Library")));
        assert_eq!(sources.buildings[1].name, None);
        assert!(sources.buildings[1].is_building());
        assert_eq!(sources.waypoints, vec![Location::waypoint(3, 1.5, 2.5)]);
        assert_eq!(sources.roads, vec![vec![1, 3, 2], vec![3]]);
    }

    #[rstest]
    #[case::buildings("{}", "[]", "[]", "invalid buildings data")]
    #[case::waypoints("[]", r#"[{"id": "x"}]"#, "[]", "invalid waypoints data")]
    #[case::roads("[]", "[]", "[[1, -2]]", "invalid roads data")]
    fn test_malformed_data(
        #[case] buildings: &str,
        #[case] waypoints: &str,
        #[case] roads: &str,
        #[case] message: &str,
    ) {
        let err = MapSources::from_readers(buildings.as_bytes(), waypoints.as_bytes(), roads.as_bytes()).unwrap_err();
        assert_eq!(err.to_string(), message);
    }

    #[rstest]
    fn test_missing_file() {
        let missing = Path::new("does/not/exist.json");
        let err = MapSources::from_files(missing, missing, missing).unwrap_err();
        assert!(err.to_string().contains("does/not/exist.json"));
    }
}
