#![deny(
    // Strict on purpose: the goal is to force inline allows wherever a pedantic lint is waived, so
    // that each waiver is visible to the next reader.
    clippy::nursery,
    clippy::pedantic,
    missing_docs,
)]
//! Waymark command line interface.
//!
//! Loads a campus map from three JSON files and runs a single query against it, printing the
//! answer as JSON on stdout. See binary --help for more information.

use std::path::PathBuf;

use anyhow::Result;
use clap::{
    Parser,
    Subcommand,
};
use serde::Serialize;
use tracing::info;
use wm_maps::CampusMap;

/// Query a campus map for nearby buildings and walking routes.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// JSON file listing the buildings.
    #[arg(short, long)]
    buildings: PathBuf,

    /// JSON file listing the waypoints.
    #[arg(short, long)]
    waypoints: PathBuf,

    /// JSON file listing the roads as arrays of location ids.
    #[arg(short, long)]
    roads: PathBuf,

    /// Logging verbosity level (`trace`, `debug`, `info`, `warn`, `error`).
    #[arg(short, long, default_value = "info")]
    verbosity: String,

    #[command(subcommand)]
    command: Command,
}

/// The query to run.
#[derive(Subcommand)]
enum Command {
    /// Buildings within a straight-line radius of a location, nearest first.
    Nearby {
        /// Id of the location to search from.
        id: u64,

        /// Search radius in feet.
        #[arg(long, default_value_t = 1000.0, value_parser = parse_radius)]
        radius: f64,
    },

    /// Shortest walking route between two locations.
    Route {
        /// Id of the starting location.
        from: u64,

        /// Id of the destination.
        to: u64,
    },

    /// The building closest to a coordinate.
    Closest {
        /// Latitude in degrees.
        #[arg(allow_hyphen_values = true)]
        lat: f64,

        /// Longitude in degrees.
        #[arg(allow_hyphen_values = true)]
        lon: f64,
    },

    /// Buildings with exactly this name.
    Find {
        /// Building name.
        name: String,
    },
}

/// Custom parser for `radius` to reject negative and non-finite values
fn parse_radius(s: &str) -> Result<f64, String> {
    let val: f64 = s.parse().map_err(|_| format!("'{s}' isn't a valid float number"))?;
    if val.is_finite() && val >= 0.0 {
        Ok(val)
    } else {
        Err(format!("radius must be a non-negative number of feet, got: {val}"))
    }
}

/// Print `value` as pretty JSON on stdout.
fn emit<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn main() -> Result<()> {
    let args = Cli::parse();

    // Conform to crate-standard logging.
    wm_core::logging::setup(&args.verbosity);

    let mut map = CampusMap::from_files(&args.buildings, &args.waypoints, &args.roads)?;
    info!("Loaded {} locations ({} buildings)", map.len(), map.buildings().len());

    match args.command {
        Command::Nearby { id, radius } => emit(&map.nearby(id, radius)?),
        Command::Route { from, to } => emit(&map.shortest_path(from, to)?),
        Command::Closest { lat, lon } => emit(&map.closest_building(lat, lon)?),
        Command::Find { name } => emit(&map.locations_by_name(&name)),
    }
}

#[cfg(test)]
mod tests {
    use assertables::*;
    use rstest::*;

    use super::*;

    #[rstest]
    #[case("0", Ok(0.0))]
    #[case("250.5", Ok(250.5))]
    #[case("-1", Err(()))]
    #[case("inf", Err(()))]
    #[case("far", Err(()))]
    fn test_parse_radius(#[case] input: &str, #[case] expected: Result<f64, ()>) {
        assert_eq!(parse_radius(input).map_err(|_| ()), expected);
    }

    #[rstest]
    fn test_cli_parses_negative_coordinates() {
        let cli = Cli::try_parse_from([
            "wm-maps", "-b", "b.json", "-w", "w.json", "-r", "r.json", "closest", "34.1", "-118.2",
        ])
        .unwrap();
        let Command::Closest { lat, lon } = cli.command else {
            panic!("expected the closest subcommand");
        };
        assert_lt!((lat - 34.1).abs(), 1e-9);
        assert_lt!((lon + 118.2).abs(), 1e-9);
    }

    #[rstest]
    fn test_cli_rejects_bad_radius() {
        let result = Cli::try_parse_from([
            "wm-maps", "-b", "b.json", "-w", "w.json", "-r", "r.json", "nearby", "7", "--radius=-5",
        ]);
        assert!(result.is_err());
    }
}
