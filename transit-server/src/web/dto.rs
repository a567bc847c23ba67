//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::{Path, Station};
use crate::report::{Itinerary, ItineraryStep};

/// Request to plan a route.
#[derive(Debug, Deserialize)]
pub struct RouteRequest {
    /// Origin station id
    pub from: String,

    /// Destination station id
    pub to: String,
}

/// One itinerary step in a route response.
#[derive(Debug, Serialize)]
pub struct StepResult {
    /// Line to ride
    pub line: String,

    /// Segment kind label
    pub kind: String,

    /// Boarding station
    pub from: String,

    /// Alighting station
    pub to: String,
}

/// Response for route planning.
#[derive(Debug, Serialize)]
pub struct RouteResponse {
    /// Whether any path connects the endpoints.
    ///
    /// "No path" is a normal outcome, not an error: the remaining fields
    /// are empty/zero in that case.
    pub reachable: bool,

    /// Stations of the chosen path, in travel order
    pub stations: Vec<String>,

    /// Number of stations visited
    pub station_count: usize,

    /// Number of line changes on the chosen path
    pub transfers: usize,

    /// Turn-by-turn steps
    pub steps: Vec<StepResult>,

    /// How many equally short paths were found in total
    pub alternatives: usize,

    /// Frontier extractions performed by the search
    pub pops: usize,
}

/// A station in the listing response.
#[derive(Debug, Serialize)]
pub struct StationResult {
    /// Station id
    pub id: String,

    /// Corridor label
    pub corridor: String,
}

/// Response listing all stations.
#[derive(Debug, Serialize)]
pub struct StationsResponse {
    /// All stations, sorted by id
    pub stations: Vec<StationResult>,
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

// Conversion implementations

impl StepResult {
    /// Create from a domain itinerary step.
    pub fn from_step(step: &ItineraryStep) -> Self {
        Self {
            line: step.line.as_str().to_string(),
            kind: step.kind.clone(),
            from: step.from.as_str().to_string(),
            to: step.to.as_str().to_string(),
        }
    }
}

impl RouteResponse {
    /// Create from a chosen path and its derived itinerary.
    pub fn from_route(
        path: &Path,
        transfers: usize,
        itinerary: &Itinerary,
        alternatives: usize,
        pops: usize,
    ) -> Self {
        Self {
            reachable: true,
            stations: path
                .stations()
                .iter()
                .map(|s| s.as_str().to_string())
                .collect(),
            station_count: path.station_count(),
            transfers,
            steps: itinerary.steps().iter().map(StepResult::from_step).collect(),
            alternatives,
            pops,
        }
    }

    /// The "no path exists" response.
    pub fn unreachable(pops: usize) -> Self {
        Self {
            reachable: false,
            stations: Vec::new(),
            station_count: 0,
            transfers: 0,
            steps: Vec::new(),
            alternatives: 0,
            pops,
        }
    }
}

impl StationResult {
    /// Create from a domain station record.
    pub fn from_station(station: &Station) -> Self {
        Self {
            id: station.id.as_str().to_string(),
            corridor: station.corridor.clone(),
        }
    }
}
