//! The transit network: stations plus directed, line-tagged segments.
//!
//! A [`Network`] is built once from station and segment records, then
//! read-only. Searches borrow it immutably, so one network can back any
//! number of concurrent searches without locking.

mod loader;

pub use loader::{LoadError, load_network};

use std::collections::HashMap;

use crate::domain::{LineId, Segment, Station, StationId};

/// Errors from network construction and segment lookup.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NetworkError {
    /// A segment references a station that is not in the station set
    #[error("segment on line '{line}' references unknown station '{station}'")]
    InvalidReference { line: LineId, station: StationId },

    /// No segment directly connects the two stations
    #[error("no segment connects {origin} to {destination}")]
    NoSuchSegment {
        origin: StationId,
        destination: StationId,
    },
}

/// An in-memory directed transit network.
///
/// Parallel segments (same endpoints, different lines) are preserved as
/// distinct entries, in insertion order.
#[derive(Debug, Clone)]
pub struct Network {
    stations: HashMap<StationId, Station>,
    outgoing: HashMap<StationId, Vec<Segment>>,
    segment_count: usize,
}

impl Network {
    /// Build a network from station and segment records.
    ///
    /// Every segment endpoint must name a loaded station; the first
    /// violation is reported as [`NetworkError::InvalidReference`]. A
    /// duplicate station id replaces the earlier record.
    pub fn build(stations: Vec<Station>, segments: Vec<Segment>) -> Result<Self, NetworkError> {
        let stations: HashMap<StationId, Station> = stations
            .into_iter()
            .map(|station| (station.id.clone(), station))
            .collect();

        let mut outgoing: HashMap<StationId, Vec<Segment>> = HashMap::new();
        let mut segment_count = 0;

        for segment in segments {
            for endpoint in [&segment.origin, &segment.destination] {
                if !stations.contains_key(endpoint) {
                    return Err(NetworkError::InvalidReference {
                        line: segment.line.clone(),
                        station: endpoint.clone(),
                    });
                }
            }

            outgoing
                .entry(segment.origin.clone())
                .or_default()
                .push(segment);
            segment_count += 1;
        }

        Ok(Self {
            stations,
            outgoing,
            segment_count,
        })
    }

    /// Whether the given station exists in the network.
    pub fn contains(&self, id: &StationId) -> bool {
        self.stations.contains_key(id)
    }

    /// Look up a station record by id.
    pub fn station(&self, id: &StationId) -> Option<&Station> {
        self.stations.get(id)
    }

    /// Iterate over all station records, in no particular order.
    pub fn stations(&self) -> impl Iterator<Item = &Station> {
        self.stations.values()
    }

    /// Number of stations in the network.
    pub fn station_count(&self) -> usize {
        self.stations.len()
    }

    /// Number of segments in the network, counting parallels separately.
    pub fn segment_count(&self) -> usize {
        self.segment_count
    }

    /// Outgoing segments from a station, in insertion order.
    ///
    /// Empty for sink stations and for ids not in the network.
    pub fn neighbors(&self, id: &StationId) -> &[Segment] {
        self.outgoing.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Look up the segment directly connecting two stations.
    ///
    /// When parallel segments exist the first inserted wins; callers that
    /// care which line they are riding should use
    /// [`segments_between`](Self::segments_between) instead.
    pub fn segment(
        &self,
        origin: &StationId,
        destination: &StationId,
    ) -> Result<&Segment, NetworkError> {
        self.neighbors(origin)
            .iter()
            .find(|segment| &segment.destination == destination)
            .ok_or_else(|| NetworkError::NoSuchSegment {
                origin: origin.clone(),
                destination: destination.clone(),
            })
    }

    /// All segments directly connecting two stations, in insertion order.
    ///
    /// Multiple results mean parallel segments on different lines.
    pub fn segments_between<'a, 'b>(
        &'a self,
        origin: &StationId,
        destination: &'b StationId,
    ) -> impl Iterator<Item = &'a Segment> {
        self.neighbors(origin)
            .iter()
            .filter(move |segment| &segment.destination == destination)
    }
}
