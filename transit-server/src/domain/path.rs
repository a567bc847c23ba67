//! Paths through the network.

use std::collections::HashSet;
use std::fmt;

use super::StationId;
use super::error::DomainError;

/// An ordered sequence of stations from an origin to a destination.
///
/// A path is simple: it visits each station at most once, and contains at
/// least the origin. The single-station path (origin == destination) is
/// valid and has no segments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path {
    stations: Vec<StationId>,
}

impl Path {
    /// Create a path from an ordered station sequence.
    ///
    /// Fails if the sequence is empty or visits any station twice.
    pub fn new(stations: Vec<StationId>) -> Result<Self, DomainError> {
        if stations.is_empty() {
            return Err(DomainError::EmptyPath);
        }

        let mut seen = HashSet::with_capacity(stations.len());
        for station in &stations {
            if !seen.insert(station) {
                return Err(DomainError::RepeatedStation(station.clone()));
            }
        }

        Ok(Self { stations })
    }

    /// The trivial path consisting of a single station.
    pub fn trivial(station: StationId) -> Self {
        Self {
            stations: vec![station],
        }
    }

    /// The first station of the path.
    pub fn origin(&self) -> &StationId {
        // Invariant: stations is non-empty
        &self.stations[0]
    }

    /// The last station of the path.
    pub fn destination(&self) -> &StationId {
        &self.stations[self.stations.len() - 1]
    }

    /// All stations, in travel order.
    pub fn stations(&self) -> &[StationId] {
        &self.stations
    }

    /// Number of stations visited, including origin and destination.
    pub fn station_count(&self) -> usize {
        self.stations.len()
    }

    /// Whether the path is the trivial single-station path.
    pub fn is_trivial(&self) -> bool {
        self.stations.len() == 1
    }

    /// Iterate over consecutive (from, to) station pairs.
    ///
    /// Empty for the trivial path.
    pub fn pairs(&self) -> impl Iterator<Item = (&StationId, &StationId)> {
        self.stations.windows(2).map(|w| (&w[0], &w[1]))
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, station) in self.stations.iter().enumerate() {
            if i > 0 {
                f.write_str(" -> ")?;
            }
            f.write_str(station.as_str())?;
        }
        Ok(())
    }
}
