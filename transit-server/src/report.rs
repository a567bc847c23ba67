//! Turn-by-turn itineraries derived from a path.
//!
//! An itinerary is not stored anywhere; it is recomputed on demand from a
//! [`Path`] plus segment lookups against the network.

use std::fmt;

use crate::domain::{LineId, Path, StationId};
use crate::network::{Network, NetworkError};
use crate::planner::best_segments;

/// One leg of an itinerary: ride `line` from `from` to `to`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItineraryStep {
    /// Line to ride.
    pub line: LineId,

    /// Segment kind label, e.g. "Expreso".
    pub kind: String,

    /// Boarding station.
    pub from: StationId,

    /// Alighting station.
    pub to: StationId,
}

/// A turn-by-turn itinerary for a path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Itinerary {
    steps: Vec<ItineraryStep>,
}

impl Itinerary {
    /// Derive an itinerary from a path.
    ///
    /// Line choice matches
    /// [`transfer_count`](crate::planner::transfer_count): among parallel
    /// segments, the assignment with the fewest line changes over the
    /// whole path is used. The trivial single-station path yields an
    /// empty itinerary.
    pub fn from_path(network: &Network, path: &Path) -> Result<Self, NetworkError> {
        let steps = best_segments(network, path)?
            .into_iter()
            .map(|segment| ItineraryStep {
                line: segment.line.clone(),
                kind: segment.kind.clone(),
                from: segment.origin.clone(),
                to: segment.destination.clone(),
            })
            .collect();

        Ok(Self { steps })
    }

    /// The steps, in travel order.
    pub fn steps(&self) -> &[ItineraryStep] {
        &self.steps
    }

    /// Number of steps.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Whether the itinerary has no steps (trivial path).
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

impl fmt::Display for ItineraryStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Take line '{}' ({}) from {} to {}",
            self.line, self.kind, self.from, self.to
        )
    }
}

impl fmt::Display for Itinerary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, step) in self.steps.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{step}")?;
        }
        Ok(())
    }
}
