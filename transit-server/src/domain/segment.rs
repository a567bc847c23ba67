//! Directed, line-tagged connections between stations.

use super::{LineId, StationId};

/// A directed segment from one station to another, travelled on a
/// particular line.
///
/// The line id is part of the segment's identity: two segments with the
/// same endpoints but different lines are distinct parallel segments, and
/// the network preserves both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    /// The line this segment belongs to.
    pub line: LineId,

    /// Kind of run, e.g. "Corriente" or "Expreso". Free-form label,
    /// carried through to itineraries but never interpreted.
    pub kind: String,

    /// Station the segment departs from.
    pub origin: StationId,

    /// Station the segment arrives at.
    pub destination: StationId,
}

impl Segment {
    /// Create a new segment.
    pub fn new(
        line: LineId,
        kind: impl Into<String>,
        origin: StationId,
        destination: StationId,
    ) -> Self {
        Self {
            line,
            kind: kind.into(),
            origin,
            destination,
        }
    }
}
