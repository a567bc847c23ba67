//! Selecting the best path among minimum-cost candidates.

use crate::domain::{Path, Segment};
use crate::network::{Network, NetworkError};

/// Error from path selection.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectError {
    /// The candidate set was empty
    #[error("no candidate paths to select from")]
    EmptyInput,

    /// A candidate path traverses a pair of stations with no segment
    #[error(transparent)]
    Network(#[from] NetworkError),
}

/// Choose one segment per consecutive pair of the path so that the total
/// number of line changes is minimal.
///
/// Where parallel segments exist, the choice at one pair can force a
/// change several pairs later, so this runs a small dynamic program over
/// the line options of each pair rather than deciding greedily. Ties
/// keep the earliest-inserted segment, so the result is deterministic.
///
/// The trivial single-station path yields an empty choice.
pub(crate) fn best_segments<'a>(
    network: &'a Network,
    path: &Path,
) -> Result<Vec<&'a Segment>, NetworkError> {
    struct Candidate<'a> {
        segment: &'a Segment,
        transfers: usize,
        prev: usize,
    }

    // One layer per consecutive pair: every parallel segment for that
    // pair, the fewest transfers achievable ending on it, and the index
    // of the chosen candidate in the previous layer.
    let mut layers: Vec<Vec<Candidate<'a>>> = Vec::new();

    for (from, to) in path.pairs() {
        let mut layer: Vec<Candidate<'a>> = Vec::new();

        for segment in network.segments_between(from, to) {
            let (transfers, prev) = match layers.last() {
                // The first segment establishes the line for free.
                None => (0, 0),
                Some(previous) => {
                    let mut best_transfers = usize::MAX;
                    let mut best_prev = 0;
                    for (index, candidate) in previous.iter().enumerate() {
                        let cost = if candidate.segment.line == segment.line {
                            candidate.transfers
                        } else {
                            candidate.transfers + 1
                        };
                        if cost < best_transfers {
                            best_transfers = cost;
                            best_prev = index;
                        }
                    }
                    (best_transfers, best_prev)
                }
            };

            layer.push(Candidate {
                segment,
                transfers,
                prev,
            });
        }

        if layer.is_empty() {
            return Err(NetworkError::NoSuchSegment {
                origin: from.clone(),
                destination: to.clone(),
            });
        }
        layers.push(layer);
    }

    let Some(last) = layers.last() else {
        return Ok(Vec::new());
    };

    let mut index = 0;
    for (i, candidate) in last.iter().enumerate() {
        if candidate.transfers < last[index].transfers {
            index = i;
        }
    }

    let mut choice: Vec<&'a Segment> = Vec::with_capacity(layers.len());
    for layer in layers.iter().rev() {
        let candidate = &layer[index];
        choice.push(candidate.segment);
        index = candidate.prev;
    }
    choice.reverse();

    Ok(choice)
}

/// Count the line changes along a path.
///
/// The first segment establishes the initial line for free; every later
/// change of line counts as one transfer. The count is the minimum over
/// all line assignments the network permits for the path, so parallel
/// segments never inflate it — even when staying aboard now would force
/// a change later.
pub fn transfer_count(network: &Network, path: &Path) -> Result<usize, NetworkError> {
    let segments = best_segments(network, path)?;

    let mut transfers = 0;
    for pair in segments.windows(2) {
        if pair[0].line != pair[1].line {
            transfers += 1;
        }
    }

    Ok(transfers)
}

/// Pick the path with the fewest transfers.
///
/// Ties are broken by input order: the first candidate achieving the
/// minimum wins.
pub fn select_best<'a>(network: &Network, paths: &'a [Path]) -> Result<&'a Path, SelectError> {
    let mut best: Option<(&Path, usize)> = None;

    for path in paths {
        let transfers = transfer_count(network, path)?;
        match best {
            Some((_, fewest)) if transfers >= fewest => {}
            _ => best = Some((path, transfers)),
        }
    }

    best.map(|(path, _)| path).ok_or(SelectError::EmptyInput)
}
