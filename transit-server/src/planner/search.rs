//! Transfer-aware minimum-path search.
//!
//! Finds every path from an origin to a destination that achieves the
//! minimum accumulated cost, where each segment costs 1 and a segment
//! whose line differs from the line used to reach its origin costs 2.
//! The resulting path set feeds the selector, which picks the path with
//! the fewest transfers.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap, hash_map::Entry};

use tracing::{debug, trace};

use crate::domain::{LineId, Path, StationId};
use crate::network::Network;

use super::config::{CancelToken, SearchConfig};

/// Error from path search.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    /// Origin or destination is not a station in the network
    #[error("unknown station: {0}")]
    UnknownStation(StationId),

    /// The search's cancellation token was tripped
    #[error("search cancelled")]
    Cancelled,

    /// The configured frontier budget was exhausted
    #[error("search exceeded the frontier budget of {0} extractions")]
    Budget(usize),
}

/// Request for a path search.
#[derive(Debug, Clone)]
pub struct SearchRequest {
    /// Station to start from.
    pub origin: StationId,

    /// Station to reach.
    pub destination: StationId,

    /// Cancellation token, checked at every frontier extraction.
    pub cancel: CancelToken,
}

impl SearchRequest {
    /// Create a request with a fresh, un-cancelled token.
    pub fn new(origin: StationId, destination: StationId) -> Self {
        Self {
            origin,
            destination,
            cancel: CancelToken::new(),
        }
    }

    /// Create a request observing an external cancellation token.
    pub fn with_cancel(origin: StationId, destination: StationId, cancel: CancelToken) -> Self {
        Self {
            origin,
            destination,
            cancel,
        }
    }

    /// Validate the request against a network.
    ///
    /// Both endpoints must exist; this runs before any frontier work.
    pub fn validate(&self, network: &Network) -> Result<(), SearchError> {
        for station in [&self.origin, &self.destination] {
            if !network.contains(station) {
                return Err(SearchError::UnknownStation(station.clone()));
            }
        }
        Ok(())
    }
}

/// Result of a path search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    /// Every minimum-cost path from origin to destination.
    ///
    /// Empty when the destination is unreachable; that is a normal
    /// result, not an error.
    pub paths: Vec<Path>,

    /// The minimum cost, when the destination was reached.
    pub cost: Option<u32>,

    /// Number of frontier extractions performed.
    pub pops: usize,
}

/// Per-station search label: best known cost, the line used on the
/// segment that achieved it, and every predecessor achieving that cost.
///
/// A label's cost never increases once written; equal-cost arrivals
/// accumulate predecessors without overwriting the cost or the line.
#[derive(Debug, Clone)]
struct Label {
    cost: u32,
    line: Option<LineId>,
    predecessors: Vec<StationId>,
}

/// Path planner over a read-only network.
pub struct Planner<'a> {
    network: &'a Network,
    config: &'a SearchConfig,
}

impl<'a> Planner<'a> {
    /// Create a new planner.
    pub fn new(network: &'a Network, config: &'a SearchConfig) -> Self {
        Self { network, config }
    }

    /// Find all minimum-cost paths for the request.
    pub fn search(&self, request: &SearchRequest) -> Result<SearchResult, SearchError> {
        request.validate(self.network)?;

        if request.origin == request.destination {
            return Ok(SearchResult {
                paths: vec![Path::trivial(request.origin.clone())],
                cost: Some(0),
                pops: 0,
            });
        }

        let mut labels: HashMap<StationId, Label> = HashMap::new();
        labels.insert(
            request.origin.clone(),
            Label {
                cost: 0,
                line: None,
                predecessors: Vec::new(),
            },
        );

        let mut frontier: BinaryHeap<Reverse<(u32, StationId)>> = BinaryHeap::new();
        frontier.push(Reverse((0, request.origin.clone())));

        let mut pops = 0usize;
        let mut best_cost: Option<u32> = None;

        while let Some(Reverse((cost, node))) = frontier.pop() {
            if request.cancel.is_cancelled() {
                return Err(SearchError::Cancelled);
            }

            pops += 1;
            if pops > self.config.max_pops {
                return Err(SearchError::Budget(self.config.max_pops));
            }

            // Once the destination's cost is known, nothing popped at a
            // higher cost can contribute to a minimum-cost path.
            if let Some(best) = best_cost {
                if cost > best {
                    break;
                }
            }

            let Some(label) = labels.get(&node) else {
                continue;
            };
            // A strictly better label superseded this entry.
            if cost > label.cost {
                continue;
            }

            if node == request.destination {
                trace!(cost, "destination reached");
                best_cost = Some(cost);
                continue;
            }

            let line = label.line.clone();
            for segment in self.network.neighbors(&node) {
                // Same-line continuation costs 1; a line change costs 2.
                // The very first segment out of the origin has no prior
                // line and costs 1.
                let weight = match &line {
                    Some(current) if current != &segment.line => 2,
                    _ => 1,
                };
                let candidate = cost + weight;

                match labels.entry(segment.destination.clone()) {
                    Entry::Occupied(mut entry) => {
                        let existing = entry.get_mut();
                        if candidate < existing.cost {
                            existing.cost = candidate;
                            existing.line = Some(segment.line.clone());
                            existing.predecessors.clear();
                            existing.predecessors.push(node.clone());
                            frontier.push(Reverse((candidate, segment.destination.clone())));
                        } else if candidate == existing.cost
                            && !existing.predecessors.contains(&node)
                        {
                            // Tie: accumulate the predecessor, keep the
                            // recorded cost and line, and do not re-push.
                            existing.predecessors.push(node.clone());
                        }
                    }
                    Entry::Vacant(entry) => {
                        entry.insert(Label {
                            cost: candidate,
                            line: Some(segment.line.clone()),
                            predecessors: vec![node.clone()],
                        });
                        frontier.push(Reverse((candidate, segment.destination.clone())));
                    }
                }
            }
        }

        let paths = match best_cost {
            Some(_) => reconstruct_all(&labels, &request.origin, &request.destination),
            None => Vec::new(),
        };

        debug!(
            pops,
            cost = ?best_cost,
            paths = paths.len(),
            "search complete"
        );

        Ok(SearchResult {
            paths,
            cost: best_cost,
            pops,
        })
    }
}

/// Reconstruct every minimum-cost path by walking all predecessor
/// combinations backwards from the destination.
///
/// Predecessor links always point at a strictly cheaper label, so the
/// predecessor relation is acyclic and the walk terminates.
fn reconstruct_all(
    labels: &HashMap<StationId, Label>,
    origin: &StationId,
    destination: &StationId,
) -> Vec<Path> {
    let mut paths = Vec::new();
    let mut suffix = vec![destination.clone()];
    walk_predecessors(labels, origin, destination, &mut suffix, &mut paths);
    paths
}

fn walk_predecessors(
    labels: &HashMap<StationId, Label>,
    origin: &StationId,
    node: &StationId,
    suffix: &mut Vec<StationId>,
    out: &mut Vec<Path>,
) {
    if node == origin {
        let stations: Vec<StationId> = suffix.iter().rev().cloned().collect();
        match Path::new(stations) {
            Ok(path) => out.push(path),
            // Unreachable: every predecessor link points at a strictly
            // cheaper label, so a walk can never revisit a station.
            Err(error) => debug_assert!(false, "invalid reconstructed path: {error}"),
        }
        return;
    }

    let Some(label) = labels.get(node) else {
        return;
    };

    for predecessor in &label.predecessors {
        suffix.push(predecessor.clone());
        walk_predecessors(labels, origin, predecessor, suffix, out);
        suffix.pop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{LineId, Segment, Station};

    fn station(s: &str) -> StationId {
        StationId::parse(s).unwrap()
    }

    /// Build a network from (line, origin, destination) triples; the
    /// station set is inferred from the endpoints.
    fn network(segments: &[(&str, &str, &str)]) -> Network {
        let mut stations: Vec<Station> = Vec::new();
        for (_, origin, destination) in segments {
            for name in [origin, destination] {
                if !stations.iter().any(|s| s.id.as_str() == *name) {
                    stations.push(Station::new(station(name), "A"));
                }
            }
        }

        let segments = segments
            .iter()
            .map(|(line, origin, destination)| {
                Segment::new(
                    LineId::parse(line).unwrap(),
                    "Corriente",
                    station(origin),
                    station(destination),
                )
            })
            .collect();

        Network::build(stations, segments).unwrap()
    }

    fn path_names(path: &Path) -> Vec<&str> {
        path.stations().iter().map(StationId::as_str).collect()
    }

    fn search(network: &Network, origin: &str, destination: &str) -> SearchResult {
        let config = SearchConfig::default();
        let planner = Planner::new(network, &config);
        planner
            .search(&SearchRequest::new(station(origin), station(destination)))
            .unwrap()
    }

    #[test]
    fn trivial_when_origin_is_destination() {
        let net = network(&[("1", "A", "B")]);
        let result = search(&net, "A", "A");

        assert_eq!(result.paths.len(), 1);
        assert_eq!(path_names(&result.paths[0]), vec!["A"]);
        assert_eq!(result.cost, Some(0));
        assert_eq!(result.pops, 0);
    }

    #[test]
    fn both_parallel_paths_found() {
        // Two same-line routes of equal length; both must be returned.
        let net = network(&[
            ("1", "A", "B"),
            ("1", "B", "D"),
            ("2", "A", "C"),
            ("2", "C", "D"),
        ]);
        let result = search(&net, "A", "D");

        assert_eq!(result.cost, Some(2));
        let mut names: Vec<Vec<&str>> = result.paths.iter().map(path_names).collect();
        names.sort();
        assert_eq!(names, vec![vec!["A", "B", "D"], vec!["A", "C", "D"]]);
    }

    #[test]
    fn transfer_penalty_prefers_single_line_route() {
        // A->B->D needs a change from line 1 to line 3 (cost 1 + 2 = 3);
        // A->C->D stays on line 2 (cost 2), so only it is minimal.
        let net = network(&[
            ("1", "A", "B"),
            ("3", "B", "D"),
            ("2", "A", "C"),
            ("2", "C", "D"),
        ]);
        let result = search(&net, "A", "D");

        assert_eq!(result.cost, Some(2));
        assert_eq!(result.paths.len(), 1);
        assert_eq!(path_names(&result.paths[0]), vec!["A", "C", "D"]);
    }

    #[test]
    fn enumerates_all_predecessor_combinations() {
        // Diamond into a shared tail: D has predecessors {B, C} at the
        // same cost, so two distinct paths reach E.
        let net = network(&[
            ("1", "A", "B"),
            ("1", "A", "C"),
            ("1", "B", "D"),
            ("1", "C", "D"),
            ("1", "D", "E"),
        ]);
        let result = search(&net, "A", "E");

        assert_eq!(result.cost, Some(3));
        let mut names: Vec<Vec<&str>> = result.paths.iter().map(path_names).collect();
        names.sort();
        assert_eq!(
            names,
            vec![vec!["A", "B", "D", "E"], vec!["A", "C", "D", "E"]]
        );
    }

    #[test]
    fn unreachable_destination_is_empty_not_error() {
        let net = network(&[("1", "A", "B"), ("1", "C", "D")]);
        let result = search(&net, "A", "D");

        assert!(result.paths.is_empty());
        assert_eq!(result.cost, None);
    }

    #[test]
    fn unknown_station_rejected_before_search() {
        let net = network(&[("1", "A", "B")]);
        let config = SearchConfig::default();
        let planner = Planner::new(&net, &config);

        let result = planner.search(&SearchRequest::new(station("A"), station("Z")));
        assert_eq!(result, Err(SearchError::UnknownStation(station("Z"))));

        let result = planner.search(&SearchRequest::new(station("Z"), station("A")));
        assert_eq!(result, Err(SearchError::UnknownStation(station("Z"))));
    }

    #[test]
    fn sink_station_just_stops_expanding() {
        // B has no outgoing segments; the search terminates by frontier
        // exhaustion.
        let net = network(&[("1", "A", "B")]);
        let result = search(&net, "A", "B");

        assert_eq!(result.cost, Some(1));
        assert_eq!(path_names(&result.paths[0]), vec!["A", "B"]);
    }

    #[test]
    fn cancelled_token_stops_the_search() {
        let net = network(&[("1", "A", "B")]);
        let config = SearchConfig::default();
        let planner = Planner::new(&net, &config);

        let cancel = CancelToken::new();
        cancel.cancel();
        let request = SearchRequest::with_cancel(station("A"), station("B"), cancel);

        assert_eq!(planner.search(&request), Err(SearchError::Cancelled));
    }

    #[test]
    fn frontier_budget_enforced() {
        let net = network(&[("1", "A", "B"), ("1", "B", "C"), ("1", "C", "D")]);
        let config = SearchConfig::new(1);
        let planner = Planner::new(&net, &config);

        let result = planner.search(&SearchRequest::new(station("A"), station("D")));
        assert_eq!(result, Err(SearchError::Budget(1)));
    }

    #[test]
    fn search_is_idempotent() {
        let net = network(&[
            ("1", "A", "B"),
            ("1", "B", "D"),
            ("2", "A", "C"),
            ("2", "C", "D"),
        ]);

        let first = search(&net, "A", "D");
        let second = search(&net, "A", "D");

        assert_eq!(first, second);
    }

    #[test]
    fn longer_route_loses_to_shorter() {
        // A->B->C->D on one line (cost 3) loses to direct-ish A->X->D on
        // another line (cost 2).
        let net = network(&[
            ("1", "A", "B"),
            ("1", "B", "C"),
            ("1", "C", "D"),
            ("2", "A", "X"),
            ("2", "X", "D"),
        ]);
        let result = search(&net, "A", "D");

        assert_eq!(result.cost, Some(2));
        assert_eq!(result.paths.len(), 1);
        assert_eq!(path_names(&result.paths[0]), vec!["A", "X", "D"]);
    }
}
