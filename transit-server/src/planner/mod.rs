//! Path planning over the transit network.
//!
//! The planner answers: "what is the best route between two stations?"
//! where best means fewest stations traversed, and among routes tied on
//! that, fewest line changes. The search enumerates every minimum-cost
//! path; the selector then picks the one with the fewest transfers.

mod config;
mod search;
mod select;

pub use config::{CancelToken, SearchConfig};
pub use search::{Planner, SearchError, SearchRequest, SearchResult};
pub use select::{SelectError, select_best, transfer_count};

pub(crate) use select::best_segments;
