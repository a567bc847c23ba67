//! Domain types for the transit route planner.
//!
//! This module contains the core domain model types that represent
//! validated network data. All types enforce their invariants at
//! construction time, so code that receives these types can trust their
//! validity.

mod error;
mod line;
mod path;
mod segment;
mod station;

pub use error::DomainError;
pub use line::{InvalidLineId, LineId};
pub use path::Path;
pub use segment::Segment;
pub use station::{InvalidStationId, Station, StationId};
