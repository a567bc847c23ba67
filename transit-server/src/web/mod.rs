//! Web layer for the transit route planner.
//!
//! Provides HTTP endpoints for listing stations and planning routes.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::create_router;
pub use state::AppState;
