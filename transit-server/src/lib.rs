//! Transit route planner server.
//!
//! A web application that answers: "what is the route between two
//! stations with the fewest stations traversed, and among those, the
//! fewest line changes?"

pub mod domain;
pub mod network;
pub mod planner;
pub mod report;
pub mod web;
