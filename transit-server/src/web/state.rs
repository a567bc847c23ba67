//! Application state for the web layer.

use std::sync::Arc;

use crate::network::Network;
use crate::planner::SearchConfig;

/// Shared application state.
///
/// The network is read-only after construction, so handlers can run
/// searches against it concurrently without locking.
#[derive(Clone)]
pub struct AppState {
    /// The loaded transit network
    pub network: Arc<Network>,

    /// Planner configuration
    pub config: Arc<SearchConfig>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(network: Network, config: SearchConfig) -> Self {
        Self {
            network: Arc::new(network),
            config: Arc::new(config),
        }
    }
}
