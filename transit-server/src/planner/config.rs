//! Search configuration and cancellation.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Configuration parameters for path search.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Maximum number of frontier extractions per search.
    ///
    /// The frontier is bounded by stations times reachable cost levels,
    /// so on sane networks this is never hit; it exists to bound
    /// pathological inputs.
    pub max_pops: usize,
}

impl SearchConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(max_pops: usize) -> Self {
        Self { max_pops }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self { max_pops: 1_000_000 }
    }
}

/// A cheaply clonable cancellation flag for an in-flight search.
///
/// The search checks the token at every frontier extraction; once
/// cancelled, it stops with an error rather than returning partial
/// results.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
}

impl CancelToken {
    /// Create a new, un-cancelled token.
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation. Idempotent.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    /// Whether cancellation has been requested.
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }
}
