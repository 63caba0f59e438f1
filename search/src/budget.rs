//! Wall-clock budget shared by every strategy.

use std::time::{Duration, Instant};

/// A hard deadline started at construction.
///
/// Checked once per pop (and once per depth limit in iterative deepening).
/// Exceeding it aborts the search with no partial result.
#[derive(Debug, Clone, Copy)]
pub struct Deadline {
    started: Instant,
    limit: Duration,
}

impl Deadline {
    /// Start the clock now.
    #[must_use]
    pub fn start(limit: Duration) -> Self {
        Self {
            started: Instant::now(),
            limit,
        }
    }

    /// Time since [`start`](Self::start).
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    #[must_use]
    pub const fn limit(&self) -> Duration {
        self.limit
    }

    /// Whether the budget is spent. A zero limit is spent immediately.
    #[must_use]
    pub fn is_exceeded(&self) -> bool {
        self.elapsed() >= self.limit
    }
}
