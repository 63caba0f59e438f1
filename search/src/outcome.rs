//! Terminal outcomes of a search call.

use std::time::Duration;

use crate::trace::{total_cost, SearchTrace, TraceEntry};

/// How a search that actually ran ended.
///
/// `Timeout` and `NoSolution` are distinct: the first means the budget ran
/// out, the second that the reachable space (within depth limits) was
/// exhausted.
#[derive(Debug, Clone)]
pub enum SearchOutcome {
    /// A goal node was reached.
    Solved(Solution),
    /// Open set / stack / depth limits exhausted without reaching the goal.
    NoSolution(Exhausted),
    /// The wall-clock budget ran out. No partial path is reported.
    Timeout(TimedOut),
}

/// A reconstructed root-to-goal path plus the expansion trace.
#[derive(Debug, Clone)]
pub struct Solution {
    /// Root first, goal last.
    pub path: Vec<TraceEntry>,
    pub trace: SearchTrace,
    pub elapsed: Duration,
}

impl Solution {
    /// Number of swaps on the path.
    #[must_use]
    pub fn moves(&self) -> usize {
        self.path.len().saturating_sub(1)
    }

    /// Σ of `g + h` over the path.
    #[must_use]
    pub fn path_cost(&self) -> u64 {
        total_cost(&self.path)
    }
}

/// The trace of an exhausted search.
#[derive(Debug, Clone)]
pub struct Exhausted {
    pub trace: SearchTrace,
    pub elapsed: Duration,
}

/// Budget exhaustion.
#[derive(Debug, Clone, Copy)]
pub struct TimedOut {
    pub elapsed: Duration,
    pub limit: Duration,
}

impl SearchOutcome {
    /// Stable tag used in logs and summaries.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Solved(_) => "solved",
            Self::NoSolution(_) => "no_solution",
            Self::Timeout(_) => "timeout",
        }
    }

    #[must_use]
    pub const fn is_solved(&self) -> bool {
        matches!(self, Self::Solved(_))
    }

    #[must_use]
    pub const fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout(_))
    }

    #[must_use]
    pub const fn solution(&self) -> Option<&Solution> {
        match self {
            Self::Solved(s) => Some(s),
            _ => None,
        }
    }

    /// The expansion trace, if the search ended with one.
    #[must_use]
    pub const fn trace(&self) -> Option<&SearchTrace> {
        match self {
            Self::Solved(s) => Some(&s.trace),
            Self::NoSolution(e) => Some(&e.trace),
            Self::Timeout(_) => None,
        }
    }

    #[must_use]
    pub const fn elapsed(&self) -> Duration {
        match self {
            Self::Solved(s) => s.elapsed,
            Self::NoSolution(e) => e.elapsed,
            Self::Timeout(t) => t.elapsed,
        }
    }
}
