//! Iterative deepening: depth-limited DFS for limits `0..=ceiling`.
//!
//! Every pass runs against the same deadline. Each pass starts from empty
//! visited sets; the first pass that reaches the goal ends the search.

use tracing::{debug, trace};

use tileswap_kernel::board::Board;

use crate::astar::check_sizes;
use crate::budget::Deadline;
use crate::dfs::{depth_limited, DfsRun};
use crate::error::SearchError;
use crate::outcome::{Exhausted, SearchOutcome, TimedOut};
use crate::policy::SearchPolicy;
use crate::trace::SearchTrace;

/// Run iterative deepening up to `policy.depth_ceiling`.
///
/// On exhaustion the trace of the final (deepest) pass is reported.
///
/// # Errors
///
/// Returns [`SearchError::SizeMismatch`] if the boards differ in size.
pub fn search(
    start: &Board,
    goal: &Board,
    policy: &SearchPolicy,
) -> Result<SearchOutcome, SearchError> {
    check_sizes(start, goal)?;
    let deadline = Deadline::start(policy.time_limit);
    debug!(
        event = "search_start",
        strategy = "Iter_Deepening",
        size = start.size(),
        depth_ceiling = policy.depth_ceiling,
    );

    let mut last_trace = SearchTrace::default();
    for limit in 0..=policy.depth_ceiling {
        if deadline.is_exceeded() {
            return Ok(timed_out(&deadline, limit));
        }
        match depth_limited(start, goal, Some(limit), &deadline) {
            DfsRun::Found(solution) => {
                debug!(
                    event = "search_end",
                    outcome = "solved",
                    depth_limit = limit,
                    moves = solution.moves(),
                    elapsed = ?solution.elapsed,
                );
                return Ok(SearchOutcome::Solved(solution));
            }
            DfsRun::Exhausted(trace) => {
                trace!(event = "deepen", depth_limit = limit, expansions = trace.len());
                last_trace = trace;
            }
            DfsRun::TimedOut => return Ok(timed_out(&deadline, limit)),
        }
    }

    let elapsed = deadline.elapsed();
    debug!(
        event = "search_end",
        outcome = "no_solution",
        depth_ceiling = policy.depth_ceiling,
        elapsed = ?elapsed,
    );
    Ok(SearchOutcome::NoSolution(Exhausted {
        trace: last_trace,
        elapsed,
    }))
}

fn timed_out(deadline: &Deadline, limit: u32) -> SearchOutcome {
    let elapsed = deadline.elapsed();
    debug!(
        event = "search_end",
        outcome = "timeout",
        depth_limit = limit,
        elapsed = ?elapsed,
    );
    SearchOutcome::Timeout(TimedOut {
        elapsed,
        limit: deadline.limit(),
    })
}
