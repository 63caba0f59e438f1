//! Informed best-first search (A*).
//!
//! # Duplicate handling
//!
//! Open and closed are both keyed by board, and a board is never in both:
//!
//! - child board closed: reopened (moved back to open) only when the
//!   heuristic is non-monotonic and the child's f is strictly smaller;
//!   otherwise discarded
//! - child board open with a worse f: the open entry is replaced in place
//! - otherwise: inserted fresh
//!
//! With a consistent heuristic the first expansion of a board is already
//! optimal, so nothing is ever reopened.

use std::collections::HashMap;

use tracing::{debug, trace};

use tileswap_kernel::board::Board;

use crate::budget::Deadline;
use crate::error::SearchError;
use crate::expand::successors;
use crate::frontier::OpenSet;
use crate::heuristic::Heuristic;
use crate::node::{NodeArena, NodeId, SearchNode};
use crate::outcome::{Exhausted, SearchOutcome, Solution, TimedOut};
use crate::policy::SearchPolicy;
use crate::trace::{entries_for, SearchTrace, TraceStats};

/// Run A* from `start` towards `goal`.
///
/// Only `policy.time_limit` is consulted. The search loops while the best
/// open node is not the goal; reaching the goal, exhausting open, or running
/// out of time ends it.
///
/// # Errors
///
/// Returns [`SearchError::SizeMismatch`] if the boards differ in size.
#[allow(clippy::too_many_lines)]
pub fn search(
    start: &Board,
    goal: &Board,
    heuristic: Heuristic,
    policy: &SearchPolicy,
) -> Result<SearchOutcome, SearchError> {
    check_sizes(start, goal)?;
    let deadline = Deadline::start(policy.time_limit);
    debug!(
        event = "search_start",
        strategy = "A_Star",
        heuristic = heuristic.name(),
        size = start.size(),
    );

    let mut arena = NodeArena::new();
    let mut open: OpenSet<Board> = OpenSet::new();
    let mut closed: HashMap<Board, NodeId> = HashMap::new();
    let mut expanded: Vec<NodeId> = Vec::new();
    let mut stats = TraceStats::default();

    let root = arena.push(SearchNode::root(
        start.clone(),
        heuristic.evaluate(start, goal),
    ));
    open.push(start.clone(), root, arena[root].f);

    let goal_id = loop {
        let Some((best, _)) = open.peek() else {
            stats.frontier_high_water = open.high_water() as u64;
            let trace = SearchTrace::from_arena(&arena, &expanded, stats);
            let elapsed = deadline.elapsed();
            debug!(
                event = "search_end",
                outcome = "no_solution",
                expansions = trace.len(),
                elapsed = ?elapsed,
            );
            return Ok(SearchOutcome::NoSolution(Exhausted { trace, elapsed }));
        };
        if arena[best].board == *goal {
            break best;
        }

        if deadline.is_exceeded() {
            let elapsed = deadline.elapsed();
            debug!(
                event = "search_end",
                outcome = "timeout",
                expansions = expanded.len(),
                elapsed = ?elapsed,
            );
            return Ok(SearchOutcome::Timeout(TimedOut {
                elapsed,
                limit: deadline.limit(),
            }));
        }

        let Some((current_board, current)) = open.pop() else {
            continue;
        };
        let child_depth = arena[current].depth + 1;

        for child in successors(&current_board) {
            stats.generated += 1;
            let h = heuristic.evaluate(&child, goal);
            let node = SearchNode::child(child, current, child_depth, h);
            let f = node.f;

            if let Some(&closed_id) = closed.get(&node.board) {
                if !heuristic.is_monotonic() && f < arena[closed_id].f {
                    trace!(
                        event = "reopen",
                        depth = child_depth,
                        f = f.total,
                        previous_f = arena[closed_id].f.total,
                    );
                    closed.remove(&node.board);
                    let key = node.board.clone();
                    let id = arena.push(node);
                    open.push(key, id, f);
                    stats.reopened += 1;
                } else {
                    stats.duplicates_suppressed += 1;
                }
            } else if let Some((_, open_f)) = open.get(&node.board) {
                if f < open_f {
                    trace!(event = "replace", depth = child_depth, f = f.total);
                    let key = node.board.clone();
                    let id = arena.push(node);
                    open.replace(&key, id, f);
                    stats.replaced += 1;
                } else {
                    stats.duplicates_suppressed += 1;
                }
            } else {
                let key = node.board.clone();
                let id = arena.push(node);
                open.push(key, id, f);
            }
        }

        closed.insert(current_board, current);
        expanded.push(current);
    };

    expanded.push(goal_id);
    stats.frontier_high_water = open.high_water() as u64;
    let path = entries_for(&arena, &arena.path_to(goal_id));
    let trace = SearchTrace::from_arena(&arena, &expanded, stats);
    let elapsed = deadline.elapsed();
    debug!(
        event = "search_end",
        outcome = "solved",
        moves = path.len() - 1,
        expansions = trace.len(),
        reopened = stats.reopened,
        elapsed = ?elapsed,
    );
    Ok(SearchOutcome::Solved(Solution {
        path,
        trace,
        elapsed,
    }))
}

pub(crate) fn check_sizes(start: &Board, goal: &Board) -> Result<(), SearchError> {
    if start.size() == goal.size() {
        Ok(())
    } else {
        Err(SearchError::SizeMismatch {
            start: start.size(),
            goal: goal.size(),
        })
    }
}
