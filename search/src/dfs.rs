//! Depth-first search, optionally depth-limited.
//!
//! Open is a LIFO stack, so the most recently pushed child is explored
//! first. A child is pushed only if its board is neither on the stack nor
//! already expanded. The first goal popped is returned whatever its depth.

use std::collections::HashSet;

use tracing::debug;

use tileswap_kernel::board::Board;

use crate::astar::check_sizes;
use crate::budget::Deadline;
use crate::error::SearchError;
use crate::expand::successors;
use crate::node::{NodeArena, NodeId, SearchNode};
use crate::outcome::{Exhausted, SearchOutcome, Solution, TimedOut};
use crate::policy::SearchPolicy;
use crate::trace::{entries_for, SearchTrace, TraceStats};

/// Run depth-first search with `policy.depth_limit` (unbounded by default).
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
        strategy = "DFS",
        size = start.size(),
        depth_limit = ?policy.depth_limit,
    );

    let outcome = match depth_limited(start, goal, policy.depth_limit, &deadline) {
        DfsRun::Found(solution) => SearchOutcome::Solved(solution),
        DfsRun::Exhausted(trace) => SearchOutcome::NoSolution(Exhausted {
            trace,
            elapsed: deadline.elapsed(),
        }),
        DfsRun::TimedOut => SearchOutcome::Timeout(TimedOut {
            elapsed: deadline.elapsed(),
            limit: deadline.limit(),
        }),
    };
    debug!(
        event = "search_end",
        outcome = outcome.kind(),
        expansions = outcome.trace().map_or(0, SearchTrace::len),
        elapsed = ?outcome.elapsed(),
    );
    Ok(outcome)
}

/// Result of one depth-limited pass, before elapsed time is attached.
#[derive(Debug)]
pub(crate) enum DfsRun {
    Found(Solution),
    Exhausted(SearchTrace),
    TimedOut,
}

/// One depth-first pass against an externally owned deadline.
///
/// Children are generated only for nodes with `depth < limit` (all nodes
/// when `limit` is `None`).
pub(crate) fn depth_limited(
    start: &Board,
    goal: &Board,
    limit: Option<u32>,
    deadline: &Deadline,
) -> DfsRun {
    let mut arena = NodeArena::new();
    let mut stack: Vec<NodeId> = Vec::new();
    let mut on_stack: HashSet<Board> = HashSet::new();
    let mut closed: HashSet<Board> = HashSet::new();
    let mut expanded: Vec<NodeId> = Vec::new();
    let mut stats = TraceStats::default();

    let root = arena.push(SearchNode::root(start.clone(), 0));
    stack.push(root);
    on_stack.insert(start.clone());

    while let Some(&top) = stack.last() {
        if deadline.is_exceeded() {
            return DfsRun::TimedOut;
        }
        stack.pop();
        let board = arena[top].board.clone();
        on_stack.remove(&board);
        expanded.push(top);

        if board == *goal {
            let path = entries_for(&arena, &arena.path_to(top));
            return DfsRun::Found(Solution {
                path,
                trace: SearchTrace::from_arena(&arena, &expanded, stats),
                elapsed: deadline.elapsed(),
            });
        }

        let depth = arena[top].depth;
        closed.insert(board);
        if limit.is_some_and(|l| depth >= l) {
            continue;
        }

        for child in successors(&arena[top].board) {
            stats.generated += 1;
            if closed.contains(&child) || on_stack.contains(&child) {
                stats.duplicates_suppressed += 1;
                continue;
            }
            on_stack.insert(child.clone());
            let id = arena.push(SearchNode::child(child, top, depth + 1, 0));
            stack.push(id);
        }
        stats.frontier_high_water = stats.frontier_high_water.max(stack.len() as u64);
    }

    DfsRun::Exhausted(SearchTrace::from_arena(&arena, &expanded, stats))
}
