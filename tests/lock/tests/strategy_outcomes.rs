//! Terminal outcomes across every strategy: zero budget, start == goal,
//! optimality of the consistent heuristic.

use std::time::Duration;

use tileswap_kernel::board::{Board, Cell};
use tileswap_kernel::codec::parse_board;
use tileswap_search::heuristic::Heuristic;
use tileswap_search::outcome::SearchOutcome;
use tileswap_search::policy::SearchPolicy;
use tileswap_search::search::{solve, Strategy};

fn policy() -> SearchPolicy {
    SearchPolicy {
        time_limit: Duration::from_secs(120),
        ..SearchPolicy::default()
    }
}

#[test]
fn zero_time_limit_times_out_every_strategy() {
    let start = parse_board("((9, 8, 7), (6, 5, 4), (3, 2, 1))").unwrap();
    let goal = Board::ordered(3);
    let policy = SearchPolicy::with_time_limit_secs(0.0).unwrap();
    for strategy in Strategy::all() {
        let outcome = solve(&start, &goal, strategy, &policy).unwrap();
        match outcome {
            SearchOutcome::Timeout(t) => assert_eq!(t.limit, Duration::ZERO),
            other => panic!("{strategy}: expected timeout, got {}", other.kind()),
        }
    }
}

#[test]
fn start_equal_to_goal_is_a_single_node_path() {
    let board = parse_board("((2, 1, 3), (9, 6, 4), (7, 8, 5))").unwrap();
    for strategy in Strategy::all() {
        let outcome = solve(&board, &board, strategy, &policy()).unwrap();
        let solution = outcome.solution().unwrap_or_else(|| {
            panic!("{strategy}: expected solved, got {}", outcome.kind())
        });
        assert_eq!(solution.path.len(), 1, "{strategy}");
        assert_eq!(solution.path[0].depth, 0);
        assert_eq!(solution.path[0].board, board);
        assert_eq!(solution.path[0].f.h, 0);
    }
}

#[test]
fn iterative_deepening_agrees_with_consistent_astar_on_short_puzzles() {
    let goal = Board::ordered(3);
    let starts = [
        goal.swap_neighbor(Cell::new(0, 0), Cell::new(1, 0)),
        goal.swap_neighbor(Cell::new(0, 0), Cell::new(0, 1))
            .swap_neighbor(Cell::new(2, 2), Cell::new(1, 2)),
        goal.swap_neighbor(Cell::new(1, 1), Cell::new(1, 2))
            .swap_neighbor(Cell::new(1, 2), Cell::new(2, 2)),
    ];
    for start in &starts {
        let astar = solve(
            start,
            &goal,
            Strategy::AStar(Heuristic::AdjustedManhattan),
            &policy(),
        )
        .unwrap();
        let iddfs = solve(start, &goal, Strategy::IterativeDeepening, &policy()).unwrap();
        let a = astar.solution().expect("A* solves");
        let i = iddfs.solution().expect("iterative deepening solves");
        assert_eq!(a.moves(), i.moves(), "from {start}");
        assert_eq!(a.trace.stats.reopened, 0);
    }
}

#[test]
fn depth_first_solves_every_two_by_two_start() {
    let goal = Board::ordered(2);
    let mut seen = vec![goal.clone()];
    let mut i = 0;
    while i < seen.len() {
        for child in tileswap_search::expand::successors(&seen[i]) {
            if !seen.contains(&child) {
                seen.push(child);
            }
        }
        i += 1;
    }
    assert_eq!(seen.len(), 24);
    for start in &seen {
        let outcome = solve(start, &goal, Strategy::DepthFirst, &policy()).unwrap();
        let s = outcome.solution().expect("DFS terminates with a solution");
        assert_eq!(&s.path[0].board, start);
        assert_eq!(s.path[s.path.len() - 1].board, goal);
    }
}

#[test]
fn size_mismatch_is_rejected_before_searching() {
    for strategy in Strategy::all() {
        let err = solve(&Board::ordered(2), &Board::ordered(3), strategy, &policy()).unwrap_err();
        assert_eq!(
            err.to_string(),
            "start board is 2x2 but goal is 3x3",
            "{strategy}"
        );
    }
}
