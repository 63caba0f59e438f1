//! Binary that runs fixed puzzles through every strategy and prints
//! deterministic output lines for cross-process verification.
//!
//! Usage: `search_fixture`
//!
//! Output: one `key=value` line per field, grouped per run. Elapsed times
//! are never printed.

use std::time::Duration;

use tileswap_kernel::codec::parse_board;
use tileswap_search::heuristic::Heuristic;
use tileswap_search::policy::SearchPolicy;
use tileswap_search::search::{solve, Strategy};

const FIXTURES: &[(&str, &str, &[Strategy])] = &[
    (
        "((2, 1, 3), (9, 6, 4), (7, 8, 5))",
        "((1, 2, 3), (4, 5, 6), (7, 8, 9))",
        &[
            Strategy::AStar(Heuristic::SumPermutation),
            Strategy::AStar(Heuristic::Hamming),
            Strategy::AStar(Heuristic::AdjustedManhattan),
        ],
    ),
    (
        "((4, 3), (2, 1))",
        "((1, 2), (3, 4))",
        &[
            Strategy::AStar(Heuristic::AdjustedManhattan),
            Strategy::DepthFirst,
            Strategy::IterativeDeepening,
        ],
    ),
];

fn main() {
    let policy = SearchPolicy {
        time_limit: Duration::from_secs(600),
        ..SearchPolicy::default()
    };
    for (start, goal, strategies) in FIXTURES {
        let start = parse_board(start).expect("fixture start parses");
        let goal = parse_board(goal).expect("fixture goal parses");
        for &strategy in *strategies {
            let outcome = solve(&start, &goal, strategy, &policy).expect("fixture search runs");
            let trace = outcome.trace().expect("fixture search does not time out");
            println!("run={strategy} start={start}");
            println!("outcome={}", outcome.kind());
            println!(
                "moves={}",
                outcome.solution().map_or(0, tileswap_search::outcome::Solution::moves)
            );
            println!("expansions={}", trace.len());
            println!("generated={}", trace.stats.generated);
            println!("reopened={}", trace.stats.reopened);
            println!(
                "trace_digest={}",
                trace.digest().expect("trace serialises")
            );
        }
    }
}
