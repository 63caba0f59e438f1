//! Shared fixtures for tileswap benchmark suites.

use std::time::Duration;

use tileswap_harness::generator::random_corpus;
use tileswap_kernel::board::Board;
use tileswap_kernel::codec::parse_board;
use tileswap_search::policy::SearchPolicy;

/// A named start/goal pair.
pub struct Regime {
    pub name: &'static str,
    pub start: Board,
    pub goal: Board,
}

/// Fixed puzzles of increasing difficulty.
///
/// # Panics
///
/// Panics if a fixture board fails to parse. Benchmark setup failures are
/// fatal.
#[must_use]
pub fn regimes() -> Vec<Regime> {
    let fixed = [
        ("two_by_two_reversed", "((4, 3), (2, 1))"),
        ("three_by_three_scenario", "((2, 1, 3), (9, 6, 4), (7, 8, 5))"),
        ("three_by_three_scrambled", "((5, 1, 3), (9, 2, 7), (4, 8, 6))"),
    ];
    fixed
        .into_iter()
        .map(|(name, text)| {
            let start = parse_board(text).expect("fixture parses");
            let goal = Board::ordered(start.size());
            Regime { name, start, goal }
        })
        .collect()
}

/// Seeded random boards for throughput measurements.
///
/// # Panics
///
/// Panics if `size` is not a valid board side.
#[must_use]
pub fn sample_boards(count: usize, size: usize) -> Vec<Board> {
    random_corpus(count, size, Some(0x5eed)).expect("valid board size")
}

/// A policy generous enough that benchmarks never time out.
#[must_use]
pub fn bench_policy() -> SearchPolicy {
    SearchPolicy {
        time_limit: Duration::from_secs(600),
        ..SearchPolicy::default()
    }
}
