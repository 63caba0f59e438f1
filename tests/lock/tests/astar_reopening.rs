//! Duplicate handling of A* over a seeded corpus: non-monotonic heuristics
//! must both replace open entries and reopen closed boards, and a board is
//! only ever expanded again with a strictly smaller `f.total`.

use std::collections::HashMap;
use std::time::Duration;

use tileswap_harness::generator::random_corpus;
use tileswap_kernel::board::Board;
use tileswap_search::expand::successors;
use tileswap_search::heuristic::Heuristic;
use tileswap_search::policy::SearchPolicy;
use tileswap_search::search::{solve, Strategy};
use tileswap_search::trace::TraceEntry;

fn policy() -> SearchPolicy {
    SearchPolicy {
        time_limit: Duration::from_secs(600),
        ..SearchPolicy::default()
    }
}

fn assert_single_swap_chain(path: &[TraceEntry], start: &Board, goal: &Board) {
    assert_eq!(&path[0].board, start);
    assert_eq!(&path[path.len() - 1].board, goal);
    for (i, pair) in path.windows(2).enumerate() {
        assert_eq!(pair[1].depth, pair[0].depth + 1);
        assert!(
            successors(&pair[0].board).contains(&pair[1].board),
            "step {i} of the path from {start} is not a single swap"
        );
    }
}

#[test]
fn seeded_corpus_exercises_replace_and_reopen() {
    let goal = Board::ordered(3);
    let corpus = random_corpus(10, 3, Some(1)).unwrap();

    let (mut replaced, mut reopened, mut re_expanded) = (0u64, 0u64, 0usize);
    for heuristic in [Heuristic::SumPermutation, Heuristic::Hamming] {
        for start in &corpus {
            let outcome = solve(start, &goal, Strategy::AStar(heuristic), &policy()).unwrap();
            let s = outcome.solution().expect("A* solves every 3x3 board");
            replaced += s.trace.stats.replaced;
            reopened += s.trace.stats.reopened;

            let mut best: HashMap<&Board, u32> = HashMap::new();
            for entry in &s.trace.entries {
                if let Some(&previous) = best.get(&entry.board) {
                    assert!(
                        entry.f.total < previous,
                        "{heuristic}: {} re-expanded at f {} after f {previous}",
                        entry.board,
                        entry.f.total
                    );
                    re_expanded += 1;
                }
                best.insert(&entry.board, entry.f.total);
            }
            assert_single_swap_chain(&s.path, start, &goal);
        }
    }

    assert!(replaced > 0, "no open entry was ever replaced");
    assert!(reopened > 0, "no closed board was ever reopened");
    assert!(re_expanded > 0, "no reopened board was expanded again");
}

#[test]
fn consistent_heuristic_never_reopens_on_seeded_corpus() {
    let goal = Board::ordered(3);
    for start in random_corpus(10, 3, Some(1)).unwrap() {
        let outcome = solve(
            &start,
            &goal,
            Strategy::AStar(Heuristic::AdjustedManhattan),
            &policy(),
        )
        .unwrap();
        let s = outcome.solution().expect("A* solves every 3x3 board");
        assert_eq!(s.trace.stats.reopened, 0, "from {start}");
        assert_single_swap_chain(&s.path, &start, &goal);
    }
}
