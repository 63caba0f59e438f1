//! Reference heuristic values on fixed state/goal pairs.

use tileswap_kernel::board::Board;
use tileswap_kernel::codec::parse_board;
use tileswap_search::heuristic::{raw_manhattan, Heuristic};

fn board(text: &str) -> Board {
    parse_board(text).expect("fixture board parses")
}

#[test]
fn three_by_three_reference_values() {
    let state = board("((1,2,3),(4,5,6),(7,8,9))");
    let goal = board("((2,1,3),(9,6,4),(7,8,5))");
    assert_eq!(Heuristic::Hamming.evaluate(&state, &goal), 6);
    assert_eq!(raw_manhattan(&state, &goal), 10);
    assert_eq!(Heuristic::AdjustedManhattan.evaluate(&state, &goal), 5);
    assert_eq!(Heuristic::SumPermutation.evaluate(&state, &goal), 10);
}

#[test]
fn two_by_two_reference_values() {
    let state = board("((1,2),(3,4))");
    let goal = board("((4,3),(1,2))");
    assert_eq!(Heuristic::Hamming.evaluate(&state, &goal), 4);
    assert_eq!(raw_manhattan(&state, &goal), 6);
    assert_eq!(Heuristic::AdjustedManhattan.evaluate(&state, &goal), 3);
    assert_eq!(Heuristic::SumPermutation.evaluate(&state, &goal), 5);
}

#[test]
fn every_heuristic_is_zero_at_the_goal() {
    for text in [
        "((1,2),(3,4))",
        "((2,1,3),(9,6,4),(7,8,5))",
        "((16,15,14,13),(12,11,10,9),(8,7,6,5),(4,3,2,1))",
    ] {
        let b = board(text);
        for h in Heuristic::ALL {
            assert_eq!(h.evaluate(&b, &b), 0, "{h} on {b}");
        }
    }
}

#[test]
fn only_adjusted_manhattan_is_monotonic() {
    let monotonic: Vec<Heuristic> = Heuristic::ALL
        .into_iter()
        .filter(|h| h.is_monotonic())
        .collect();
    assert_eq!(monotonic, vec![Heuristic::AdjustedManhattan]);
}
