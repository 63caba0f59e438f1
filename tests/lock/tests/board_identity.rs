//! Board identity, text codec and fingerprint stability.

use std::collections::HashSet;

use tileswap_harness::generator::random_corpus;
use tileswap_kernel::board::{Board, Cell};
use tileswap_kernel::codec::{format_board, parse_board};

#[test]
fn equal_contents_mean_equal_boards() {
    let direct = Board::new(&[[2u32, 1], [3, 4]]).unwrap();
    let swapped = Board::ordered(2).swap_neighbor(Cell::new(0, 0), Cell::new(0, 1));
    let parsed = parse_board("[[2, 1], [3, 4]]").unwrap();
    assert_eq!(direct, swapped);
    assert_eq!(direct, parsed);

    let set: HashSet<Board> = [direct, swapped, parsed].into_iter().collect();
    assert_eq!(set.len(), 1);
}

#[test]
fn display_form_round_trips() {
    for board in random_corpus(25, 4, Some(2024)).unwrap() {
        let text = format_board(&board);
        assert_eq!(parse_board(&text).unwrap(), board);
        assert_eq!(parse_board(&format!("  {text}\n")).unwrap(), board);
    }
}

#[test]
fn missing_outer_brackets_accepted() {
    assert_eq!(
        parse_board("(1, 2, 3), (4, 5, 6), (7, 8, 9)").unwrap(),
        Board::ordered(3)
    );
}

#[test]
fn fingerprint_tracks_contents_only() {
    let a = Board::ordered(3);
    let b = parse_board("((1, 2, 3), (4, 5, 6), (7, 8, 9))").unwrap();
    let c = a.swap_neighbor(Cell::new(2, 1), Cell::new(2, 2));
    assert_eq!(a.fingerprint(), b.fingerprint());
    assert_ne!(a.fingerprint(), c.fingerprint());
    assert!(a.fingerprint().as_str().starts_with("sha256:"));
}

#[test]
fn malformed_boards_rejected() {
    for text in [
        "",
        "((1, 2), (3))",
        "((1, 2), (2, 4))",
        "((1, 2), (3, 5))",
        "((1, 2), (3, x))",
    ] {
        assert!(parse_board(text).is_err(), "{text:?} should not parse");
    }
}
