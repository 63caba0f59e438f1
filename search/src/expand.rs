//! Successor generation shared by every strategy.

use tileswap_kernel::board::Board;

/// Every child board reachable by one swap, possibly with repeats.
///
/// Each tile except the largest initiates its neighbour swaps. The largest
/// tile's swaps are still produced by the neighbours it trades places with,
/// so no child is lost; pairs of other tiles appear twice, once per
/// initiator. Callers dedupe by board.
#[must_use]
pub fn successors(board: &Board) -> Vec<Board> {
    (1..board.max_value())
        .flat_map(|value| board.neighbor_states(value))
        .collect()
}
