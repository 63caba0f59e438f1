//! Heuristic evaluators for the informed search.
//!
//! Each [`Heuristic`] variant pairs a pure evaluation function with a fixed
//! consistency tag. The tag is a property of the variant, never of a call:
//! A* reads it to decide whether closed nodes may be reopened.
//!
//! | Variant | Value | Monotonic |
//! |---|---|---|
//! | `Hamming` | cells whose values differ | no |
//! | `AdjustedManhattan` | Σ `|Δrow| + |Δcol|` over tiles, halved | yes |
//! | `SumPermutation` | pairs ordered one way in goal, the other in state | no |
//!
//! A swap moves exactly two tiles by one cell each, so the raw Manhattan sum
//! changes by at most 2 per move. Halving makes it change by at most 1, which
//! is what keeps `AdjustedManhattan` consistent under unit move cost. The raw
//! sum is always even, so the halving is exact.

use std::str::FromStr;

use tileswap_kernel::board::Board;

/// A heuristic descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Heuristic {
    Hamming,
    AdjustedManhattan,
    SumPermutation,
}

impl Heuristic {
    /// Every heuristic, in the order experiments run them.
    pub const ALL: [Self; 3] = [Self::SumPermutation, Self::Hamming, Self::AdjustedManhattan];

    /// Estimate of the remaining swaps from `state` to `goal`.
    ///
    /// # Panics
    ///
    /// Panics if the boards differ in size.
    #[must_use]
    pub fn evaluate(self, state: &Board, goal: &Board) -> u32 {
        match self {
            Self::Hamming => hamming(state, goal),
            Self::AdjustedManhattan => adjusted_manhattan(state, goal),
            Self::SumPermutation => sum_permutation(state, goal),
        }
    }

    /// Whether f never decreases along a path, making reopening unnecessary.
    #[must_use]
    pub const fn is_monotonic(self) -> bool {
        match self {
            Self::AdjustedManhattan => true,
            Self::Hamming | Self::SumPermutation => false,
        }
    }

    /// Stable name used in reports and configuration.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Hamming => "hamming",
            Self::AdjustedManhattan => "manhattan",
            Self::SumPermutation => "sum_permutation",
        }
    }
}

impl std::fmt::Display for Heuristic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Unrecognised heuristic name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownHeuristic(pub String);

impl std::fmt::Display for UnknownHeuristic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unknown heuristic {:?} (expected hamming, manhattan or sum_permutation)",
            self.0
        )
    }
}

impl std::error::Error for UnknownHeuristic {}

impl FromStr for Heuristic {
    type Err = UnknownHeuristic;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "hamming" | "hamming_distance" => Ok(Self::Hamming),
            "manhattan" | "manhattan_distance" => Ok(Self::AdjustedManhattan),
            "sum_permutation" => Ok(Self::SumPermutation),
            other => Err(UnknownHeuristic(other.to_string())),
        }
    }
}

fn assert_same_size(state: &Board, goal: &Board) {
    assert_eq!(
        state.size(),
        goal.size(),
        "heuristic evaluated across board sizes"
    );
}

/// Number of cells where `state` and `goal` hold different values.
///
/// # Panics
///
/// Panics if the boards differ in size.
#[must_use]
pub fn hamming(state: &Board, goal: &Board) -> u32 {
    assert_same_size(state, goal);
    let differing = state
        .cells()
        .iter()
        .zip(goal.cells())
        .filter(|(s, g)| s != g)
        .count();
    u32::try_from(differing).unwrap_or(u32::MAX)
}

/// Σ over every tile of the Manhattan distance between its cell in `state`
/// and its cell in `goal`.
///
/// # Panics
///
/// Panics if the boards differ in size.
#[must_use]
pub fn raw_manhattan(state: &Board, goal: &Board) -> u32 {
    assert_same_size(state, goal);
    (1..=state.max_value())
        .filter_map(|value| Some(state.position_of(value)?.manhattan_to(goal.position_of(value)?)))
        .sum()
}

/// [`raw_manhattan`] divided by 2.
///
/// # Panics
///
/// Panics if the boards differ in size.
#[must_use]
pub fn adjusted_manhattan(state: &Board, goal: &Board) -> u32 {
    raw_manhattan(state, goal) / 2
}

/// Count of value pairs `(u, v)` where `u` precedes `v` in the goal's
/// reading order but follows it in the state's.
///
/// # Panics
///
/// Panics if the boards differ in size.
#[must_use]
pub fn sum_permutation(state: &Board, goal: &Board) -> u32 {
    assert_same_size(state, goal);
    // Reading-order index of every value in `state`.
    let mut state_index = vec![0usize; state.cells().len() + 1];
    for (index, &value) in state.cells().iter().enumerate() {
        state_index[value as usize] = index;
    }

    let goal_cells = goal.cells();
    let mut inversions = 0u32;
    for (i, &value) in goal_cells.iter().enumerate() {
        let here = state_index[value as usize];
        for &earlier in &goal_cells[..i] {
            if state_index[earlier as usize] > here {
                inversions += 1;
            }
        }
    }
    inversions
}
