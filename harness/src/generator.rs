//! Random puzzle generation.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use tileswap_kernel::board::{Board, ShapeError};

/// A uniformly random `size`×`size` board.
///
/// # Errors
///
/// Returns [`ShapeError`] if `size` is zero or too large for a board.
pub fn random_board<R: Rng + ?Sized>(size: usize, rng: &mut R) -> Result<Board, ShapeError> {
    let mut cells = ordered_cells(size)?;
    cells.shuffle(rng);
    Board::from_cells(size, cells)
}

/// `count` random boards drawn from one RNG.
///
/// A `seed` makes the corpus reproducible; without one the RNG is seeded
/// from system entropy.
///
/// # Errors
///
/// Returns [`ShapeError`] if `size` is not a valid board side.
pub fn random_corpus(count: usize, size: usize, seed: Option<u64>) -> Result<Vec<Board>, ShapeError> {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    (0..count).map(|_| random_board(size, &mut rng)).collect()
}

/// The canonical goal: values `1..=n²` in reading order.
///
/// # Errors
///
/// Returns [`ShapeError`] if `size` is not a valid board side.
pub fn goal_board(size: usize) -> Result<Board, ShapeError> {
    Board::from_cells(size, ordered_cells(size)?)
}

fn ordered_cells(size: usize) -> Result<Vec<u32>, ShapeError> {
    let max = size
        .checked_mul(size)
        .and_then(|n| u32::try_from(n).ok())
        .ok_or(ShapeError::TooLarge { size })?;
    Ok((1..=max).collect())
}
