//! `Board`: immutable N×N grid holding a permutation of `1..=n²`.
//!
//! # Equality semantics
//!
//! `Eq` and `Hash` cover the cell contents only. The position index is
//! derived data and two boards reached along different paths compare equal
//! whenever their cells match.

use std::hash::{Hash, Hasher};

use crate::board::cell::{Cell, Direction};
use crate::board::error::ShapeError;
use crate::hash::{canonical_hash, ContentHash, DOMAIN_BOARD};

/// An immutable board snapshot.
///
/// Construct via [`Board::new`] (validated) or [`Board::ordered`]. Every move
/// produces a new `Board`; nothing mutates one in place.
#[derive(Clone)]
pub struct Board {
    size: usize,
    /// Row-major cell values.
    cells: Vec<u32>,
    /// `positions[v - 1]` is the cell holding value `v`.
    positions: Vec<Cell>,
}

impl Board {
    /// Build a board from its rows.
    ///
    /// # Errors
    ///
    /// Returns [`ShapeError`] if the grid is empty, not square, or not a
    /// permutation of `1..=n²`.
    pub fn new<R: AsRef<[u32]>>(rows: &[R]) -> Result<Self, ShapeError> {
        let size = rows.len();
        if size == 0 {
            return Err(ShapeError::Empty);
        }
        let mut cells = Vec::with_capacity(size * size);
        for (row, values) in rows.iter().enumerate() {
            let values = values.as_ref();
            if values.len() != size {
                return Err(ShapeError::NotSquare {
                    row,
                    expected: size,
                    found: values.len(),
                });
            }
            cells.extend_from_slice(values);
        }
        Self::from_cells(size, cells)
    }

    /// Build a board from row-major cells.
    ///
    /// # Errors
    ///
    /// Returns [`ShapeError`] if `cells.len() != size²` or the cells are not
    /// a permutation of `1..=size²`.
    pub fn from_cells(size: usize, cells: Vec<u32>) -> Result<Self, ShapeError> {
        if size == 0 {
            return Err(ShapeError::Empty);
        }
        if cells.len() != size * size {
            return Err(ShapeError::NotSquare {
                row: cells.len() / size,
                expected: size,
                found: cells.len() % size,
            });
        }
        let side = i32::try_from(size).map_err(|_| ShapeError::TooLarge { size })?;
        let max = u32::try_from(cells.len()).map_err(|_| ShapeError::TooLarge { size })?;

        let placeholder = Cell::new(-1, -1);
        let mut positions = vec![placeholder; cells.len()];
        for (index, &value) in cells.iter().enumerate() {
            if value == 0 || value > max {
                return Err(ShapeError::ValueOutOfRange { value, max });
            }
            let slot = &mut positions[value as usize - 1];
            if *slot != placeholder {
                return Err(ShapeError::DuplicateValue { value });
            }
            // index < size², so both quotient and remainder fit in `side`.
            #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
            let (row, col) = ((index / size) as i32, (index % size) as i32);
            debug_assert!(row < side && col < side);
            *slot = Cell::new(row, col);
        }

        Ok(Self {
            size,
            cells,
            positions,
        })
    }

    /// The ordered board: `1..=n²` in reading order.
    ///
    /// # Panics
    ///
    /// Panics if `size` is 0 or `size²` does not fit in `u32`.
    #[must_use]
    pub fn ordered(size: usize) -> Self {
        let max = u32::try_from(size * size).expect("board side too large");
        Self::from_cells(size, (1..=max).collect()).expect("ordered cells form a permutation")
    }

    /// Side length `n`.
    #[must_use]
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Largest tile value, `n²`.
    #[must_use]
    pub fn max_value(&self) -> u32 {
        // Validated on construction.
        #[allow(clippy::cast_possible_truncation)]
        let max = self.cells.len() as u32;
        max
    }

    /// Row-major cell values.
    #[must_use]
    pub fn cells(&self) -> &[u32] {
        &self.cells
    }

    /// Iterate over rows.
    pub fn rows(&self) -> impl Iterator<Item = &[u32]> {
        self.cells.chunks(self.size)
    }

    /// The cell holding `value`, or `None` if `value` is not on the board.
    #[must_use]
    pub fn position_of(&self, value: u32) -> Option<Cell> {
        if value == 0 {
            return None;
        }
        self.positions.get(value as usize - 1).copied()
    }

    /// The value at `cell`, or `None` if `cell` is off the board.
    #[must_use]
    pub fn value_at(&self, cell: Cell) -> Option<u32> {
        self.index_of(cell).map(|i| self.cells[i])
    }

    /// Whether `cell` lies within `[0, n)²`.
    #[must_use]
    pub fn is_legal(&self, cell: Cell) -> bool {
        self.index_of(cell).is_some()
    }

    /// A new board with the contents of `a` and `b` exchanged.
    ///
    /// # Panics
    ///
    /// Panics if either cell is off the board.
    #[must_use]
    pub fn swap_neighbor(&self, a: Cell, b: Cell) -> Self {
        let (Some(ia), Some(ib)) = (self.index_of(a), self.index_of(b)) else {
            panic!("swap_neighbor on illegal cell: {a} <-> {b} (size {})", self.size);
        };
        let mut next = self.clone();
        next.cells.swap(ia, ib);
        let (va, vb) = (next.cells[ia], next.cells[ib]);
        next.positions[va as usize - 1] = a;
        next.positions[vb as usize - 1] = b;
        next
    }

    /// One child board per legal neighbour of the cell holding `value`.
    ///
    /// Neighbours are visited up, right, down, left. Any tile may initiate a
    /// swap, so the same child can be produced from either tile of a pair.
    /// Returns an empty list if `value` is not on the board.
    #[must_use]
    pub fn neighbor_states(&self, value: u32) -> Vec<Self> {
        let Some(origin) = self.position_of(value) else {
            return Vec::new();
        };
        Direction::ALL
            .iter()
            .map(|&dir| origin.step(dir))
            .filter(|&cell| self.is_legal(cell))
            .map(|cell| self.swap_neighbor(origin, cell))
            .collect()
    }

    /// Little-endian `u32` encoding of the size followed by every cell.
    #[must_use]
    pub fn identity_bytes(&self) -> Vec<u8> {
        #[allow(clippy::cast_possible_truncation)]
        let size = self.size as u32;
        let mut bytes = Vec::with_capacity(4 * (self.cells.len() + 1));
        bytes.extend_from_slice(&size.to_le_bytes());
        for value in &self.cells {
            bytes.extend_from_slice(&value.to_le_bytes());
        }
        bytes
    }

    /// Domain-separated content hash of [`identity_bytes`](Self::identity_bytes).
    #[must_use]
    pub fn fingerprint(&self) -> ContentHash {
        canonical_hash(DOMAIN_BOARD, &self.identity_bytes())
    }

    fn index_of(&self, cell: Cell) -> Option<usize> {
        let row = usize::try_from(cell.row).ok()?;
        let col = usize::try_from(cell.col).ok()?;
        (row < self.size && col < self.size).then_some(row * self.size + col)
    }
}

impl PartialEq for Board {
    fn eq(&self, other: &Self) -> bool {
        self.cells == other.cells
    }
}

impl Eq for Board {}

impl Hash for Board {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.cells.hash(state);
    }
}

impl std::fmt::Display for Board {
    /// Tuple-of-tuples text form: `((1, 2), (3, 4))`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("(")?;
        for (r, row) in self.rows().enumerate() {
            if r > 0 {
                f.write_str(", ")?;
            }
            f.write_str("(")?;
            for (c, value) in row.iter().enumerate() {
                if c > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{value}")?;
            }
            if row.len() == 1 {
                // Singleton rows keep a trailing comma: `(1,)`.
                f.write_str(",")?;
            }
            f.write_str(")")?;
        }
        f.write_str(")")
    }
}

impl std::fmt::Debug for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Board{self}")
    }
}
