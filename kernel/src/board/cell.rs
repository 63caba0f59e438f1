//! `Cell`: a (row, col) coordinate on the board.
//!
//! Coordinates are signed so that off-board neighbours (row -1, col n) can be
//! represented and rejected by [`Board::is_legal`](crate::board::Board::is_legal)
//! instead of underflowing.

/// A grid coordinate. `(0, 0)` is the top-left cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    pub row: i32,
    pub col: i32,
}

impl Cell {
    #[must_use]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// The cell one step away in `direction`. May lie off the board.
    #[must_use]
    pub const fn step(self, direction: Direction) -> Self {
        let (dr, dc) = direction.offset();
        Self {
            row: self.row + dr,
            col: self.col + dc,
        }
    }

    /// `|Δrow| + |Δcol|` between two cells.
    #[must_use]
    pub const fn manhattan_to(self, other: Self) -> u32 {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Grid-adjacent directions, in neighbour enumeration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    /// All directions in the order neighbours are generated.
    pub const ALL: [Self; 4] = [Self::Up, Self::Right, Self::Down, Self::Left];

    /// `(Δrow, Δcol)` for one step.
    #[must_use]
    pub const fn offset(self) -> (i32, i32) {
        match self {
            Self::Up => (-1, 0),
            Self::Right => (0, 1),
            Self::Down => (1, 0),
            Self::Left => (0, -1),
        }
    }

    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}
