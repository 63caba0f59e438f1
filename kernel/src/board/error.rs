//! Board construction errors.

/// Why a grid could not be turned into a [`Board`](crate::board::Board).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShapeError {
    /// The grid has no rows.
    Empty,
    /// A row's length differs from the number of rows.
    NotSquare {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// A value lies outside `1..=n²`.
    ValueOutOfRange { value: u32, max: u32 },
    /// A value appears more than once.
    DuplicateValue { value: u32 },
    /// The board side is too large for `u32` tile values.
    TooLarge { size: usize },
}

impl std::fmt::Display for ShapeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "board has no rows"),
            Self::NotSquare {
                row,
                expected,
                found,
            } => write!(
                f,
                "board is not square: row {row} has {found} cells, expected {expected}"
            ),
            Self::ValueOutOfRange { value, max } => {
                write!(f, "tile value {value} is outside 1..={max}")
            }
            Self::DuplicateValue { value } => write!(f, "tile value {value} appears twice"),
            Self::TooLarge { size } => write!(f, "board side {size} is too large"),
        }
    }
}

impl std::error::Error for ShapeError {}
