//! Tuple-of-tuples text form of a board.
//!
//! One board per line, rows as parenthesised comma-separated integers:
//!
//! ```text
//! ((1, 2, 3), (4, 5, 6), (7, 8, 9))
//! ```
//!
//! The parser accepts a trailing newline, surrounding whitespace, square
//! brackets in place of parentheses, and a missing outer group
//! (`(1, 2), (3, 4)`). A row is any innermost group; values outside a row are
//! rejected.

use crate::board::{Board, ShapeError};

/// Error parsing the text form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The line contains no rows.
    Empty,
    /// A character that is not a digit, bracket, comma or whitespace.
    UnexpectedChar { ch: char, offset: usize },
    /// A number that does not fit in `u32`.
    InvalidNumber { token: String },
    /// Brackets do not balance.
    Unbalanced { offset: usize },
    /// A value appears outside any row group.
    ValueOutsideRow { offset: usize },
    /// The rows do not form a valid board.
    Shape(ShapeError),
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "no rows found"),
            Self::UnexpectedChar { ch, offset } => {
                write!(f, "unexpected character {ch:?} at offset {offset}")
            }
            Self::InvalidNumber { token } => write!(f, "invalid tile value: {token}"),
            Self::Unbalanced { offset } => write!(f, "unbalanced brackets at offset {offset}"),
            Self::ValueOutsideRow { offset } => {
                write!(f, "value outside a row group at offset {offset}")
            }
            Self::Shape(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Shape(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ShapeError> for ParseError {
    fn from(e: ShapeError) -> Self {
        Self::Shape(e)
    }
}

/// Extract the rows of a line without validating the board shape.
///
/// # Errors
///
/// Returns [`ParseError`] on malformed text.
pub fn parse_rows(line: &str) -> Result<Vec<Vec<u32>>, ParseError> {
    let mut rows: Vec<Vec<u32>> = Vec::new();
    let mut current: Option<Vec<u32>> = None;
    let mut token = String::new();
    let mut token_start = 0usize;
    // Closer expected for every open group, innermost last.
    let mut closers: Vec<char> = Vec::new();

    for (offset, ch) in line.char_indices() {
        match ch {
            '0'..='9' => {
                if token.is_empty() {
                    token_start = offset;
                }
                token.push(ch);
            }
            '(' | '[' => {
                flush(&mut token, token_start, current.as_mut())?;
                if current.as_ref().is_some_and(|row| !row.is_empty()) {
                    return Err(ParseError::ValueOutsideRow { offset });
                }
                closers.push(if ch == '(' { ')' } else { ']' });
                current = Some(Vec::new());
            }
            ')' | ']' => {
                flush(&mut token, token_start, current.as_mut())?;
                if closers.pop() != Some(ch) {
                    return Err(ParseError::Unbalanced { offset });
                }
                if let Some(row) = current.take() {
                    rows.push(row);
                }
            }
            ',' => flush(&mut token, token_start, current.as_mut())?,
            c if c.is_whitespace() => flush(&mut token, token_start, current.as_mut())?,
            ch => return Err(ParseError::UnexpectedChar { ch, offset }),
        }
    }
    flush(&mut token, token_start, current.as_mut())?;
    if !closers.is_empty() {
        return Err(ParseError::Unbalanced { offset: line.len() });
    }
    // `((1, 2), ())` style empty groups are not rows.
    rows.retain(|row| !row.is_empty());
    if rows.is_empty() {
        return Err(ParseError::Empty);
    }
    Ok(rows)
}

fn flush(token: &mut String, start: usize, row: Option<&mut Vec<u32>>) -> Result<(), ParseError> {
    if token.is_empty() {
        return Ok(());
    }
    let Some(row) = row else {
        return Err(ParseError::ValueOutsideRow { offset: start });
    };
    let value = token.parse::<u32>().map_err(|_| ParseError::InvalidNumber {
        token: token.clone(),
    })?;
    row.push(value);
    token.clear();
    Ok(())
}

/// Parse one line of the text form into a board.
///
/// # Errors
///
/// Returns [`ParseError`] on malformed text or an invalid board shape.
pub fn parse_board(line: &str) -> Result<Board, ParseError> {
    let rows = parse_rows(line)?;
    Ok(Board::new(&rows)?)
}

/// Render a board in the text form (no trailing newline).
#[must_use]
pub fn format_board(board: &Board) -> String {
    board.to_string()
}
