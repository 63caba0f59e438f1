//! Corpus and goal files.
//!
//! A corpus file holds one board per line in the tuple text form; blank
//! lines are ignored. A goal file holds a single board.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use tileswap_kernel::board::Board;
use tileswap_kernel::codec::{format_board, parse_board};

use crate::error::{HarnessError, Result};

/// Parse every non-blank line of `text` as a board.
///
/// `path` is used only for error messages.
///
/// # Errors
///
/// Returns [`HarnessError::Parse`] with the 1-based line number of the
/// first malformed line.
pub fn parse_corpus(text: &str, path: &Path) -> Result<Vec<Board>> {
    text.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(i, line)| {
            parse_board(line).map_err(|source| HarnessError::Parse {
                path: path.to_path_buf(),
                line: i + 1,
                source,
            })
        })
        .collect()
}

/// Read a corpus file.
///
/// # Errors
///
/// Returns [`HarnessError::Io`] if the file can't be read,
/// [`HarnessError::Parse`] for a malformed line, and
/// [`HarnessError::EmptyCorpus`] if it holds no boards.
pub fn read_corpus(path: &Path) -> Result<Vec<Board>> {
    let text = fs::read_to_string(path).map_err(HarnessError::io(path))?;
    let boards = parse_corpus(&text, path)?;
    if boards.is_empty() {
        return Err(HarnessError::EmptyCorpus {
            path: path.to_path_buf(),
        });
    }
    Ok(boards)
}

/// Read a goal file, which must hold exactly one board.
///
/// # Errors
///
/// As for [`read_corpus`], plus [`HarnessError::GoalNotSingle`] when the
/// file holds more than one board.
pub fn read_goal(path: &Path) -> Result<Board> {
    let mut boards = read_corpus(path)?;
    if boards.len() != 1 {
        return Err(HarnessError::GoalNotSingle {
            path: path.to_path_buf(),
            count: boards.len(),
        });
    }
    Ok(boards.swap_remove(0))
}

/// Write `boards` one per line, creating parent directories.
///
/// # Errors
///
/// Returns [`HarnessError::Io`] if the file can't be written.
pub fn write_corpus(path: &Path, boards: &[Board]) -> Result<()> {
    let mut text = String::new();
    for board in boards {
        let _ = writeln!(text, "{}", format_board(board));
    }
    write_text(path, &text)
}

/// Write a single-line goal file.
///
/// # Errors
///
/// Returns [`HarnessError::Io`] if the file can't be written.
pub fn write_goal(path: &Path, goal: &Board) -> Result<()> {
    write_corpus(path, std::slice::from_ref(goal))
}

pub(crate) fn write_text(path: &Path, text: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(HarnessError::io(parent))?;
    }
    fs::write(path, text).map_err(HarnessError::io(path))
}
