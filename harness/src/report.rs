//! Per-puzzle report files.
//!
//! # Directory layout
//!
//! ```text
//! <out>/
//!   A_Star_manhattan/
//!     puzzle_1_search.txt     expanded boards in order, one `<board> <depth>` per line
//!     puzzle_1_solution.txt   root-to-goal path in the same format
//!   DFS/
//!   Iter_Deepening/
//! ```
//!
//! A report with nothing to list holds `no solution`. Both files end with an
//! `elapsed: <seconds>s` line.

use std::fmt::Write as _;
use std::path::{Path, PathBuf};
use std::time::Duration;

use tileswap_kernel::hash::ContentHash;
use tileswap_search::outcome::SearchOutcome;
use tileswap_search::search::Strategy;
use tileswap_search::trace::{SearchTrace, TraceEntry};

use crate::corpus::write_text;
use crate::error::Result;

const NO_SOLUTION: &str = "no solution";

/// Directory holding every report of `strategy`.
#[must_use]
pub fn strategy_dir(out_dir: &Path, strategy: Strategy) -> PathBuf {
    out_dir.join(strategy.to_string())
}

/// Paths of the search and solution reports for 1-based puzzle `index`.
#[must_use]
pub fn report_paths(out_dir: &Path, strategy: Strategy, index: usize) -> (PathBuf, PathBuf) {
    let dir = strategy_dir(out_dir, strategy);
    (
        dir.join(format!("puzzle_{index}_search.txt")),
        dir.join(format!("puzzle_{index}_solution.txt")),
    )
}

/// Expansion-order report.
#[must_use]
pub fn render_search_report(outcome: &SearchOutcome) -> String {
    render(outcome.trace().map(|t| t.entries.as_slice()), outcome.elapsed())
}

/// Solution-path report.
#[must_use]
pub fn render_solution_report(outcome: &SearchOutcome) -> String {
    render(
        outcome.solution().map(|s| s.path.as_slice()),
        outcome.elapsed(),
    )
}

fn render(entries: Option<&[TraceEntry]>, elapsed: Duration) -> String {
    let mut text = String::new();
    match entries {
        Some(entries) => {
            for e in entries {
                let _ = writeln!(text, "{} {}", e.board, e.depth);
            }
        }
        None => {
            text.push_str(NO_SOLUTION);
            text.push('\n');
        }
    }
    let _ = writeln!(text, "elapsed: {:.6}s", elapsed.as_secs_f64());
    text
}

/// Write both reports for one puzzle.
///
/// # Errors
///
/// Returns [`crate::error::HarnessError::Io`] if a file can't be written.
pub fn write_reports(
    out_dir: &Path,
    strategy: Strategy,
    index: usize,
    outcome: &SearchOutcome,
) -> Result<()> {
    let (search_path, solution_path) = report_paths(out_dir, strategy, index);
    write_text(&search_path, &render_search_report(outcome))?;
    write_text(&solution_path, &render_solution_report(outcome))
}

/// Write the canonical JSON form of `trace` and return its digest.
///
/// # Errors
///
/// Returns [`crate::error::HarnessError::Json`] or
/// [`crate::error::HarnessError::Io`].
pub fn write_trace_json(path: &Path, trace: &SearchTrace) -> Result<ContentHash> {
    let bytes = trace.to_canonical_json_bytes()?;
    let text = String::from_utf8_lossy(&bytes);
    write_text(path, &text)?;
    Ok(trace.digest()?)
}
