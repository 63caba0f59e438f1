//! Typed search errors.
//!
//! `SearchError` represents pre-flight failures only. Terminal outcomes of a
//! search that actually ran (solved, exhausted, timed out) are values of
//! [`crate::outcome::SearchOutcome`].

/// Typed failure for pre-flight search validation.
///
/// These errors are returned before search execution begins. No trace is
/// produced because no node was expanded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// Start and goal boards have different sides.
    SizeMismatch { start: usize, goal: usize },
    /// A time limit that is negative, NaN or too large for a `Duration`.
    InvalidTimeLimit { detail: String },
}

impl std::fmt::Display for SearchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SizeMismatch { start, goal } => {
                write!(f, "start board is {start}x{start} but goal is {goal}x{goal}")
            }
            Self::InvalidTimeLimit { detail } => write!(f, "invalid time limit: {detail}"),
        }
    }
}

impl std::error::Error for SearchError {}
