//! Error types for the harness.

use std::path::PathBuf;

use thiserror::Error;
use tileswap_kernel::board::ShapeError;
use tileswap_kernel::codec::ParseError;
use tileswap_search::error::SearchError;
use tileswap_search::heuristic::UnknownHeuristic;
use tileswap_search::search::UnknownStrategy;

/// Failures while preparing, running or reporting an experiment.
#[derive(Debug, Error)]
pub enum HarnessError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A corpus or goal line that is not a valid board. Lines are 1-based.
    #[error("{path}:{line}: {source}")]
    Parse {
        path: PathBuf,
        line: usize,
        #[source]
        source: ParseError,
    },

    #[error("invalid board: {0}")]
    Shape(#[from] ShapeError),

    #[error("{path} contains no boards")]
    EmptyCorpus { path: PathBuf },

    #[error("{path} must hold exactly one board, found {count}")]
    GoalNotSingle { path: PathBuf, count: usize },

    /// A corpus puzzle whose size differs from the goal's. Puzzles are 1-based.
    #[error("puzzle {index} is {size}x{size} but the goal is {goal}x{goal}")]
    PuzzleSize {
        index: usize,
        size: usize,
        goal: usize,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error(transparent)]
    Strategy(#[from] UnknownStrategy),

    #[error(transparent)]
    Heuristic(#[from] UnknownHeuristic),

    #[error("search error: {0}")]
    Search(#[from] SearchError),
}

impl HarnessError {
    pub(crate) fn io(path: impl Into<PathBuf>) -> impl FnOnce(std::io::Error) -> Self {
        let path = path.into();
        move |source| Self::Io { path, source }
    }
}

/// Result alias for harness operations.
pub type Result<T> = std::result::Result<T, HarnessError>;
