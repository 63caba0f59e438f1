//! Strategy selection and the single dispatch entry point.

use std::str::FromStr;

use tileswap_kernel::board::Board;

use crate::error::SearchError;
use crate::heuristic::{Heuristic, UnknownHeuristic};
use crate::outcome::SearchOutcome;
use crate::policy::SearchPolicy;
use crate::{astar, dfs, iddfs};

/// A search algorithm, with its heuristic where it takes one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    AStar(Heuristic),
    DepthFirst,
    IterativeDeepening,
}

impl Strategy {
    /// Every strategy the experiment runner knows, A* once per heuristic.
    #[must_use]
    pub fn all() -> Vec<Self> {
        Heuristic::ALL
            .into_iter()
            .map(Self::AStar)
            .chain([Self::DepthFirst, Self::IterativeDeepening])
            .collect()
    }

    /// Algorithm label used for report directories.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::AStar(_) => "A_Star",
            Self::DepthFirst => "DFS",
            Self::IterativeDeepening => "Iter_Deepening",
        }
    }

    #[must_use]
    pub const fn heuristic(self) -> Option<Heuristic> {
        match self {
            Self::AStar(h) => Some(h),
            Self::DepthFirst | Self::IterativeDeepening => None,
        }
    }
}

/// `A_Star_<heuristic>` for A*, the bare label otherwise.
impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.heuristic() {
            Some(h) => write!(f, "{}_{h}", self.label()),
            None => f.write_str(self.label()),
        }
    }
}

/// Unrecognised strategy name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnknownStrategy {
    Name(String),
    Heuristic(UnknownHeuristic),
}

impl std::fmt::Display for UnknownStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Name(name) => write!(
                f,
                "unknown strategy {name:?} (expected A_Star_<heuristic>, DFS or Iter_Deepening)"
            ),
            Self::Heuristic(e) => e.fmt(f),
        }
    }
}

impl std::error::Error for UnknownStrategy {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Name(_) => None,
            Self::Heuristic(e) => Some(e),
        }
    }
}

/// Accepts the [`Display`](std::fmt::Display) form; case-insensitive.
/// `astar:<heuristic>`, `dfs` and `iddfs` are also accepted.
impl FromStr for Strategy {
    type Err = UnknownStrategy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        match lower.as_str() {
            "dfs" => return Ok(Self::DepthFirst),
            "iter_deepening" | "iddfs" => return Ok(Self::IterativeDeepening),
            _ => {}
        }
        let heuristic = lower
            .strip_prefix("a_star_")
            .or_else(|| lower.strip_prefix("astar:"))
            .ok_or_else(|| UnknownStrategy::Name(s.to_string()))?;
        heuristic
            .parse()
            .map(Self::AStar)
            .map_err(UnknownStrategy::Heuristic)
    }
}

/// Run `strategy` from `start` to `goal` under `policy`.
///
/// # Errors
///
/// Returns [`SearchError::SizeMismatch`] if the boards differ in size.
pub fn solve(
    start: &Board,
    goal: &Board,
    strategy: Strategy,
    policy: &SearchPolicy,
) -> Result<SearchOutcome, SearchError> {
    match strategy {
        Strategy::AStar(heuristic) => astar::search(start, goal, heuristic, policy),
        Strategy::DepthFirst => dfs::search(start, goal, policy),
        Strategy::IterativeDeepening => iddfs::search(start, goal, policy),
    }
}
