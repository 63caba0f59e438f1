//! Experiment configuration.
//!
//! Loaded from a JSON file; every field has a default, and a missing file
//! yields the default configuration.
//!
//! ```json
//! {
//!   "puzzles": 20,
//!   "size": 3,
//!   "seed": 42,
//!   "time_limit_secs": 60.0,
//!   "strategies": ["A_Star_manhattan", "Iter_Deepening"]
//! }
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tileswap_search::policy::SearchPolicy;
use tileswap_search::search::Strategy;

use crate::error::{HarnessError, Result};

/// Settings for one experiment run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RunConfig {
    /// Number of puzzles to generate.
    pub puzzles: usize,
    /// Board side `n`.
    pub size: usize,
    /// RNG seed for generation; `None` draws from system entropy.
    pub seed: Option<u64>,
    /// Corpus file, read if present and `regenerate` is false.
    pub corpus: PathBuf,
    /// Goal file; the ordered board when absent.
    pub goal: Option<PathBuf>,
    /// Generate a fresh corpus (and overwrite `corpus`) even if one exists.
    pub regenerate: bool,
    /// Report and summary directory.
    pub out_dir: PathBuf,
    pub time_limit_secs: f64,
    /// Depth cutoff for plain DFS.
    pub dfs_depth_limit: Option<u32>,
    /// Largest depth limit for iterative deepening.
    pub depth_ceiling: u32,
    /// Strategy display names, e.g. `A_Star_hamming`, `DFS`.
    pub strategies: Vec<String>,
}

impl Default for RunConfig {
    #[allow(clippy::cast_precision_loss)]
    fn default() -> Self {
        Self {
            puzzles: 20,
            size: 3,
            seed: None,
            corpus: PathBuf::from("puzzles.txt"),
            goal: None,
            regenerate: true,
            out_dir: PathBuf::from("results"),
            time_limit_secs: SearchPolicy::DEFAULT_TIME_LIMIT_SECS as f64,
            dfs_depth_limit: None,
            depth_ceiling: SearchPolicy::DEFAULT_DEPTH_CEILING,
            strategies: Strategy::all().iter().map(ToString::to_string).collect(),
        }
    }
}

impl RunConfig {
    /// Load from `path`, falling back to defaults if the file doesn't exist.
    ///
    /// # Errors
    ///
    /// Returns [`HarnessError::Io`] if the file exists but can't be read and
    /// [`HarnessError::Json`] if it isn't a valid configuration.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(text) => Self::from_json_str(&text),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(HarnessError::io(path)(e)),
        }
    }

    /// Parse a JSON configuration.
    ///
    /// # Errors
    ///
    /// Returns [`HarnessError::Json`] on malformed JSON or unknown fields.
    pub fn from_json_str(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }

    /// The search policy shared by every strategy.
    ///
    /// # Errors
    ///
    /// Returns [`HarnessError::Search`] if the time limit is invalid.
    pub fn policy(&self) -> Result<SearchPolicy> {
        Ok(SearchPolicy::with_time_limit_secs(self.time_limit_secs)?
            .depth_limit(self.dfs_depth_limit)
            .depth_ceiling(self.depth_ceiling))
    }

    /// Parsed strategy list.
    ///
    /// # Errors
    ///
    /// Returns [`HarnessError::Strategy`] for an unknown name and
    /// [`HarnessError::Config`] if the list is empty.
    pub fn strategies(&self) -> Result<Vec<Strategy>> {
        if self.strategies.is_empty() {
            return Err(HarnessError::Config("no strategies configured".into()));
        }
        self.strategies
            .iter()
            .map(|s| s.parse::<Strategy>().map_err(HarnessError::from))
            .collect()
    }

    /// Check the fields that have no type-level constraint.
    ///
    /// # Errors
    ///
    /// Returns the first problem found.
    pub fn validate(&self) -> Result<()> {
        if self.size == 0 {
            return Err(HarnessError::Config("size must be at least 1".into()));
        }
        if self.puzzles == 0 {
            return Err(HarnessError::Config("puzzles must be at least 1".into()));
        }
        self.policy()?;
        self.strategies()?;
        Ok(())
    }
}
