//! Search policy: time budget and depth limits.

use std::time::Duration;

use crate::error::SearchError;

/// Budget and depth configuration for one search call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchPolicy {
    /// Wall-clock budget for the whole call.
    pub time_limit: Duration,
    /// Depth cutoff for depth-first search (`None` = unbounded).
    pub depth_limit: Option<u32>,
    /// Largest depth limit tried by iterative deepening.
    pub depth_ceiling: u32,
}

impl SearchPolicy {
    /// Default time budget, in seconds.
    pub const DEFAULT_TIME_LIMIT_SECS: u64 = 60;
    /// Default iterative-deepening ceiling.
    pub const DEFAULT_DEPTH_CEILING: u32 = 100;

    /// Default policy with a time limit given in (fractional) seconds.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidTimeLimit`] if `secs` is negative,
    /// NaN, or too large.
    pub fn with_time_limit_secs(secs: f64) -> Result<Self, SearchError> {
        Ok(Self {
            time_limit: time_limit_from_secs(secs)?,
            ..Self::default()
        })
    }

    #[must_use]
    pub fn depth_limit(mut self, limit: Option<u32>) -> Self {
        self.depth_limit = limit;
        self
    }

    #[must_use]
    pub fn depth_ceiling(mut self, ceiling: u32) -> Self {
        self.depth_ceiling = ceiling;
        self
    }
}

impl Default for SearchPolicy {
    fn default() -> Self {
        Self {
            time_limit: Duration::from_secs(Self::DEFAULT_TIME_LIMIT_SECS),
            depth_limit: None,
            depth_ceiling: Self::DEFAULT_DEPTH_CEILING,
        }
    }
}

/// Convert seconds to a `Duration`, rejecting values a deadline can't hold.
///
/// # Errors
///
/// Returns [`SearchError::InvalidTimeLimit`] if `secs` is negative, NaN or
/// overflows `Duration`.
pub fn time_limit_from_secs(secs: f64) -> Result<Duration, SearchError> {
    Duration::try_from_secs_f64(secs).map_err(|e| SearchError::InvalidTimeLimit {
        detail: format!("{secs}: {e}"),
    })
}
