//! Per-strategy statistics over a corpus run.
//!
//! Lengths count nodes (a solution path of `k` moves has length `k + 1`).
//! Costs sum `g + h` over the nodes. Length, cost and time measures only
//! include solved puzzles.

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tileswap_search::outcome::SearchOutcome;
use tileswap_search::search::Strategy;

/// A running total with a sample count.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Measure {
    pub count: u64,
    pub total: f64,
}

impl Measure {
    pub fn record(&mut self, value: f64) {
        self.count += 1;
        self.total += value;
    }

    /// Mean of the recorded values, `None` before the first sample.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn average(&self) -> Option<f64> {
        (self.count > 0).then(|| self.total / self.count as f64)
    }
}

/// Aggregate results for one strategy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrategyStats {
    /// [`Strategy`] display name, e.g. `A_Star_manhattan`.
    pub strategy: String,
    pub puzzles: u64,
    pub solved: u64,
    pub no_solution: u64,
    pub timeouts: u64,
    pub solution_length: Measure,
    pub search_length: Measure,
    pub solution_cost: Measure,
    pub search_cost: Measure,
    pub execution_secs: Measure,
}

impl StrategyStats {
    #[must_use]
    pub fn new(strategy: Strategy) -> Self {
        Self {
            strategy: strategy.to_string(),
            puzzles: 0,
            solved: 0,
            no_solution: 0,
            timeouts: 0,
            solution_length: Measure::default(),
            search_length: Measure::default(),
            solution_cost: Measure::default(),
            search_cost: Measure::default(),
            execution_secs: Measure::default(),
        }
    }

    /// Fold one puzzle's outcome into the totals.
    #[allow(clippy::cast_precision_loss)]
    pub fn record(&mut self, outcome: &SearchOutcome) {
        self.puzzles += 1;
        match outcome {
            SearchOutcome::Solved(s) => {
                self.solved += 1;
                self.solution_length.record(s.path.len() as f64);
                self.search_length.record(s.trace.len() as f64);
                self.solution_cost.record(s.path_cost() as f64);
                self.search_cost.record(s.trace.total_cost() as f64);
                self.execution_secs.record(secs(s.elapsed));
            }
            SearchOutcome::NoSolution(_) => self.no_solution += 1,
            SearchOutcome::Timeout(_) => self.timeouts += 1,
        }
    }

    /// Puzzles that ended without a solution, for either reason.
    #[must_use]
    pub const fn unsolved(&self) -> u64 {
        self.no_solution + self.timeouts
    }
}

fn secs(d: Duration) -> f64 {
    d.as_secs_f64()
}

impl fmt::Display for StrategyStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} data", self.strategy)?;
        if self.solved > 0 {
            let rows = [
                ("length of solution path", &self.solution_length),
                ("length of search path", &self.search_length),
                ("cost of solution path", &self.solution_cost),
                ("cost of search path", &self.search_cost),
                ("execution time", &self.execution_secs),
            ];
            for (name, measure) in rows {
                writeln!(f, "Average {name}: {:.4}", measure.average().unwrap_or(0.0))?;
                writeln!(f, "Total {name}: {:.4}", measure.total)?;
            }
        }
        writeln!(f, "Solved: {}/{}", self.solved, self.puzzles)?;
        writeln!(f, "Total number of no solution: {}", self.no_solution)?;
        write!(f, "Total number of timeouts: {}", self.timeouts)
    }
}
