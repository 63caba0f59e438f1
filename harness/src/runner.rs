//! Experiment runner: every configured strategy on every puzzle.
//!
//! # Pipeline
//!
//! ```text
//! validate config → load or generate corpus → load or build goal
//!   → [solve → write reports → record stats] × strategies × puzzles
//!   → write summary.json
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use tileswap_kernel::board::Board;
use tileswap_search::policy::SearchPolicy;
use tileswap_search::search::{solve, Strategy};

use crate::config::RunConfig;
use crate::corpus::{read_corpus, read_goal, write_corpus, write_text};
use crate::error::{HarnessError, Result};
use crate::generator::{goal_board, random_corpus};
use crate::report::write_reports;
use crate::stats::StrategyStats;

/// File name of the run summary inside the output directory.
pub const SUMMARY_FILENAME: &str = "summary.json";

/// Aggregated results of a run, as written to `summary.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    pub size: usize,
    pub puzzles: usize,
    pub goal: String,
    pub strategies: Vec<StrategyStats>,
}

/// Load the corpus, or generate and persist one.
///
/// # Errors
///
/// Propagates corpus I/O and parse errors.
pub fn prepare_corpus(config: &RunConfig) -> Result<Vec<Board>> {
    if !config.regenerate && config.corpus.exists() {
        let boards = read_corpus(&config.corpus)?;
        info!(
            event = "corpus_loaded",
            path = %config.corpus.display(),
            puzzles = boards.len(),
        );
        return Ok(boards);
    }
    let boards = random_corpus(config.puzzles, config.size, config.seed)?;
    write_corpus(&config.corpus, &boards)?;
    info!(
        event = "corpus_generated",
        path = %config.corpus.display(),
        puzzles = boards.len(),
        size = config.size,
        seed = ?config.seed,
    );
    Ok(boards)
}

/// The configured goal file, or the ordered board of the corpus size.
///
/// # Errors
///
/// Propagates goal file errors.
pub fn prepare_goal(config: &RunConfig, size: usize) -> Result<Board> {
    match &config.goal {
        Some(path) => read_goal(path),
        None => Ok(goal_board(size)?),
    }
}

/// Run a whole experiment as described by `config`.
///
/// # Errors
///
/// Returns the first configuration, I/O or search error.
pub fn run(config: &RunConfig) -> Result<RunSummary> {
    config.validate()?;
    let policy = config.policy()?;
    let strategies = config.strategies()?;
    let puzzles = prepare_corpus(config)?;
    let size = puzzles.first().map_or(config.size, Board::size);
    let goal = prepare_goal(config, size)?;

    let stats = run_corpus(&puzzles, &goal, &strategies, &policy, &config.out_dir)?;
    let summary = RunSummary {
        size,
        puzzles: puzzles.len(),
        goal: goal.to_string(),
        strategies: stats,
    };
    write_summary(&config.out_dir, &summary)?;
    Ok(summary)
}

/// Solve every puzzle with every strategy, writing per-puzzle reports.
///
/// Puzzles are numbered from 1 in report file names. Sizes are checked
/// against the goal before anything is solved or written.
///
/// # Errors
///
/// Returns [`HarnessError::PuzzleSize`] if a puzzle's size differs from the
/// goal's, and [`HarnessError::Io`] if a report can't be written.
pub fn run_corpus(
    puzzles: &[Board],
    goal: &Board,
    strategies: &[Strategy],
    policy: &SearchPolicy,
    out_dir: &Path,
) -> Result<Vec<StrategyStats>> {
    check_corpus_sizes(puzzles, goal)?;
    let mut all = Vec::with_capacity(strategies.len());
    for &strategy in strategies {
        info!(event = "strategy_start", strategy = %strategy, puzzles = puzzles.len());
        let mut stats = StrategyStats::new(strategy);
        for (i, puzzle) in puzzles.iter().enumerate() {
            let index = i + 1;
            let outcome = solve(puzzle, goal, strategy, policy)?;
            match outcome.solution() {
                Some(s) => info!(
                    event = "puzzle_solved",
                    strategy = %strategy,
                    puzzle = index,
                    moves = s.moves(),
                    expansions = s.trace.len(),
                    elapsed = ?s.elapsed,
                ),
                None => warn!(
                    event = "puzzle_unsolved",
                    strategy = %strategy,
                    puzzle = index,
                    outcome = outcome.kind(),
                    elapsed = ?outcome.elapsed(),
                ),
            }
            write_reports(out_dir, strategy, index, &outcome)?;
            stats.record(&outcome);
        }
        info!(
            event = "strategy_end",
            strategy = %strategy,
            solved = stats.solved,
            unsolved = stats.unsolved(),
        );
        all.push(stats);
    }
    Ok(all)
}

fn check_corpus_sizes(puzzles: &[Board], goal: &Board) -> Result<()> {
    match puzzles.iter().position(|p| p.size() != goal.size()) {
        Some(i) => Err(HarnessError::PuzzleSize {
            index: i + 1,
            size: puzzles[i].size(),
            goal: goal.size(),
        }),
        None => Ok(()),
    }
}

/// Write `summary.json` under `out_dir`.
///
/// # Errors
///
/// Returns [`HarnessError::Json`] or [`HarnessError::Io`].
pub fn write_summary(out_dir: &Path, summary: &RunSummary) -> Result<()> {
    let mut text = serde_json::to_string_pretty(summary)?;
    text.push('\n');
    write_text(&out_dir.join(SUMMARY_FILENAME), &text)
}

/// Read a previously written summary.
///
/// # Errors
///
/// Returns [`HarnessError::Io`] or [`HarnessError::Json`].
pub fn read_summary(out_dir: &Path) -> Result<RunSummary> {
    let path = out_dir.join(SUMMARY_FILENAME);
    let text = std::fs::read_to_string(&path).map_err(HarnessError::io(&path))?;
    Ok(serde_json::from_str(&text)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::{report_paths, strategy_dir};
    use tileswap_search::heuristic::Heuristic;

    fn config(dir: &Path) -> RunConfig {
        RunConfig {
            puzzles: 3,
            size: 2,
            seed: Some(11),
            corpus: dir.join("puzzles.txt"),
            out_dir: dir.join("results"),
            time_limit_secs: 30.0,
            ..RunConfig::default()
        }
    }

    #[test]
    fn run_writes_corpus_reports_and_summary() {
        let dir = tempfile::tempdir().unwrap();
        let config = config(dir.path());
        let summary = run(&config).unwrap();

        assert_eq!(summary.puzzles, 3);
        assert_eq!(summary.goal, "((1, 2), (3, 4))");
        assert_eq!(summary.strategies.len(), Strategy::all().len());
        for stats in &summary.strategies {
            assert_eq!(stats.puzzles, 3);
            assert_eq!(stats.solved, 3, "{}", stats.strategy);
        }

        assert_eq!(read_corpus(&config.corpus).unwrap().len(), 3);
        for strategy in Strategy::all() {
            for index in 1..=3 {
                let (search, solution) = report_paths(&config.out_dir, strategy, index);
                assert!(search.exists(), "{}", search.display());
                assert!(solution.exists(), "{}", solution.display());
            }
        }
        let back = read_summary(&config.out_dir).unwrap();
        assert_eq!(back.goal, summary.goal);
        for (read, written) in back.strategies.iter().zip(&summary.strategies) {
            assert_eq!(read.strategy, written.strategy);
            assert_eq!(read.solution_length, written.solution_length);
        }
    }

    #[test]
    fn existing_corpus_reused_when_not_regenerating() {
        let dir = tempfile::tempdir().unwrap();
        let boards = vec![Board::new(&[[2u32, 1], [3, 4]]).unwrap()];
        let mut config = config(dir.path());
        write_corpus(&config.corpus, &boards).unwrap();
        config.regenerate = false;
        assert_eq!(prepare_corpus(&config).unwrap(), boards);

        config.regenerate = true;
        assert_eq!(prepare_corpus(&config).unwrap().len(), 3);
    }

    #[test]
    fn goal_file_overrides_ordered_goal() {
        let dir = tempfile::tempdir().unwrap();
        let goal_path = dir.path().join("goal.txt");
        let goal = Board::new(&[[4u32, 3], [2, 1]]).unwrap();
        crate::corpus::write_goal(&goal_path, &goal).unwrap();
        let config = RunConfig {
            goal: Some(goal_path),
            ..config(dir.path())
        };
        assert_eq!(prepare_goal(&config, 2).unwrap(), goal);
        assert_eq!(
            prepare_goal(&RunConfig::default(), 2).unwrap(),
            Board::ordered(2)
        );
    }

    #[test]
    fn size_mismatch_rejected_before_any_report() {
        let dir = tempfile::tempdir().unwrap();
        let strategy = Strategy::AStar(Heuristic::Hamming);
        let puzzles = [Board::new(&[[2u32, 1], [3, 4]]).unwrap(), Board::ordered(3)];
        let err = run_corpus(
            &puzzles,
            &Board::ordered(2),
            &[strategy],
            &SearchPolicy::default(),
            dir.path(),
        )
        .unwrap_err();
        assert!(
            matches!(err, HarnessError::PuzzleSize { index: 2, size: 3, goal: 2 }),
            "got {err:?}"
        );
        let (search, solution) = report_paths(dir.path(), strategy, 1);
        assert!(!search.exists());
        assert!(!solution.exists());
        assert!(!strategy_dir(dir.path(), strategy).exists());
    }
}
