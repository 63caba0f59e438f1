//! `tileswap`: generate puzzle corpora, run experiments, solve single boards.
//!
//! Logging goes to stderr and is filtered by `RUST_LOG` (default `info`).

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::error;
use tracing_subscriber::EnvFilter;

use tileswap_harness::config::RunConfig;
use tileswap_harness::corpus::{write_corpus, write_goal};
use tileswap_harness::error::{HarnessError, Result};
use tileswap_harness::generator::{goal_board, random_corpus};
use tileswap_harness::report::{render_search_report, render_solution_report, write_trace_json};
use tileswap_harness::runner::{run, SUMMARY_FILENAME};
use tileswap_kernel::codec::parse_board;
use tileswap_search::policy::SearchPolicy;
use tileswap_search::search::{solve, Strategy};

#[derive(Debug, Parser)]
#[command(name = "tileswap", version, about = "Tile-swap puzzle search experiments")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Write a random corpus and the ordered goal board.
    Generate {
        #[arg(long, default_value_t = 20)]
        count: usize,
        #[arg(long, default_value_t = 3)]
        size: usize,
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long, default_value = "puzzles.txt")]
        out: PathBuf,
        #[arg(long)]
        goal_out: Option<PathBuf>,
    },
    /// Run every configured strategy over a corpus.
    Run {
        /// JSON run configuration; defaults apply if the file is missing.
        #[arg(long, default_value = "tileswap.json")]
        config: PathBuf,
    },
    /// Solve one board and print the reports.
    Solve {
        /// Start board, e.g. "((2, 1, 3), (9, 6, 4), (7, 8, 5))".
        start: String,
        /// Goal board; the ordered board when omitted.
        #[arg(long)]
        goal: Option<String>,
        /// Strategy name, e.g. A_Star_manhattan, DFS, Iter_Deepening.
        #[arg(long, default_value = "A_Star_manhattan")]
        strategy: String,
        #[arg(long, default_value_t = 60.0)]
        time_limit: f64,
        #[arg(long)]
        depth_limit: Option<u32>,
        #[arg(long, default_value_t = SearchPolicy::DEFAULT_DEPTH_CEILING)]
        depth_ceiling: u32,
        /// Also write the canonical trace JSON here.
        #[arg(long)]
        trace: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    match execute(Cli::parse().command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(event = "command_failed", error = %e);
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn execute(command: Command) -> Result<()> {
    match command {
        Command::Generate {
            count,
            size,
            seed,
            out,
            goal_out,
        } => {
            write_corpus(&out, &random_corpus(count, size, seed)?)?;
            if let Some(goal_out) = goal_out {
                write_goal(&goal_out, &goal_board(size)?)?;
            }
            println!("wrote {count} puzzles to {}", out.display());
            Ok(())
        }
        Command::Run { config } => {
            let config = RunConfig::load(&config)?;
            let summary = run(&config)?;
            for stats in &summary.strategies {
                println!("{stats}\n");
            }
            println!(
                "summary written to {}",
                config.out_dir.join(SUMMARY_FILENAME).display()
            );
            Ok(())
        }
        Command::Solve {
            start,
            goal,
            strategy,
            time_limit,
            depth_limit,
            depth_ceiling,
            trace,
        } => {
            let start = parse_board(&start).map_err(|source| HarnessError::Parse {
                path: PathBuf::from("<start>"),
                line: 1,
                source,
            })?;
            let goal = match goal {
                Some(text) => parse_board(&text).map_err(|source| HarnessError::Parse {
                    path: PathBuf::from("<goal>"),
                    line: 1,
                    source,
                })?,
                None => goal_board(start.size())?,
            };
            let strategy: Strategy = strategy.parse()?;
            let policy = SearchPolicy::with_time_limit_secs(time_limit)?
                .depth_limit(depth_limit)
                .depth_ceiling(depth_ceiling);

            let outcome = solve(&start, &goal, strategy, &policy)?;
            println!("outcome: {}", outcome.kind());
            println!("-- search --\n{}", render_search_report(&outcome));
            println!("-- solution --\n{}", render_solution_report(&outcome));
            if let (Some(path), Some(t)) = (trace, outcome.trace()) {
                let digest = write_trace_json(&path, t)?;
                println!("trace written to {} ({digest})", path.display());
            }
            Ok(())
        }
    }
}
