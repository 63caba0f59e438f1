//! tileswap search: A*, depth-first and iterative-deepening search over
//! swap-puzzle boards.
//!
//! Depends only on `tileswap_kernel`.
//!
//! # Crate dependency graph
//!
//! ```text
//! tileswap_kernel  ←  tileswap_search  ←  tileswap_harness
//! (board, codec)      (strategies)         (corpus, reports, runner)
//! ```
//!
//! # Key types
//!
//! - [`Heuristic`](heuristic::Heuristic): evaluator descriptor with a const
//!   monotonicity tag
//! - [`SearchNode`](node::SearchNode) / [`NodeArena`](node::NodeArena):
//!   nodes with parent indices
//! - [`OpenSet`](frontier::OpenSet): indexed heap with decrease-key
//! - [`SearchPolicy`](policy::SearchPolicy): time budget and depth limits
//! - [`SearchOutcome`](outcome::SearchOutcome): solved, exhausted or timed out
//! - [`Strategy`](search::Strategy) and [`solve`](search::solve)

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod astar;
pub mod budget;
pub mod dfs;
pub mod error;
pub mod expand;
pub mod frontier;
pub mod heuristic;
pub mod iddfs;
pub mod node;
pub mod outcome;
pub mod policy;
pub mod search;
pub mod trace;

pub use search::{solve, Strategy};
