//! Tileswap Harness: experiment orchestration around the search crate.
//!
//! The harness generates or loads puzzle corpora, runs every configured
//! strategy on every puzzle, writes per-puzzle reports and aggregates
//! statistics into `summary.json`.
//!
//! The harness does NOT implement search logic; it delegates to
//! `tileswap_search::solve`.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod corpus;
pub mod error;
pub mod generator;
pub mod report;
pub mod runner;
pub mod stats;

pub use config::RunConfig;
pub use error::{HarnessError, Result};
