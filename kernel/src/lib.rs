//! Tileswap Kernel: the board model of the tile-swap puzzle.
//!
//! # API Surface
//!
//! - [`board::Board`] -- immutable N×N permutation grid with an O(1) position index
//! - [`codec::parse_board`] / [`codec::format_board`] -- tuple-of-tuples text form
//! - [`hash::canonical_hash`] -- domain-separated SHA-256 content hashing
//!
//! # Module Dependency Direction
//!
//! `hash` ← `board` ← `codec`
//!
//! One-way only. `codec` builds boards; `board` uses `hash` for fingerprints.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod board;
pub mod codec;
pub mod hash;
