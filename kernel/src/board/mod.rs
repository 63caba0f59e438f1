//! Board module: cells, the immutable `Board`, and construction errors.
//!
//! This is the foundational layer. Nothing else in the kernel is imported
//! here except `hash` for fingerprints.

pub mod cell;
pub mod error;
pub mod state;

pub use cell::{Cell, Direction};
pub use error::ShapeError;
pub use state::Board;
