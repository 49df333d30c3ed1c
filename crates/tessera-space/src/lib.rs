//! Grid storage and neighbourhood queries for Tessera.
//!
//! This crate defines [`Grid`], the 2D cell store every rule set runs
//! on: fixed dimensions, a fixed state count, toroidal or bounded
//! addressing via [`EdgeBehavior`], square-window neighbourhood
//! extraction and counting, and the double-buffered
//! [`advance_with`](Grid::advance_with) step.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod edge;
pub mod error;
mod grid2d;
pub mod grid;

#[cfg(test)]
pub(crate) mod compliance;

pub use edge::EdgeBehavior;
pub use error::SpaceError;
pub use grid::Grid;
