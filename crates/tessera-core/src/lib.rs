//! Core types and traits for the Tessera cellular automaton engine.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the vocabulary shared by the grid, the rule engines and the driver:
//! cell state types, the generation counter, seeding modes, seeding
//! errors and the read-only [`CellReader`] trait.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod id;
pub mod seeding;
pub mod traits;

pub use error::SeedError;
pub use id::{CellState, Generation, StateCounts};
pub use seeding::Seeding;
pub use traits::CellReader;
