//! Cellular automaton driver for Tessera.
//!
//! Provides [`Automaton`], which owns a grid, the active rule set and a
//! seeded RNG, and advances the whole grid one generation per call.
//! Construction goes through [`AutomatonConfig`], validated up front.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod automaton;
pub mod config;
pub mod metrics;

pub use automaton::Automaton;
pub use config::{AutomatonConfig, ConfigError};
pub use metrics::StepMetrics;
