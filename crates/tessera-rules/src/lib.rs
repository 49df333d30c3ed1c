//! Transition rules for Tessera cellular automata.
//!
//! A rule maps a cell's current state and the state counts of its
//! square neighbourhood to the cell's next state. Three rule sets are
//! built in:
//!
//! 1. [`Life`]: Conway's Game of Life, deterministic, 2 states
//! 2. [`Covid7State`]: 7-state stochastic epidemic with aggregate statistics
//! 3. [`Stochastic3State`]: 3-state stochastic process
//!
//! The two stochastic rules share one transition scheme: every
//! neighbour in state `i` gets one independent chance, with probability
//! `p[i]`, to pull the cell into state `i`. Candidate states are tried in
//! index order and the first that fires wins.
//!
//! [`RuleSet`] is the closed enum the engine stores; it implements
//! [`Rule`] by dispatching to the active variant.

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod covid7;
mod escape;
pub mod life;
pub mod rule;
pub mod ruleset;
pub mod stochastic3;

pub use covid7::{Covid7State, EpidemicStats};
pub use life::Life;
pub use rule::Rule;
pub use ruleset::{ParseRuleKindError, RuleKind, RuleSet};
pub use stochastic3::Stochastic3State;
