//! Tessera: discrete-time, discrete-state cellular automata on 2D grids.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all Tessera sub-crates. For most users, adding `tessera` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use tessera::prelude::*;
//!
//! let config = AutomatonConfig {
//!     width: 16,
//!     height: 16,
//!     rule: RuleKind::Life,
//!     edge: EdgeBehavior::Wrap,
//!     seed: 42,
//!     seeding: Seeding::Uniform,
//! };
//! let mut automaton = Automaton::new(config).unwrap();
//! automaton.advance();
//! assert_eq!(automaton.generation(), Generation(1));
//! assert!(automaton.epidemic_stats().is_none());
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `tessera-core` | Cell states, generation ids, seeding modes, `CellReader` |
//! | [`space`] | `tessera-space` | `Grid`, edge handling, neighbourhood queries |
//! | [`rules`] | `tessera-rules` | `Rule` trait and the built-in rule sets |
//! | [`engine`] | `tessera-engine` | `Automaton`, configuration, step metrics |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types and traits (`tessera-core`).
pub use tessera_core as types;

/// Grid storage and neighbourhood queries (`tessera-space`).
///
/// Provides [`space::Grid`] and [`space::EdgeBehavior`].
pub use tessera_space as space;

/// Transition rules (`tessera-rules`).
///
/// The [`rules::Rule`] trait is the extension point for custom rules;
/// [`rules::RuleSet`] holds one of the built-ins.
pub use tessera_rules as rules;

/// The automaton driver (`tessera-engine`).
pub use tessera_engine as engine;

/// Common imports for typical Tessera usage.
///
/// ```rust
/// use tessera::prelude::*;
/// ```
pub mod prelude {
    // Core types and traits
    pub use tessera_core::{CellReader, CellState, Generation, Seeding, StateCounts};

    // Errors
    pub use tessera_core::SeedError;
    pub use tessera_engine::ConfigError;
    pub use tessera_space::SpaceError;

    // Space
    pub use tessera_space::{EdgeBehavior, Grid};

    // Rules
    pub use tessera_rules::{
        Covid7State, EpidemicStats, Life, Rule, RuleKind, RuleSet, Stochastic3State,
    };

    // Engine
    pub use tessera_engine::{Automaton, AutomatonConfig, StepMetrics};
}
