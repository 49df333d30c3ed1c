//! Benchmark profiles for the Tessera workspace.
//!
//! Provides pre-built [`AutomatonConfig`] profiles for benchmarking:
//!
//! - [`reference_profile`]: 100x100 grid (10K cells)
//! - [`stress_profile`]: 316x316 grid (~100K cells)
//! - [`original_profile`]: 800x800 grid, the size the desktop viewer ran at

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use tessera_core::Seeding;
use tessera_engine::AutomatonConfig;
use tessera_rules::RuleKind;
use tessera_space::EdgeBehavior;

fn square_profile(size: u32, rule: RuleKind, seed: u64) -> AutomatonConfig {
    AutomatonConfig {
        width: size,
        height: size,
        rule,
        edge: EdgeBehavior::Wrap,
        seed,
        seeding: Seeding::Uniform,
    }
}

/// Build a reference benchmark profile: 100x100 toroidal grid (10K cells),
/// uniformly seeded.
pub fn reference_profile(rule: RuleKind, seed: u64) -> AutomatonConfig {
    square_profile(100, rule, seed)
}

/// Build a stress benchmark profile: 316x316 grid (~100K cells).
///
/// Same shape as [`reference_profile`] at 10x the cell count.
pub fn stress_profile(rule: RuleKind, seed: u64) -> AutomatonConfig {
    square_profile(316, rule, seed)
}

/// Build the 800x800 profile (640K cells), the default grid size.
pub fn original_profile(rule: RuleKind, seed: u64) -> AutomatonConfig {
    square_profile(800, rule, seed)
}
