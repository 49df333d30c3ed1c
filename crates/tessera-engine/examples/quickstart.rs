//! Tessera quickstart: a small epidemic run from scratch.
//!
//! Demonstrates:
//!   1. Building an AutomatonConfig for the epidemic rule
//!   2. Seeding with a fixed infection percentage
//!   3. Advancing and reading the aggregate statistics
//!   4. Resetting with a new seed
//!
//! Run with:
//!   cargo run --example quickstart

use tessera_core::Seeding;
use tessera_engine::{Automaton, AutomatonConfig, ConfigError};
use tessera_rules::RuleKind;
use tessera_space::EdgeBehavior;

const SIZE: u32 = 64;
const GENERATIONS: u64 = 40;

fn main() -> Result<(), ConfigError> {
    let config = AutomatonConfig {
        width: SIZE,
        height: SIZE,
        rule: RuleKind::Covid7,
        edge: EdgeBehavior::Wrap,
        seed: 42,
        seeding: Seeding::PercentInfected(5),
    };
    let mut automaton = Automaton::new(config)?;

    for _ in 0..GENERATIONS {
        let metrics = automaton.advance();
        if let Some(stats) = automaton.epidemic_stats() {
            println!(
                "generation {:>3}  infected {:>4}  max {:>4}  dead {:>3}%  changed {:>4}",
                automaton.generation(),
                stats.currently_infected,
                stats.max_infected,
                stats.percent_dead,
                metrics.cells_changed,
            );
        }
    }

    automaton.reset(7)?;
    println!(
        "reset: generation {}, seed {}",
        automaton.generation(),
        automaton.seed()
    );
    Ok(())
}
