//! Synchronous cellular automaton.
//!
//! [`Automaton`] bundles a [`Grid`], the active [`RuleSet`] and a seeded
//! [`ChaCha8Rng`]. Each call to [`advance()`](Automaton::advance)
//! recomputes the rule's aggregates from the current generation, builds
//! the next generation in the grid's back buffer, and swaps it in.
//!
//! # Ownership model
//!
//! All mutating methods take `&mut self`, and [`grid()`](Automaton::grid)
//! borrows from `self`, so a caller can never observe a half-built
//! generation. No background threads are involved.

use std::time::Instant;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tessera_core::{CellReader, CellState, Generation, SeedError, Seeding, StateCounts};
use tessera_rules::{EpidemicStats, Rule, RuleSet};
use tessera_space::{Grid, SpaceError};
use tracing::{debug, info};

use crate::config::{AutomatonConfig, ConfigError};
use crate::metrics::StepMetrics;

// Compile-time assertion: Automaton can be moved to another thread.
const _: () = {
    #[allow(dead_code)]
    fn assert_send<T: Send>() {}
    #[allow(dead_code)]
    fn check() {
        assert_send::<Automaton>();
    }
};

/// Single-threaded cellular automaton.
///
/// Created from an [`AutomatonConfig`] via [`new()`](Automaton::new).
///
/// # Example
///
/// ```
/// use tessera_engine::{Automaton, AutomatonConfig};
/// use tessera_rules::RuleKind;
///
/// let config = AutomatonConfig {
///     width: 32,
///     height: 32,
///     seed: 7,
///     ..AutomatonConfig::for_rule(RuleKind::Covid7)
/// };
/// let mut automaton = Automaton::new(config)?;
/// automaton.advance_n(10);
/// assert_eq!(automaton.generation().0, 10);
/// let stats = automaton.epidemic_stats().unwrap();
/// assert!(stats.max_infected >= stats.currently_infected);
/// # Ok::<(), tessera_engine::ConfigError>(())
/// ```
pub struct Automaton {
    grid: Grid,
    rule: RuleSet,
    rng: ChaCha8Rng,
    config: AutomatonConfig,
    last_metrics: StepMetrics,
}

impl Automaton {
    /// Create and seed an automaton from an [`AutomatonConfig`].
    ///
    /// Validates the configuration, allocates the grid, and applies the
    /// configured [`Seeding`] with an RNG seeded from `config.seed`.
    pub fn new(config: AutomatonConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let rule = config.rule.build();
        let mut grid = Grid::new(config.width, config.height, rule.num_states(), config.edge)?;
        let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
        rule.seed(&mut grid, config.seeding, &mut rng)?;

        info!(
            width = config.width,
            height = config.height,
            rule = %config.rule,
            edge = ?config.edge,
            seed = config.seed,
            seeding = %config.seeding,
            "automaton created"
        );

        Ok(Self {
            grid,
            rule,
            rng,
            config,
            last_metrics: StepMetrics::default(),
        })
    }

    /// Wrap an already populated grid.
    ///
    /// The grid keeps its cells and generation. [`reset()`](Automaton::reset)
    /// on the result re-seeds uniformly.
    pub fn from_grid(grid: Grid, rule: RuleSet, seed: u64) -> Result<Self, ConfigError> {
        if grid.num_states() != rule.num_states() {
            return Err(ConfigError::StateCountMismatch {
                rule: rule.num_states(),
                grid: grid.num_states(),
            });
        }
        let config = AutomatonConfig {
            width: grid.width(),
            height: grid.height(),
            rule: rule.kind(),
            edge: grid.edge_behavior(),
            seed,
            seeding: Seeding::Uniform,
        };
        debug!(
            width = config.width,
            height = config.height,
            rule = %config.rule,
            "automaton wraps grid"
        );
        Ok(Self {
            grid,
            rule,
            rng: ChaCha8Rng::seed_from_u64(seed),
            config,
            last_metrics: StepMetrics::default(),
        })
    }

    /// Advance one generation.
    ///
    /// Rule aggregates are tallied from the current generation before
    /// any cell transitions, then every cell's next state is computed
    /// from the current generation only.
    pub fn advance(&mut self) -> StepMetrics {
        let start = Instant::now();
        self.rule.tally(&self.grid);

        let rule = &self.rule;
        let rng = &mut self.rng;
        let radius = rule.radius();
        let mut cells_changed = 0usize;
        self.grid.advance_with(|grid, x, y, state| {
            let counts = grid.count_neighborhood(x, y, radius);
            let next = rule.transition(state, &counts, &mut *rng);
            if next != state {
                cells_changed += 1;
            }
            next
        });

        let metrics = StepMetrics {
            total_us: start.elapsed().as_micros() as u64,
            cells_changed,
        };
        debug!(
            generation = %self.grid.generation(),
            cells_changed,
            elapsed_us = metrics.total_us,
            "generation advanced"
        );
        self.last_metrics = metrics;
        metrics
    }

    /// Advance `n` generations, returning the metrics of the last one
    /// (or the previous metrics if `n` is 0).
    pub fn advance_n(&mut self, n: u64) -> StepMetrics {
        for _ in 0..n {
            self.advance();
        }
        self.last_metrics
    }

    /// Assign every cell a uniformly random state.
    pub fn randomize_uniform(&mut self) {
        self.grid.randomize_uniform(&mut self.rng);
    }

    /// Re-seed the grid's cells in place.
    ///
    /// The generation counter and rule statistics are left untouched;
    /// use [`reset()`](Automaton::reset) for a fresh run.
    pub fn seed_with(&mut self, seeding: Seeding) -> Result<(), SeedError> {
        self.rule.seed(&mut self.grid, seeding, &mut self.rng)?;
        debug!(seeding = %seeding, "grid re-seeded");
        Ok(())
    }

    /// Restart at generation 0 with a new seed.
    ///
    /// Rebuilds the grid, clears rule statistics and metrics, reseeds the
    /// RNG and applies the configured seeding again.
    pub fn reset(&mut self, seed: u64) -> Result<(), ConfigError> {
        let mut grid = Grid::new(
            self.config.width,
            self.config.height,
            self.rule.num_states(),
            self.config.edge,
        )?;
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        self.rule.seed(&mut grid, self.config.seeding, &mut rng)?;

        self.rule.reset();
        self.grid = grid;
        self.rng = rng;
        self.config.seed = seed;
        self.last_metrics = StepMetrics::default();
        info!(seed, rule = %self.config.rule, "automaton reset");
        Ok(())
    }

    /// Write one cell. See [`Grid::set_cell`].
    pub fn set_cell(&mut self, x: i32, y: i32, state: CellState) -> Result<(), SpaceError> {
        self.grid.set_cell(x, y, state)
    }

    /// The grid holding the current generation.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The active rule.
    pub fn rule(&self) -> &RuleSet {
        &self.rule
    }

    /// The configuration this automaton runs with. `seed` reflects the
    /// latest [`reset()`](Automaton::reset).
    pub fn config(&self) -> &AutomatonConfig {
        &self.config
    }

    /// Grid columns.
    pub fn width(&self) -> u32 {
        self.grid.width()
    }

    /// Grid rows.
    pub fn height(&self) -> u32 {
        self.grid.height()
    }

    /// Number of cell states.
    pub fn num_states(&self) -> u8 {
        self.grid.num_states()
    }

    /// Current generation (0 after construction or reset).
    pub fn generation(&self) -> Generation {
        self.grid.generation()
    }

    /// State at `(x, y)` with the grid's edge handling.
    pub fn cell(&self, x: i32, y: i32) -> Option<CellState> {
        self.grid.cell(x, y)
    }

    /// Whole-grid state tally.
    pub fn state_histogram(&self) -> StateCounts {
        self.grid.state_histogram()
    }

    /// Epidemic statistics, when the epidemic rule is active.
    pub fn epidemic_stats(&self) -> Option<EpidemicStats> {
        self.rule.epidemic().map(|rule| rule.stats())
    }

    /// The current RNG seed.
    pub fn seed(&self) -> u64 {
        self.config.seed
    }

    /// Metrics from the most recent generation.
    pub fn last_metrics(&self) -> &StepMetrics {
        &self.last_metrics
    }
}

impl CellReader for Automaton {
    fn width(&self) -> u32 {
        self.grid.width()
    }

    fn height(&self) -> u32 {
        self.grid.height()
    }

    fn num_states(&self) -> u8 {
        self.grid.num_states()
    }

    fn generation(&self) -> Generation {
        self.grid.generation()
    }

    fn cell(&self, x: i32, y: i32) -> Option<CellState> {
        self.grid.cell(x, y)
    }
}

impl std::fmt::Debug for Automaton {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Automaton")
            .field("rule", &self.config.rule)
            .field("width", &self.grid.width())
            .field("height", &self.grid.height())
            .field("generation", &self.grid.generation())
            .field("seed", &self.config.seed)
            .finish()
    }
}
