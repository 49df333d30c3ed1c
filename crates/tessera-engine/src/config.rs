//! Automaton configuration, validation, and error types.
//!
//! [`AutomatonConfig`] is the input for constructing an
//! [`Automaton`](crate::Automaton). [`validate()`](AutomatonConfig::validate)
//! checks every invariant up front so construction never fails halfway.

use std::error::Error;
use std::fmt;

use tessera_core::{SeedError, Seeding};
use tessera_rules::RuleKind;
use tessera_space::{EdgeBehavior, Grid, SpaceError};

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected during [`AutomatonConfig::validate()`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// Grid dimensions are invalid.
    Grid(SpaceError),
    /// The seeding mode cannot be applied to the configured rule.
    Seed(SeedError),
    /// A supplied grid's state count does not match the rule's.
    StateCountMismatch {
        /// States the rule uses.
        rule: u8,
        /// States the grid was built with.
        grid: u8,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Grid(e) => write!(f, "grid: {e}"),
            Self::Seed(e) => write!(f, "seeding: {e}"),
            Self::StateCountMismatch { rule, grid } => {
                write!(f, "rule uses {rule} states but grid has {grid}")
            }
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
            Self::Seed(e) => Some(e),
            Self::StateCountMismatch { .. } => None,
        }
    }
}

impl From<SpaceError> for ConfigError {
    fn from(e: SpaceError) -> Self {
        Self::Grid(e)
    }
}

impl From<SeedError> for ConfigError {
    fn from(e: SeedError) -> Self {
        Self::Seed(e)
    }
}

// ── AutomatonConfig ────────────────────────────────────────────────

/// Complete configuration for constructing an automaton.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AutomatonConfig {
    /// Grid columns. Default: 800.
    pub width: u32,
    /// Grid rows. Default: 800.
    pub height: u32,
    /// Transition rule. Default: [`RuleKind::Covid7`].
    pub rule: RuleKind,
    /// Edge handling. Default: [`EdgeBehavior::Wrap`].
    pub edge: EdgeBehavior,
    /// RNG seed for seeding and stochastic transitions.
    pub seed: u64,
    /// Initial-state assignment applied at construction and reset.
    pub seeding: Seeding,
}

impl Default for AutomatonConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 800,
            rule: RuleKind::Covid7,
            edge: EdgeBehavior::Wrap,
            seed: 0,
            seeding: Seeding::Uniform,
        }
    }
}

impl AutomatonConfig {
    /// A default-sized configuration for `rule`.
    pub fn for_rule(rule: RuleKind) -> Self {
        Self {
            rule,
            ..Self::default()
        }
    }

    /// Validate all invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        // 1. Dimensions are non-zero and addressable with i32 coordinates.
        Grid::check_dimensions(self.width, self.height)?;
        // 2. Epidemic seedings need the epidemic rule.
        if self.seeding.is_epidemic() && self.rule != RuleKind::Covid7 {
            return Err(ConfigError::Seed(SeedError::Unsupported {
                rule: self.rule.as_str(),
                seeding: self.seeding,
            }));
        }
        // 3. Percentages are at most 100.
        if let Seeding::PercentInfected(value) = self.seeding {
            if value > 100 {
                return Err(ConfigError::Seed(SeedError::InvalidPercent { value }));
            }
        }
        Ok(())
    }
}
