//! Closed set of built-in rules.

use std::error::Error;
use std::fmt;
use std::str::FromStr;

use rand::RngCore;
use tessera_core::{CellState, SeedError, Seeding, StateCounts};
use tessera_space::Grid;

use crate::covid7::Covid7State;
use crate::life::Life;
use crate::rule::Rule;
use crate::stochastic3::Stochastic3State;

/// Selects one of the built-in rules.
///
/// Parses from and displays as `life`, `covid7` or `stochastic3`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum RuleKind {
    /// [`Life`].
    Life,
    /// [`Covid7State`].
    #[default]
    Covid7,
    /// [`Stochastic3State`].
    Stochastic3,
}

impl RuleKind {
    /// Every built-in rule, in display order.
    pub const ALL: [RuleKind; 3] = [RuleKind::Life, RuleKind::Covid7, RuleKind::Stochastic3];

    /// Identifier used by `FromStr` and `Display`.
    pub fn as_str(self) -> &'static str {
        match self {
            RuleKind::Life => "life",
            RuleKind::Covid7 => "covid7",
            RuleKind::Stochastic3 => "stochastic3",
        }
    }

    /// Number of states the selected rule uses.
    pub fn num_states(self) -> u8 {
        match self {
            RuleKind::Life => 2,
            RuleKind::Covid7 => Covid7State::NUM_STATES,
            RuleKind::Stochastic3 => 3,
        }
    }

    /// Build a fresh rule of this kind.
    pub fn build(self) -> RuleSet {
        match self {
            RuleKind::Life => RuleSet::Life(Life::new()),
            RuleKind::Covid7 => RuleSet::Covid7(Covid7State::new()),
            RuleKind::Stochastic3 => RuleSet::Stochastic3(Stochastic3State::new()),
        }
    }
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RuleKind {
    type Err = ParseRuleKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RuleKind::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseRuleKindError {
                input: s.to_string(),
            })
    }
}

/// Error returned when a string names no built-in rule.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseRuleKindError {
    input: String,
}

impl fmt::Display for ParseRuleKindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown rule '{}' (expected life, covid7 or stochastic3)",
            self.input
        )
    }
}

impl Error for ParseRuleKindError {}

/// One of the built-in rules, with its state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RuleSet {
    /// Conway's Game of Life.
    Life(Life),
    /// Seven-state epidemic.
    Covid7(Covid7State),
    /// Three-state stochastic process.
    Stochastic3(Stochastic3State),
}

impl RuleSet {
    /// Which rule this is.
    pub fn kind(&self) -> RuleKind {
        match self {
            RuleSet::Life(_) => RuleKind::Life,
            RuleSet::Covid7(_) => RuleKind::Covid7,
            RuleSet::Stochastic3(_) => RuleKind::Stochastic3,
        }
    }

    /// The epidemic rule and its statistics, if that is the active rule.
    pub fn epidemic(&self) -> Option<&Covid7State> {
        match self {
            RuleSet::Covid7(rule) => Some(rule),
            _ => None,
        }
    }

    fn as_rule(&self) -> &dyn Rule {
        match self {
            RuleSet::Life(rule) => rule,
            RuleSet::Covid7(rule) => rule,
            RuleSet::Stochastic3(rule) => rule,
        }
    }

    fn as_rule_mut(&mut self) -> &mut dyn Rule {
        match self {
            RuleSet::Life(rule) => rule,
            RuleSet::Covid7(rule) => rule,
            RuleSet::Stochastic3(rule) => rule,
        }
    }
}

impl From<Life> for RuleSet {
    fn from(rule: Life) -> Self {
        RuleSet::Life(rule)
    }
}

impl From<Covid7State> for RuleSet {
    fn from(rule: Covid7State) -> Self {
        RuleSet::Covid7(rule)
    }
}

impl From<Stochastic3State> for RuleSet {
    fn from(rule: Stochastic3State) -> Self {
        RuleSet::Stochastic3(rule)
    }
}

impl From<RuleKind> for RuleSet {
    fn from(kind: RuleKind) -> Self {
        kind.build()
    }
}

impl Rule for RuleSet {
    fn name(&self) -> &'static str {
        self.as_rule().name()
    }

    fn num_states(&self) -> u8 {
        self.as_rule().num_states()
    }

    fn radius(&self) -> u32 {
        self.as_rule().radius()
    }

    fn tally(&mut self, grid: &Grid) {
        self.as_rule_mut().tally(grid);
    }

    fn reset(&mut self) {
        self.as_rule_mut().reset();
    }

    fn transition(
        &self,
        state: CellState,
        counts: &StateCounts,
        rng: &mut dyn RngCore,
    ) -> CellState {
        self.as_rule().transition(state, counts, rng)
    }

    fn seed(
        &self,
        grid: &mut Grid,
        seeding: Seeding,
        rng: &mut dyn RngCore,
    ) -> Result<(), SeedError> {
        self.as_rule().seed(grid, seeding, rng)
    }
}
