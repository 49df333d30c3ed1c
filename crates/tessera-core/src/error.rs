//! Error types shared across the Tessera workspace.

use std::error::Error;
use std::fmt;

use crate::seeding::Seeding;

/// Errors from seeding a grid's initial state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SeedError {
    /// The active rule set has no meaning for this seeding mode.
    Unsupported {
        /// Name of the active rule set.
        rule: &'static str,
        /// The rejected seeding mode.
        seeding: Seeding,
    },
    /// An infection percentage above 100.
    InvalidPercent {
        /// The configured value.
        value: u8,
    },
    /// The grid's state count differs from the rule's.
    StateCountMismatch {
        /// Name of the active rule set.
        rule: &'static str,
        /// States the rule operates on.
        expected: u8,
        /// States the grid was built with.
        actual: u8,
    },
}

impl fmt::Display for SeedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unsupported { rule, seeding } => {
                write!(f, "rule '{rule}' does not support {seeding} seeding")
            }
            Self::InvalidPercent { value } => {
                write!(f, "percent infected must be in [0, 100], got {value}")
            }
            Self::StateCountMismatch {
                rule,
                expected,
                actual,
            } => write!(
                f,
                "rule '{rule}' needs a grid with {expected} states, got {actual}"
            ),
        }
    }
}

impl Error for SeedError {}
