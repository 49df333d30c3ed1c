//! Initial-state seeding modes.

use std::fmt;

/// How a grid's cells are assigned before the first generation.
///
/// [`Uniform`](Seeding::Uniform) is valid for every rule set. The
/// remaining modes describe infection levels and are only meaningful for
/// the epidemic rule; other rules reject them with
/// [`SeedError::Unsupported`](crate::SeedError::Unsupported).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Seeding {
    /// Every cell independently takes a uniformly random valid state.
    #[default]
    Uniform,
    /// Each cell is infected with the given probability (percent, 0-100).
    PercentInfected(u8),
    /// Almost every cell starts healthy; 1% start infected.
    LowInfected,
    /// Almost every cell starts infected; 1% start healthy.
    HighInfected,
}

impl Seeding {
    /// Whether this mode only applies to the epidemic rule.
    pub fn is_epidemic(&self) -> bool {
        !matches!(self, Self::Uniform)
    }
}

impl fmt::Display for Seeding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Uniform => write!(f, "uniform"),
            Self::PercentInfected(p) => write!(f, "{p}% infected"),
            Self::LowInfected => write!(f, "low infected"),
            Self::HighInfected => write!(f, "high infected"),
        }
    }
}
