//! Three-state stochastic process.

use rand::RngCore;
use tessera_core::{CellState, StateCounts};

use crate::escape::escape_transition;
use crate::rule::Rule;

/// Per-exposure probability of being pulled into each state, regardless
/// of the cell's current state.
pub const PULL_PROBABILITIES: [f64; 3] = [0.1, 0.5, 0.5];

/// A three-state rule where every state competes for its neighbours.
///
/// Unlike [`Covid7State`](crate::Covid7State) the probabilities depend only
/// on the target state. State 0 spreads weakly, states 1 and 2 strongly.
/// No state is absorbing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Stochastic3State;

impl Stochastic3State {
    /// Create the rule.
    pub fn new() -> Self {
        Self
    }
}

impl Rule for Stochastic3State {
    fn name(&self) -> &'static str {
        "stochastic3"
    }

    fn num_states(&self) -> u8 {
        3
    }

    fn transition(
        &self,
        state: CellState,
        counts: &StateCounts,
        rng: &mut dyn RngCore,
    ) -> CellState {
        escape_transition(state, counts, &PULL_PROBABILITIES, rng)
    }
}
