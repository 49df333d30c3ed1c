//! Escape-probability transitions shared by the stochastic rules.
//!
//! Each neighbour in state `i` independently tries to pull the cell into
//! state `i`, succeeding with probability `p[i]`. The cell resists all
//! `count[i]` attempts with probability `q = (1 - p[i])^count[i]`.
//! Candidates are tried in increasing index order and the first one the
//! cell fails to escape wins.

use rand::{Rng, RngCore};
use tessera_core::{CellState, StateCounts};

/// Apply the escape rule with per-target infection probabilities.
///
/// One uniform draw is consumed per candidate state tried (every state
/// except `state`, up to and including the winner). Candidates beyond
/// `probs.len()` or `counts.len()` are not considered.
pub(crate) fn escape_transition(
    state: CellState,
    counts: &StateCounts,
    probs: &[f64],
    rng: &mut dyn RngCore,
) -> CellState {
    for (target, (&p, &count)) in probs.iter().zip(counts.iter()).enumerate() {
        if target == state as usize {
            continue;
        }
        let q = (1.0 - p).powi(count as i32);
        let r: f64 = rng.random();
        if q < r {
            return target as CellState;
        }
    }
    state
}
