//! The [`Rule`] trait.
//!
//! Rules are per-cell transition functions applied to every cell of the
//! grid each generation. They see the previous generation only; the grid
//! double-buffers the results.

use rand::RngCore;
use tessera_core::{CellState, SeedError, Seeding, StateCounts};
use tessera_space::Grid;

/// A cellular automaton transition rule.
///
/// # Contract
///
/// - `transition()` returns a state in `[0, num_states())`.
/// - `transition()` takes `&self`: aggregate bookkeeping happens in
///   [`tally()`](Rule::tally), once per generation, before any cell
///   transitions.
/// - All randomness comes from the `rng` argument, so a seeded RNG
///   replays a run exactly.
///
/// # Object safety
///
/// This trait is object-safe; the RNG is passed as `&mut dyn RngCore`.
///
/// # Examples
///
/// A rule that copies the majority state of the neighbourhood:
///
/// ```
/// use rand::RngCore;
/// use tessera_core::{CellState, StateCounts};
/// use tessera_rules::Rule;
///
/// struct Majority;
///
/// impl Rule for Majority {
///     fn name(&self) -> &'static str { "majority" }
///
///     fn num_states(&self) -> u8 { 2 }
///
///     fn transition(
///         &self,
///         state: CellState,
///         counts: &StateCounts,
///         _rng: &mut dyn RngCore,
///     ) -> CellState {
///         if counts[1] > counts[0] { 1 } else if counts[0] > counts[1] { 0 } else { state }
///     }
/// }
///
/// let rule = Majority;
/// assert_eq!(rule.name(), "majority");
/// assert_eq!(rule.radius(), 1);
/// ```
pub trait Rule {
    /// Short lowercase identifier, used in logs and errors.
    fn name(&self) -> &'static str;

    /// Number of cell states this rule operates on.
    fn num_states(&self) -> u8;

    /// Neighbourhood radius passed to
    /// [`Grid::count_neighborhood`]. Default: 1 (the 3x3 Moore window).
    fn radius(&self) -> u32 {
        1
    }

    /// Recompute aggregate statistics from the generation about to be
    /// transitioned. Called once per generation before any
    /// [`transition()`](Rule::transition).
    ///
    /// Default: no statistics.
    fn tally(&mut self, _grid: &Grid) {}

    /// Clear any aggregate statistics, as for a freshly built rule.
    ///
    /// Default: nothing to clear.
    fn reset(&mut self) {}

    /// Next state of a cell.
    ///
    /// `counts` is the self-inclusive tally of the cell's neighbourhood:
    /// the cell's own state is counted once.
    fn transition(
        &self,
        state: CellState,
        counts: &StateCounts,
        rng: &mut dyn RngCore,
    ) -> CellState;

    /// Assign the grid's initial state.
    ///
    /// The default supports only [`Seeding::Uniform`]; rules with their
    /// own seeding modes override this.
    ///
    /// Fails with [`SeedError::StateCountMismatch`] if the grid does not
    /// have exactly [`num_states()`](Rule::num_states) states.
    fn seed(
        &self,
        grid: &mut Grid,
        seeding: Seeding,
        rng: &mut dyn RngCore,
    ) -> Result<(), SeedError> {
        check_state_count(self, grid)?;
        match seeding {
            Seeding::Uniform => {
                grid.randomize_uniform(rng);
                Ok(())
            }
            other => Err(SeedError::Unsupported {
                rule: self.name(),
                seeding: other,
            }),
        }
    }
}

/// Reject a grid whose state count differs from the rule's.
pub(crate) fn check_state_count<R: Rule + ?Sized>(rule: &R, grid: &Grid) -> Result<(), SeedError> {
    if grid.num_states() != rule.num_states() {
        return Err(SeedError::StateCountMismatch {
            rule: rule.name(),
            expected: rule.num_states(),
            actual: grid.num_states(),
        });
    }
    Ok(())
}
