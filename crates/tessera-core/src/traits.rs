//! Read-only access to automaton state.

use crate::id::{CellState, Generation};

/// Read-only view of a cellular automaton's current generation.
///
/// This is the whole query surface a renderer or UI needs: dimensions,
/// the state count (for palette sizing), the generation number and
/// per-cell lookups. It decouples consumers from the concrete grid and
/// engine types.
pub trait CellReader {
    /// Grid width (number of columns).
    fn width(&self) -> u32;

    /// Grid height (number of rows).
    fn height(&self) -> u32;

    /// Number of valid states; cells hold values in `[0, num_states)`.
    fn num_states(&self) -> u8;

    /// Number of generations advanced since construction.
    fn generation(&self) -> Generation;

    /// State at `(x, y)`, or `None` where no cell exists.
    ///
    /// Toroidal grids never return `None`; bounded grids return it for
    /// coordinates outside `[0, width) x [0, height)`.
    fn cell(&self, x: i32, y: i32) -> Option<CellState>;
}
