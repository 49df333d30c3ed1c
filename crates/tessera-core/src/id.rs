//! Cell state aliases and the [`Generation`] counter.

use smallvec::SmallVec;
use std::fmt;

/// The state stored in a single grid cell.
///
/// Valid values for a grid lie in `[0, num_states)`. All built-in rule
/// sets use fewer than ten states, so a byte keeps an 800x800 grid in
/// well under a megabyte per buffer.
pub type CellState = u8;

/// Per-state occurrence counts, indexed by [`CellState`].
///
/// `counts[k]` is the number of cells in state `k`. Inline storage for
/// eight states avoids a heap allocation per neighbourhood query for
/// every built-in rule set; larger state spaces spill to the heap.
pub type StateCounts = SmallVec<[u32; 8]>;

/// Monotonically increasing generation counter.
///
/// Starts at 0 when a grid is created and is incremented exactly once
/// each time the grid advances one step.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Generation(pub u64);

impl Generation {
    /// The generation of a freshly constructed grid.
    pub const ZERO: Self = Self(0);

    /// The generation that follows this one.
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for Generation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl From<u64> for Generation {
    fn from(v: u64) -> Self {
        Self(v)
    }
}
