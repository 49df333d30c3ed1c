//! Spatial edge (boundary) behavior for the 2D grid.

/// How a grid handles coordinates beyond its edges.
///
/// # Examples
///
/// ```
/// use tessera_space::{EdgeBehavior, Grid};
///
/// // Absorb: the corner's radius-1 window holds only 4 real cells.
/// let bounded = Grid::new(4, 4, 2, EdgeBehavior::Absorb).unwrap();
/// assert_eq!(bounded.neighborhood(0, 0, 1).flatten().count(), 4);
///
/// // Wrap: every window is complete (torus).
/// let torus = Grid::new(4, 4, 2, EdgeBehavior::Wrap).unwrap();
/// assert_eq!(torus.neighborhood(0, 0, 1).flatten().count(), 9);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum EdgeBehavior {
    /// Out-of-bounds coordinates wrap to the opposite side (periodic).
    #[default]
    Wrap,
    /// Out-of-bounds coordinates hold no cell and are skipped by counts.
    Absorb,
}

impl EdgeBehavior {
    /// `true` for [`Wrap`](EdgeBehavior::Wrap).
    pub fn is_toroidal(self) -> bool {
        self == Self::Wrap
    }
}
