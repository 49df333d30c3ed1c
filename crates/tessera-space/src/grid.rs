//! The 2D cell grid: storage, addressing and neighbourhood queries.

use crate::edge::EdgeBehavior;
use crate::error::SpaceError;
use crate::grid2d;
use rand::Rng;
use smallvec::smallvec;
use tessera_core::{CellReader, CellState, Generation, StateCounts};

/// A fixed-size rectangular grid of cell states.
///
/// Cells are addressed as `(x, y)` with `x` the column in `[0, width)`
/// and `y` the row in `[0, height)`, stored row-major. The grid owns two
/// buffers: the published generation and a back buffer that
/// [`advance_with`](Grid::advance_with) fills before swapping, so a
/// transition never observes a partially updated generation.
///
/// Boundary handling is controlled by [`EdgeBehavior`]:
/// - **Wrap**: coordinates are reduced modulo the dimension (torus)
/// - **Absorb**: coordinates outside the grid hold no cell (`None`)
#[derive(Clone)]
pub struct Grid {
    width: u32,
    height: u32,
    num_states: u8,
    edge: EdgeBehavior,
    cells: Vec<CellState>,
    back: Vec<CellState>,
    generation: Generation,
}

impl Grid {
    /// Create a `width * height` grid with every cell in state 0.
    ///
    /// Returns `Err(SpaceError::EmptySpace)` if either dimension is 0,
    /// `Err(SpaceError::NoStates)` if `num_states` is 0, or
    /// `Err(SpaceError::DimensionTooLarge)` if either dimension exceeds
    /// `i32::MAX`.
    pub fn new(
        width: u32,
        height: u32,
        num_states: u8,
        edge: EdgeBehavior,
    ) -> Result<Self, SpaceError> {
        Self::check_dimensions(width, height)?;
        if num_states == 0 {
            return Err(SpaceError::NoStates);
        }
        let len = (width as usize) * (height as usize);
        Ok(Self {
            width,
            height,
            num_states,
            edge,
            cells: vec![0; len],
            back: Vec::with_capacity(len),
            generation: Generation::ZERO,
        })
    }

    /// Check that `width x height` is a constructible grid size without
    /// allocating one.
    pub fn check_dimensions(width: u32, height: u32) -> Result<(), SpaceError> {
        if width == 0 || height == 0 {
            return Err(SpaceError::EmptySpace);
        }
        grid2d::check_dim("width", width)?;
        grid2d::check_dim("height", height)
    }

    /// Create a grid from an explicit row-major cell buffer.
    ///
    /// The buffer must hold exactly `width * height` valid states.
    pub fn from_states(
        width: u32,
        height: u32,
        num_states: u8,
        edge: EdgeBehavior,
        cells: Vec<CellState>,
    ) -> Result<Self, SpaceError> {
        let mut grid = Self::new(width, height, num_states, edge)?;
        if cells.len() != grid.cells.len() {
            return Err(SpaceError::BufferSizeMismatch {
                expected: grid.cells.len(),
                actual: cells.len(),
            });
        }
        if let Some(&state) = cells.iter().find(|&&s| s >= num_states) {
            return Err(SpaceError::InvalidState { state, num_states });
        }
        grid.cells = cells;
        Ok(grid)
    }

    /// Number of columns.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of valid states.
    pub fn num_states(&self) -> u8 {
        self.num_states
    }

    /// Generations advanced since construction.
    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// Edge behavior.
    pub fn edge_behavior(&self) -> EdgeBehavior {
        self.edge
    }

    /// Whether coordinates wrap around the edges.
    pub fn is_toroidal(&self) -> bool {
        self.edge.is_toroidal()
    }

    /// Total number of cells (`width * height`).
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// The current generation as a row-major slice.
    pub fn cells(&self) -> &[CellState] {
        &self.cells
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// State at `(x, y)`.
    ///
    /// On a toroidal grid any integer coordinate is valid and is reduced
    /// into range, so `cell(x, y) == cell(x + k * width, y + m * height)`.
    /// On a bounded grid coordinates outside the grid return `None`.
    #[inline]
    pub fn cell(&self, x: i32, y: i32) -> Option<CellState> {
        self.cell_wide(i64::from(x), i64::from(y))
    }

    #[inline]
    fn cell_wide(&self, x: i64, y: i64) -> Option<CellState> {
        let x = grid2d::resolve_axis(x, self.width, self.edge)?;
        let y = grid2d::resolve_axis(y, self.height, self.edge)?;
        Some(self.cells[self.index(x, y)])
    }

    /// Write `state` at `(x, y)`.
    ///
    /// No wrap correction is applied: the coordinate must lie inside the
    /// grid, and the state must be below [`num_states`](Grid::num_states).
    /// Nothing is written on error.
    pub fn set_cell(&mut self, x: i32, y: i32, state: CellState) -> Result<(), SpaceError> {
        let idx = grid2d::check_2d_bounds(x, y, self.width, self.height)?;
        if state >= self.num_states {
            return Err(SpaceError::InvalidState {
                state,
                num_states: self.num_states,
            });
        }
        self.cells[idx] = state;
        Ok(())
    }

    /// Assign every cell an independent, uniformly random state.
    pub fn randomize_uniform<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let n = self.num_states;
        for cell in self.cells.iter_mut() {
            *cell = rng.random_range(0..n);
        }
    }

    /// Overwrite every cell in place, row-major, with `f(x, y)`.
    ///
    /// Used for seeding; the generation counter is unchanged.
    ///
    /// # Panics
    ///
    /// Panics if `f` returns a state outside `[0, num_states)`.
    pub fn fill_with<F>(&mut self, mut f: F)
    where
        F: FnMut(u32, u32) -> CellState,
    {
        let (width, num_states) = (self.width, self.num_states);
        for (i, cell) in self.cells.iter_mut().enumerate() {
            let x = (i % width as usize) as u32;
            let y = (i / width as usize) as u32;
            let state = f(x, y);
            assert!(
                state < num_states,
                "fill_with produced state {state} at ({x}, {y}), expected < {num_states}"
            );
            *cell = state;
        }
    }

    /// Cell values in the square window of the given radius centered
    /// at `(x, y)`, in row-major order.
    ///
    /// Always yields `(2 * radius + 1)^2` items, for every `i32` center
    /// and every `u32` radius. Positions with no cell (bounded grids
    /// only) yield `None`.
    pub fn neighborhood(
        &self,
        x: i32,
        y: i32,
        radius: u32,
    ) -> impl Iterator<Item = Option<CellState>> + '_ {
        let (x, y, r) = (i64::from(x), i64::from(y), i64::from(radius));
        (y - r..=y + r)
            .flat_map(move |cy| (x - r..=x + r).map(move |cx| self.cell_wide(cx, cy)))
    }

    /// Collected form of [`neighborhood`](Grid::neighborhood).
    pub fn get_neighborhood(&self, x: i32, y: i32, radius: u32) -> Vec<Option<CellState>> {
        self.neighborhood(x, y, radius).collect()
    }

    /// Count each state in the square window of the given radius.
    ///
    /// `counts[k]` is the number of window cells in state `k`; missing
    /// cells are skipped. The center cell is included; callers that
    /// want a neighbour-only tally must subtract it themselves.
    pub fn count_neighborhood(&self, x: i32, y: i32, radius: u32) -> StateCounts {
        let mut counts: StateCounts = smallvec![0; self.num_states as usize];
        let (cx, cy, r) = (i64::from(x), i64::from(y), i64::from(radius));
        let interior = cx - r >= 0
            && cy - r >= 0
            && cx + r < i64::from(self.width)
            && cy + r < i64::from(self.height);
        if interior {
            // Whole window in range: index rows directly.
            let (left, span) = ((cx - r) as i32, 2 * radius as usize);
            for row_y in (cy - r) as i32..=(cy + r) as i32 {
                let row = self.index(left, row_y);
                for &state in &self.cells[row..=row + span] {
                    counts[state as usize] += 1;
                }
            }
        } else {
            for state in self.neighborhood(x, y, radius).flatten() {
                counts[state as usize] += 1;
            }
        }
        counts
    }

    /// Count each state across the whole grid.
    pub fn state_histogram(&self) -> StateCounts {
        let mut counts: StateCounts = smallvec![0; self.num_states as usize];
        for &state in &self.cells {
            counts[state as usize] += 1;
        }
        counts
    }

    /// Advance one generation.
    ///
    /// `next_state(grid, x, y, state)` is called once per cell in
    /// row-major order and always sees the current generation; its
    /// results go to the back buffer. Once every cell is computed the
    /// buffers are swapped and the generation counter increments.
    pub fn advance_with<F>(&mut self, mut next_state: F)
    where
        F: FnMut(&Grid, i32, i32, CellState) -> CellState,
    {
        let mut next = std::mem::take(&mut self.back);
        next.clear();
        next.reserve(self.cells.len());

        for y in 0..self.height as i32 {
            for x in 0..self.width as i32 {
                let state = self.cells[self.index(x, y)];
                let new_state = next_state(self, x, y, state);
                debug_assert!(
                    new_state < self.num_states,
                    "transition produced state {new_state} at ({x}, {y})"
                );
                next.push(new_state);
            }
        }

        self.back = std::mem::replace(&mut self.cells, next);
        self.generation = self.generation.next();
    }
}

impl CellReader for Grid {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn num_states(&self) -> u8 {
        self.num_states
    }

    fn generation(&self) -> Generation {
        self.generation
    }

    fn cell(&self, x: i32, y: i32) -> Option<CellState> {
        Grid::cell(self, x, y)
    }
}

impl std::fmt::Debug for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Grid")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("num_states", &self.num_states)
            .field("edge", &self.edge)
            .field("generation", &self.generation)
            .finish()
    }
}
