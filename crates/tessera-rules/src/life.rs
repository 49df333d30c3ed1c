//! Conway's Game of Life.

use rand::RngCore;
use tessera_core::{CellState, StateCounts};

use crate::rule::Rule;

/// Conway's Game of Life (B3/S23) over two states, 0 dead and 1 alive.
///
/// With `c` live cells among the eight neighbours: fewer than two or more
/// than three kills the cell, exactly three makes it alive, and exactly
/// two leaves it unchanged. No randomness is consumed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Life;

impl Life {
    /// Dead cell.
    pub const DEAD: CellState = 0;
    /// Live cell.
    pub const ALIVE: CellState = 1;

    /// Create the rule.
    pub fn new() -> Self {
        Self
    }
}

impl Rule for Life {
    fn name(&self) -> &'static str {
        "life"
    }

    fn num_states(&self) -> u8 {
        2
    }

    fn transition(
        &self,
        state: CellState,
        counts: &StateCounts,
        _rng: &mut dyn RngCore,
    ) -> CellState {
        // The window tally includes the cell itself; a tally that omits a
        // live center saturates to zero live neighbours.
        let live = counts[Self::ALIVE as usize].saturating_sub(u32::from(state == Self::ALIVE));
        match live {
            3 => Self::ALIVE,
            2 => state,
            _ => Self::DEAD,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tessera_core::Generation;
    use tessera_space::{EdgeBehavior, Grid};
    use tessera_test_utils::{
        grid_from_ascii, place, render_ascii, ConstRng, BLINKER, BLOCK, GLIDER,
    };

    fn step(grid: &mut Grid) {
        let rule = Life;
        let mut rng = ConstRng::zero();
        grid.advance_with(|g, x, y, s| {
            rule.transition(s, &g.count_neighborhood(x, y, 1), &mut rng)
        });
    }

    fn tally(own: CellState, live_neighbours: u32) -> StateCounts {
        let live = live_neighbours + u32::from(own == 1);
        [9 - live, live].into_iter().collect()
    }

    #[test]
    fn live_cell_with_tally_missing_itself_dies() {
        let rule = Life;
        let c: StateCounts = [9, 0].into_iter().collect();
        assert_eq!(rule.transition(Life::ALIVE, &c, &mut ConstRng::zero()), Life::DEAD);
    }

    #[test]
    fn transition_table() {
        let rule = Life;
        let mut rng = ConstRng::zero();
        for n in 0..=8 {
            let from_dead = rule.transition(0, &tally(0, n), &mut rng);
            let from_alive = rule.transition(1, &tally(1, n), &mut rng);
            assert_eq!(from_dead, u8::from(n == 3), "dead cell with {n} live neighbours");
            assert_eq!(
                from_alive,
                u8::from(n == 2 || n == 3),
                "live cell with {n} live neighbours"
            );
        }
    }

    #[test]
    fn isolated_cell_dies() {
        let mut g = Grid::new(5, 5, 2, EdgeBehavior::Wrap).unwrap();
        g.set_cell(2, 2, 1).unwrap();
        step(&mut g);
        assert!(g.cells().iter().all(|&s| s == 0));
        assert_eq!(g.generation(), Generation(1));
    }

    #[test]
    fn block_is_still() {
        let mut g = Grid::new(6, 6, 2, EdgeBehavior::Wrap).unwrap();
        place(&mut g, BLOCK, 2, 2, 1);
        let start = g.cells().to_vec();
        for _ in 0..10 {
            step(&mut g);
            assert_eq!(g.cells(), start.as_slice());
        }
    }

    #[test]
    fn blinker_has_period_two() {
        let mut g = Grid::new(5, 5, 2, EdgeBehavior::Absorb).unwrap();
        place(&mut g, BLINKER, 1, 2, 1);
        let horizontal = render_ascii(&g);
        step(&mut g);
        assert_eq!(render_ascii(&g), [".....", "..#..", "..#..", "..#..", "....."]);
        step(&mut g);
        assert_eq!(render_ascii(&g), horizontal);
    }

    #[test]
    fn glider_translates_diagonally_on_torus() {
        let mut g = Grid::new(8, 8, 2, EdgeBehavior::Wrap).unwrap();
        place(&mut g, GLIDER, 0, 0, 1);
        let mut expected = Grid::new(8, 8, 2, EdgeBehavior::Wrap).unwrap();
        place(&mut expected, GLIDER, 1, 1, 1);
        for _ in 0..4 {
            step(&mut g);
        }
        assert_eq!(g.cells(), expected.cells());

        // 32 generations carry it once around the 8x8 torus.
        for _ in 0..28 {
            step(&mut g);
        }
        let mut home = Grid::new(8, 8, 2, EdgeBehavior::Wrap).unwrap();
        place(&mut home, GLIDER, 0, 0, 1);
        assert_eq!(g.cells(), home.cells());
    }

    #[test]
    fn bounded_edge_cells_see_fewer_neighbours() {
        // On a 3x3 torus every dead cell would see all three live cells
        // and the grid would fill; bounded, the L closes into a block.
        let mut g = grid_from_ascii(&["##.", "#..", "..."], EdgeBehavior::Absorb);
        step(&mut g);
        assert_eq!(render_ascii(&g), ["##.", "##.", "..."]);
    }

    #[test]
    fn deterministic_across_runs() {
        let seed_rows = [".#..#.", "##.#..", "..##.#", "#....#", ".##...", "...#.#"];
        let mut a = grid_from_ascii(&seed_rows, EdgeBehavior::Wrap);
        let mut b = grid_from_ascii(&seed_rows, EdgeBehavior::Wrap);
        for _ in 0..20 {
            step(&mut a);
            step(&mut b);
            assert_eq!(a.cells(), b.cells());
        }
    }
}
