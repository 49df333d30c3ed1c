//! Seven-state stochastic epidemic rule.
//!
//! States 0 and 1 are the two infected stages, state 6 is dead and the
//! states in between are healthy or recovering stages. Each generation a
//! cell in state `s` is exposed to every other state `i` once per
//! neighbour in state `i`, succumbing with probability
//! [`INFECTION_MATRIX`]`[s][i]` per exposure. Row 6 is zero off the
//! diagonal, so the dead state is absorbing.
//!
//! The rule also tracks infected, peak infected and dead counts.

use rand::{Rng, RngCore};
use tessera_core::{CellState, SeedError, Seeding, StateCounts};
use tessera_space::Grid;

use crate::escape::escape_transition;
use crate::rule::{check_state_count, Rule};

/// Per-exposure transition probabilities, `INFECTION_MATRIX[from][to]`.
pub const INFECTION_MATRIX: [[f64; 7]; 7] = [
    [0.9, 0.0, 0.5, 0.6, 0.4, 0.45, 0.5],
    [0.9, 0.1, 0.9, 0.1, 0.8, 0.2, 0.1],
    [0.7, 0.9, 0.8, 0.65, 0.99, 0.88, 0.0],
    [0.6, 0.8, 0.77, 0.8, 0.89, 0.92, 0.78],
    [0.1, 0.1, 0.8, 0.1, 0.9, 0.1, 0.1],
    [0.4, 0.1, 0.4, 0.6, 0.7, 0.5, 0.1],
    [0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0],
];

/// Percent chance, per cell, of the minority flip in the low/high seedings.
const FLIP_PERCENT: u8 = 1;

/// Aggregate epidemic statistics for one generation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EpidemicStats {
    /// Cells in an infected state (0 or 1).
    pub currently_infected: usize,
    /// Peak of `currently_infected` over every tallied generation.
    pub max_infected: usize,
    /// Cells in the dead state.
    pub num_dead: usize,
    /// `round(100 * num_dead / cell_count)`, in `[0, 100]`.
    pub percent_dead: u32,
}

/// The seven-state epidemic rule and its running statistics.
///
/// Statistics describe the most recently tallied generation, i.e. the
/// grid as it was *before* the latest transition. They are all zero
/// until the first tally.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Covid7State {
    currently_infected: usize,
    max_infected: usize,
    num_dead: usize,
    cell_count: usize,
}

impl Covid7State {
    /// Number of states.
    pub const NUM_STATES: u8 = 7;
    /// Infected states.
    pub const INFECTED: [CellState; 2] = [0, 1];
    /// The absorbing dead state.
    pub const DEAD: CellState = 6;

    /// Create the rule with zeroed statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Cells infected in the last tallied generation.
    pub fn currently_infected(&self) -> usize {
        self.currently_infected
    }

    /// Largest infected count seen so far.
    pub fn max_infected(&self) -> usize {
        self.max_infected
    }

    /// Dead cells in the last tallied generation.
    pub fn num_dead(&self) -> usize {
        self.num_dead
    }

    /// Dead cells as a rounded whole percentage of the grid.
    pub fn percent_dead(&self) -> u32 {
        if self.cell_count == 0 {
            return 0;
        }
        (100.0 * self.num_dead as f64 / self.cell_count as f64).round() as u32
    }

    /// All statistics at once.
    pub fn stats(&self) -> EpidemicStats {
        EpidemicStats {
            currently_infected: self.currently_infected,
            max_infected: self.max_infected,
            num_dead: self.num_dead,
            percent_dead: self.percent_dead(),
        }
    }

    fn infected_state<R: Rng + ?Sized>(rng: &mut R) -> CellState {
        rng.random_range(0..2)
    }

    fn uninfected_state<R: Rng + ?Sized>(rng: &mut R) -> CellState {
        rng.random_range(2..Self::NUM_STATES)
    }

    fn percent_roll<R: Rng + ?Sized>(rng: &mut R, percent: u8) -> bool {
        rng.random_range(0..100u8) < percent
    }

    /// Infect each cell independently with probability
    /// `percent_infected / 100`.
    ///
    /// Infected cells take state 0 or 1 uniformly; the rest take one of
    /// states 2 through 6 uniformly. Values of 100 and above infect
    /// every cell. The grid must have seven states.
    pub fn randomize<R: Rng + ?Sized>(grid: &mut Grid, percent_infected: u8, rng: &mut R) {
        grid.fill_with(|_, _| {
            if Self::percent_roll(rng, percent_infected) {
                Self::infected_state(rng)
            } else {
                Self::uninfected_state(rng)
            }
        });
    }

    /// Seed a mostly uninfected grid: every cell takes one of states 2
    /// through 6, then 1% are replaced with an infected state.
    pub fn randomize_low_infected<R: Rng + ?Sized>(grid: &mut Grid, rng: &mut R) {
        grid.fill_with(|_, _| {
            let state = Self::uninfected_state(rng);
            if Self::percent_roll(rng, FLIP_PERCENT) {
                Self::infected_state(rng)
            } else {
                state
            }
        });
    }

    /// Seed a mostly infected grid: every cell takes state 0 or 1, then
    /// 1% are replaced with one of states 2 through 6.
    pub fn randomize_high_infected<R: Rng + ?Sized>(grid: &mut Grid, rng: &mut R) {
        grid.fill_with(|_, _| {
            let state = Self::infected_state(rng);
            if Self::percent_roll(rng, FLIP_PERCENT) {
                Self::uninfected_state(rng)
            } else {
                state
            }
        });
    }
}

impl Rule for Covid7State {
    fn name(&self) -> &'static str {
        "covid7"
    }

    fn num_states(&self) -> u8 {
        Self::NUM_STATES
    }

    fn tally(&mut self, grid: &Grid) {
        let histogram = grid.state_histogram();
        let count = |s: CellState| histogram.get(s as usize).copied().unwrap_or(0) as usize;
        self.currently_infected = Self::INFECTED.iter().map(|&s| count(s)).sum();
        self.num_dead = count(Self::DEAD);
        self.cell_count = grid.cell_count();
        self.max_infected = self.max_infected.max(self.currently_infected);
    }

    fn reset(&mut self) {
        *self = Self::default();
    }

    fn transition(
        &self,
        state: CellState,
        counts: &StateCounts,
        rng: &mut dyn RngCore,
    ) -> CellState {
        escape_transition(state, counts, &INFECTION_MATRIX[state as usize], rng)
    }

    fn seed(
        &self,
        grid: &mut Grid,
        seeding: Seeding,
        rng: &mut dyn RngCore,
    ) -> Result<(), SeedError> {
        check_state_count(self, grid)?;
        match seeding {
            Seeding::Uniform => grid.randomize_uniform(rng),
            Seeding::PercentInfected(value) if value > 100 => {
                return Err(SeedError::InvalidPercent { value });
            }
            Seeding::PercentInfected(p) => Self::randomize(grid, p, rng),
            Seeding::LowInfected => Self::randomize_low_infected(grid, rng),
            Seeding::HighInfected => Self::randomize_high_infected(grid, rng),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use tessera_space::EdgeBehavior;
    use tessera_test_utils::{grid_from_digits, ConstRng};

    fn counts(values: [u32; 7]) -> StateCounts {
        values.into_iter().collect()
    }

    fn step(rule: &mut Covid7State, grid: &mut Grid, rng: &mut ChaCha8Rng) {
        rule.tally(grid);
        let rule = &*rule;
        grid.advance_with(|g, x, y, s| {
            rule.transition(s, &g.count_neighborhood(x, y, 1), &mut *rng)
        });
    }

    fn seeded_grid(size: u32, seeding: Seeding, seed: u64) -> (Grid, ChaCha8Rng) {
        let mut grid = Grid::new(size, size, 7, EdgeBehavior::Wrap).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        Covid7State::new().seed(&mut grid, seeding, &mut rng).unwrap();
        (grid, rng)
    }

    #[test]
    fn matrix_is_a_probability_table() {
        for row in INFECTION_MATRIX {
            for p in row {
                assert!((0.0..=1.0).contains(&p));
            }
        }
    }

    #[test]
    fn dead_row_never_escapes() {
        let rule = Covid7State::new();
        let c = counts([9, 9, 9, 9, 9, 9, 1]);
        assert_eq!(rule.transition(6, &c, &mut ConstRng::max()), 6);
    }

    #[test]
    fn first_infected_stage_cannot_jump_to_second() {
        // INFECTION_MATRIX[0][1] == 0: only other states can pull a cell out of 0.
        let rule = Covid7State::new();
        let c = counts([1, 8, 0, 0, 0, 0, 0]);
        assert_eq!(rule.transition(0, &c, &mut ConstRng::max()), 0);
    }

    #[test]
    fn second_stage_pulled_back_by_first() {
        let rule = Covid7State::new();
        let c = counts([2, 7, 0, 0, 0, 0, 0]);
        assert_eq!(rule.transition(1, &c, &mut ConstRng::max()), 0);
        assert_eq!(rule.transition(1, &c, &mut ConstRng::zero()), 1);
    }

    #[test]
    fn tally_counts_infected_and_dead() {
        let grid = grid_from_digits(&["0126", "6543", "1066"], 7, EdgeBehavior::Wrap);
        let mut rule = Covid7State::new();
        rule.tally(&grid);
        assert_eq!(rule.currently_infected(), 4);
        assert_eq!(rule.num_dead(), 4);
        assert_eq!(rule.max_infected(), 4);
        assert_eq!(rule.percent_dead(), 33);
    }

    #[test]
    fn percent_dead_rounds_half_up() {
        let mut rule = Covid7State::new();
        rule.tally(&grid_from_digits(&["662"], 7, EdgeBehavior::Wrap));
        assert_eq!(rule.percent_dead(), 67);
        rule.tally(&grid_from_digits(&["62"], 7, EdgeBehavior::Wrap));
        assert_eq!(rule.percent_dead(), 50);
    }

    #[test]
    fn stats_zero_before_first_tally() {
        assert_eq!(Covid7State::new().stats(), EpidemicStats::default());
    }

    #[test]
    fn max_infected_keeps_peak() {
        let mut rule = Covid7State::new();
        rule.tally(&grid_from_digits(&["0101"], 7, EdgeBehavior::Wrap));
        rule.tally(&grid_from_digits(&["0222"], 7, EdgeBehavior::Wrap));
        assert_eq!(rule.currently_infected(), 1);
        assert_eq!(rule.max_infected(), 4);
    }

    #[test]
    fn reset_clears_statistics() {
        let mut rule = Covid7State::new();
        rule.tally(&grid_from_digits(&["0166"], 7, EdgeBehavior::Wrap));
        rule.reset();
        assert_eq!(rule, Covid7State::new());
    }

    #[test]
    fn tally_reflects_pre_transition_grid() {
        let (mut grid, mut rng) = seeded_grid(12, Seeding::PercentInfected(30), 3);
        let before = grid.state_histogram();
        let mut rule = Covid7State::new();
        step(&mut rule, &mut grid, &mut rng);
        assert_eq!(rule.currently_infected(), (before[0] + before[1]) as usize);
        assert_eq!(rule.num_dead(), before[6] as usize);
    }

    #[test]
    fn percent_seeding_extremes() {
        let (all, _) = seeded_grid(20, Seeding::PercentInfected(100), 1);
        assert!(all.cells().iter().all(|&s| s <= 1));
        let (none, _) = seeded_grid(20, Seeding::PercentInfected(0), 1);
        assert!(none.cells().iter().all(|&s| s >= 2));
    }

    #[test]
    fn percent_seeding_rejects_over_one_hundred() {
        let mut grid = Grid::new(4, 4, 7, EdgeBehavior::Wrap).unwrap();
        let err = Covid7State::new()
            .seed(&mut grid, Seeding::PercentInfected(101), &mut ConstRng::zero())
            .unwrap_err();
        assert_eq!(err, SeedError::InvalidPercent { value: 101 });
    }

    #[test]
    fn seeding_rejects_grid_with_fewer_states() {
        for seeding in [
            Seeding::Uniform,
            Seeding::PercentInfected(50),
            Seeding::LowInfected,
            Seeding::HighInfected,
        ] {
            let mut grid = Grid::new(4, 4, 2, EdgeBehavior::Wrap).unwrap();
            let err = Covid7State::new()
                .seed(&mut grid, seeding, &mut ChaCha8Rng::seed_from_u64(1))
                .unwrap_err();
            assert_eq!(
                err,
                SeedError::StateCountMismatch {
                    rule: "covid7",
                    expected: 7,
                    actual: 2,
                },
                "{seeding}"
            );
            assert!(grid.cells().iter().all(|&s| s == 0), "{seeding} wrote the grid");
        }
    }

    #[test]
    fn low_and_high_seedings_are_biased() {
        let (low, _) = seeded_grid(50, Seeding::LowInfected, 9);
        let h = low.state_histogram();
        let infected = h[0] + h[1];
        assert!(infected < 100, "low seeding infected {infected} of 2500");

        let (high, _) = seeded_grid(50, Seeding::HighInfected, 9);
        let h = high.state_histogram();
        let infected = h[0] + h[1];
        assert!(infected > 2400, "high seeding infected {infected} of 2500");
    }

    #[test]
    fn seeding_only_uses_valid_states() {
        for seeding in [
            Seeding::Uniform,
            Seeding::PercentInfected(40),
            Seeding::LowInfected,
            Seeding::HighInfected,
        ] {
            let (grid, _) = seeded_grid(16, seeding, 5);
            assert!(grid.cells().iter().all(|&s| s < 7), "{seeding}");
        }
    }

    #[test]
    fn dead_cells_stay_dead_through_simulation() {
        let (mut grid, mut rng) = seeded_grid(24, Seeding::PercentInfected(20), 11);
        let mut rule = Covid7State::new();
        for _ in 0..25 {
            let dead_before: Vec<usize> = grid
                .cells()
                .iter()
                .enumerate()
                .filter(|(_, &s)| s == Covid7State::DEAD)
                .map(|(i, _)| i)
                .collect();
            step(&mut rule, &mut grid, &mut rng);
            for i in dead_before {
                assert_eq!(grid.cells()[i], Covid7State::DEAD, "cell {i} left the dead state");
            }
        }
    }

    #[test]
    fn statistics_invariants_hold_over_a_run() {
        let (mut grid, mut rng) = seeded_grid(30, Seeding::PercentInfected(10), 21);
        let mut rule = Covid7State::new();
        let mut last_max = 0;
        for _ in 0..40 {
            step(&mut rule, &mut grid, &mut rng);
            let stats = rule.stats();
            assert!(stats.max_infected >= last_max);
            assert!(stats.max_infected >= stats.currently_infected);
            assert!(stats.percent_dead <= 100);
            last_max = stats.max_infected;
        }
    }

    proptest! {
        #[test]
        fn dead_is_absorbing_for_any_counts(
            c in proptest::collection::vec(0u32..10, 7),
            seed in any::<u64>(),
        ) {
            let rule = Covid7State::new();
            let counts: StateCounts = c.into_iter().collect();
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let next = rule.transition(Covid7State::DEAD, &counts, &mut rng);
            prop_assert_eq!(next, Covid7State::DEAD);
        }

        #[test]
        fn transition_stays_in_range(
            state in 0u8..7,
            c in proptest::collection::vec(0u32..10, 7),
            seed in any::<u64>(),
        ) {
            let rule = Covid7State::new();
            let counts: StateCounts = c.into_iter().collect();
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            prop_assert!(rule.transition(state, &counts, &mut rng) < 7);
        }
    }
}
