//! Reusable grid fixtures.
//!
//! Builders for small hand-drawn grids plus the three classic Life
//! patterns used throughout the test suites:
//!
//! - [`BLOCK`]: 2x2 still life.
//! - [`BLINKER`]: period-2 oscillator.
//! - [`GLIDER`]: spaceship moving one cell diagonally every 4 generations.

use tessera_core::CellState;
use tessera_space::{EdgeBehavior, Grid};

/// 2x2 still life.
pub const BLOCK: &[(i32, i32)] = &[(0, 0), (1, 0), (0, 1), (1, 1)];

/// Horizontal blinker; flips to vertical through `(1, -1)..=(1, 1)`.
pub const BLINKER: &[(i32, i32)] = &[(0, 0), (1, 0), (2, 0)];

/// South-east glider.
///
/// ```text
/// .#.
/// ..#
/// ###
/// ```
pub const GLIDER: &[(i32, i32)] = &[(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)];

/// Build a two-state grid from rows of `#` (state 1) and `.` (state 0).
///
/// # Panics
///
/// Panics on ragged rows or any other character.
pub fn grid_from_ascii(rows: &[&str], edge: EdgeBehavior) -> Grid {
    let translated: Vec<String> = rows
        .iter()
        .map(|row| {
            row.chars()
                .map(|c| match c {
                    '#' => '1',
                    '.' => '0',
                    other => panic!("unexpected grid character {other:?}"),
                })
                .collect()
        })
        .collect();
    let refs: Vec<&str> = translated.iter().map(String::as_str).collect();
    grid_from_digits(&refs, 2, edge)
}

/// Build a grid from rows of decimal digits, one digit per cell.
///
/// # Panics
///
/// Panics on ragged rows, non-digit characters, or states that are not
/// below `num_states`.
pub fn grid_from_digits(rows: &[&str], num_states: u8, edge: EdgeBehavior) -> Grid {
    let height = rows.len() as u32;
    let width = rows.first().map_or(0, |r| r.len()) as u32;
    let mut cells = Vec::with_capacity((width * height) as usize);
    for row in rows {
        assert_eq!(row.len() as u32, width, "ragged fixture row {row:?}");
        for c in row.chars() {
            let digit = c
                .to_digit(10)
                .unwrap_or_else(|| panic!("unexpected grid character {c:?}"));
            cells.push(digit as CellState);
        }
    }
    Grid::from_states(width, height, num_states, edge, cells).expect("valid fixture grid")
}

/// Write `state` at every pattern offset relative to `(x, y)`.
///
/// Offsets are wrapped into the grid, so patterns may straddle the
/// edges of a toroidal grid.
pub fn place(grid: &mut Grid, pattern: &[(i32, i32)], x: i32, y: i32, state: CellState) {
    let (w, h) = (grid.width() as i32, grid.height() as i32);
    for &(dx, dy) in pattern {
        grid.set_cell((x + dx).rem_euclid(w), (y + dy).rem_euclid(h), state)
            .expect("pattern cell in range");
    }
}

/// Render a grid as rows of text, the inverse of the fixture builders.
///
/// Two-state grids use `#` and `.`; larger state spaces use digits.
pub fn render_ascii(grid: &Grid) -> Vec<String> {
    let two_state = grid.num_states() == 2;
    grid.cells()
        .chunks(grid.width() as usize)
        .map(|row| {
            row.iter()
                .map(|&s| match (two_state, s) {
                    (true, 0) => '.',
                    (true, _) => '#',
                    (false, s) => char::from(b'0' + s),
                })
                .collect()
        })
        .collect()
}
