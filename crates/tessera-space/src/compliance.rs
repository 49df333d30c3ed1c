//! Grid invariant test helpers.
//!
//! These functions verify the addressing and neighbourhood contract on
//! a concrete grid by exhaustive scan. Reused by the grid's unit tests
//! for both edge behaviors.

use crate::grid::Grid;

/// Assert that every in-range read returns the stored row-major value.
pub fn assert_in_range_reads_match_storage(grid: &Grid) {
    let w = grid.width() as i32;
    for (i, &stored) in grid.cells().iter().enumerate() {
        let (x, y) = (i as i32 % w, i as i32 / w);
        assert_eq!(
            grid.cell(x, y),
            Some(stored),
            "cell({x}, {y}) disagrees with storage index {i}"
        );
    }
}

/// Assert the one-ring just outside the grid: wrapped on a torus,
/// missing on a bounded grid.
pub fn assert_edge_ring(grid: &Grid) {
    let (w, h) = (grid.width() as i32, grid.height() as i32);
    for x in -1..=w {
        for y in [-1, h] {
            check_outside(grid, x, y, w, h);
        }
    }
    for y in -1..=h {
        for x in [-1, w] {
            check_outside(grid, x, y, w, h);
        }
    }
}

fn check_outside(grid: &Grid, x: i32, y: i32, w: i32, h: i32) {
    let got = grid.cell(x, y);
    if grid.is_toroidal() {
        let expected = grid.cell(x.rem_euclid(w), y.rem_euclid(h));
        assert_eq!(got, expected, "wrapped read at ({x}, {y})");
    } else {
        assert_eq!(got, None, "bounded read at ({x}, {y}) should be empty");
    }
}

/// Assert that every radius-1 and radius-2 window has the full size and
/// that its counts add up to the number of present cells.
pub fn assert_windows_consistent(grid: &Grid) {
    for radius in 1..=2u32 {
        let side = (2 * radius + 1) as usize;
        for y in 0..grid.height() as i32 {
            for x in 0..grid.width() as i32 {
                let window = grid.get_neighborhood(x, y, radius);
                assert_eq!(window.len(), side * side);
                let present = window.iter().flatten().count();
                let counted: u32 = grid.count_neighborhood(x, y, radius).iter().sum();
                assert_eq!(
                    counted as usize, present,
                    "count mismatch at ({x}, {y}) radius {radius}"
                );
                assert_eq!(window[side * side / 2], grid.cell(x, y), "center of window");
            }
        }
    }
}

/// Run all compliance checks.
pub fn run_full_compliance(grid: &Grid) {
    assert_in_range_reads_match_storage(grid);
    assert_edge_ring(grid);
    assert_windows_consistent(grid);
}
