//! Per-generation performance metrics.

/// Timing and activity metrics collected during a single generation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StepMetrics {
    /// Wall-clock time for the whole generation, in microseconds.
    pub total_us: u64,
    /// Cells whose state differs from the previous generation.
    pub cells_changed: usize,
}

impl StepMetrics {
    /// Fraction of cells that changed, given the grid's cell count.
    pub fn change_ratio(&self, cell_count: usize) -> f64 {
        if cell_count == 0 {
            return 0.0;
        }
        self.cells_changed as f64 / cell_count as f64
    }
}
