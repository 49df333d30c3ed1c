//! Error types for grid construction and writes.

use std::error::Error;
use std::fmt;

/// Errors arising from grid construction or cell writes.
///
/// Reads never fail: a bounded grid answers out-of-range lookups with
/// `None` instead.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SpaceError {
    /// A write targeted a coordinate outside the grid.
    CoordOutOfBounds {
        /// Column of the offending coordinate.
        x: i32,
        /// Row of the offending coordinate.
        y: i32,
        /// Human-readable description of the valid range.
        bounds: String,
    },
    /// A state value outside `[0, num_states)`.
    InvalidState {
        /// The offending state.
        state: u8,
        /// Number of valid states for the grid.
        num_states: u8,
    },
    /// Attempted to construct a grid with zero cells.
    EmptySpace,
    /// Attempted to construct a grid with zero valid states.
    NoStates,
    /// A dimension exceeds the coordinate range.
    DimensionTooLarge {
        /// Which dimension (`"width"` or `"height"`).
        name: &'static str,
        /// The configured value.
        value: u32,
        /// Maximum allowed value.
        max: u32,
    },
    /// An explicit cell buffer does not match the grid dimensions.
    BufferSizeMismatch {
        /// `width * height`.
        expected: usize,
        /// Length of the supplied buffer.
        actual: usize,
    },
}

impl fmt::Display for SpaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CoordOutOfBounds { x, y, bounds } => {
                write!(f, "coordinate ({x}, {y}) out of bounds: {bounds}")
            }
            Self::InvalidState { state, num_states } => {
                write!(f, "state {state} is not in [0, {num_states})")
            }
            Self::EmptySpace => write!(f, "grid must have at least one cell"),
            Self::NoStates => write!(f, "grid must have at least one state"),
            Self::DimensionTooLarge { name, value, max } => {
                write!(f, "{name} {value} exceeds maximum {max}")
            }
            Self::BufferSizeMismatch { expected, actual } => {
                write!(f, "cell buffer has {actual} entries, expected {expected}")
            }
        }
    }
}

impl Error for SpaceError {}
