//! Axis arithmetic shared by the grid's read and write paths.

use crate::edge::EdgeBehavior;
use crate::error::SpaceError;

/// Largest width or height: coordinates are `i32`.
pub(crate) const MAX_DIM: u32 = i32::MAX as u32;

/// Resolve a single axis value under the given edge behavior.
/// Returns `Some(resolved)` or `None` for Absorb out-of-bounds.
///
/// Takes `i64` so window arithmetic around any `i32` center with any
/// `u32` radius cannot overflow.
#[inline]
pub(crate) fn resolve_axis(val: i64, len: u32, edge: EdgeBehavior) -> Option<i32> {
    let n = i64::from(len);
    let resolved = if (0..n).contains(&val) {
        val
    } else {
        match edge {
            EdgeBehavior::Absorb => return None,
            EdgeBehavior::Wrap => val.rem_euclid(n),
        }
    };
    // `len <= MAX_DIM`, so the resolved value fits.
    Some(resolved as i32)
}

/// Check that `(x, y)` is in bounds and return its row-major index.
pub(crate) fn check_2d_bounds(
    x: i32,
    y: i32,
    width: u32,
    height: u32,
) -> Result<usize, SpaceError> {
    if x < 0 || x >= width as i32 || y < 0 || y >= height as i32 {
        return Err(SpaceError::CoordOutOfBounds {
            x,
            y,
            bounds: format!("[0, {width}) x [0, {height})"),
        });
    }
    Ok(y as usize * width as usize + x as usize)
}

/// Validate a grid dimension against [`MAX_DIM`].
pub(crate) fn check_dim(name: &'static str, value: u32) -> Result<(), SpaceError> {
    if value > MAX_DIM {
        return Err(SpaceError::DimensionTooLarge {
            name,
            value,
            max: MAX_DIM,
        });
    }
    Ok(())
}
