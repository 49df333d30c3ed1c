//! Test utilities and fixtures for Tessera development.
//!
//! Provides a constant-output RNG ([`ConstRng`]) for pinning stochastic
//! transitions, a draw-counting wrapper ([`CountingRng`]), ASCII grid
//! builders and the classic Life patterns used across the workspace's
//! tests and benchmarks.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::{
    grid_from_ascii, grid_from_digits, place, render_ascii, BLINKER, BLOCK, GLIDER,
};

use rand::RngCore;

/// An RNG that returns the same word forever.
///
/// Uniform `f64` draws from `rand` use the top 53 bits of `next_u64`,
/// so [`ConstRng::zero`] always draws `0.0` and [`ConstRng::max`]
/// always draws the largest value below `1.0`. With the escape rule
/// `q < r`, the former never fires a transition and the latter fires
/// every transition whose escape probability is below one.
#[derive(Clone, Copy, Debug)]
pub struct ConstRng(pub u64);

impl ConstRng {
    /// Every uniform draw is `0.0`.
    pub fn zero() -> Self {
        Self(0)
    }

    /// Every uniform draw is `1.0 - 2^-53`.
    pub fn max() -> Self {
        Self(u64::MAX)
    }

    /// Every uniform `f64` draw is `r`, rounded down to a multiple of
    /// `2^-53`.
    ///
    /// # Panics
    ///
    /// Panics unless `0.0 <= r < 1.0`.
    pub fn draw(r: f64) -> Self {
        assert!((0.0..1.0).contains(&r), "draw {r} outside [0, 1)");
        let bits = (r * (1u64 << 53) as f64) as u64;
        Self(bits << 11)
    }
}

/// Wraps an RNG and counts the words drawn from it.
///
/// Each `next_u32`, `next_u64` or `fill_bytes` call counts once; a
/// uniform `f64` draw is one `next_u64`.
#[derive(Clone, Debug)]
pub struct CountingRng<R> {
    inner: R,
    draws: usize,
}

impl<R: RngCore> CountingRng<R> {
    pub fn new(inner: R) -> Self {
        Self { inner, draws: 0 }
    }

    /// Calls made so far.
    pub fn draws(&self) -> usize {
        self.draws
    }
}

impl<R: RngCore> RngCore for CountingRng<R> {
    fn next_u32(&mut self) -> u32 {
        self.draws += 1;
        self.inner.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.draws += 1;
        self.inner.next_u64()
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        self.draws += 1;
        self.inner.fill_bytes(dst);
    }
}

impl RngCore for ConstRng {
    fn next_u32(&mut self) -> u32 {
        (self.0 >> 32) as u32
    }

    fn next_u64(&mut self) -> u64 {
        self.0
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        let bytes = self.0.to_le_bytes();
        for (i, b) in dst.iter_mut().enumerate() {
            *b = bytes[i % 8];
        }
    }
}
