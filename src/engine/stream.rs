//! Deterministic draw stream (Lehmer / Park-Miller LCG).

use crate::constants::lcg::{MODULUS, MULTIPLIER};

/// Reproducible sequence of floats in `[0, 1)`.
///
/// The Nth draw is a pure function of `(seed, N)`. A stream is owned by a
/// single report generation; it deliberately does not implement `Clone`.
#[derive(Debug)]
pub struct DeterministicStream {
    state: u64,
    draws: u64,
}

impl DeterministicStream {
    pub fn new(seed: u64) -> Self {
        Self {
            state: seed,
            draws: 0,
        }
    }

    /// Advance the state and return the next value.
    pub fn next_f64(&mut self) -> f64 {
        // seed <= 2^31 and MULTIPLIER < 2^15, so the product fits easily in u64
        self.state = (self.state * MULTIPLIER) % MODULUS;
        self.draws += 1;
        self.state as f64 / MODULUS as f64
    }

    /// Draw and compare: `true` when the draw is strictly above `threshold`.
    pub fn chance(&mut self, threshold: f64) -> bool {
        self.next_f64() > threshold
    }

    /// `base + floor(draw * span)`
    pub fn int_in(&mut self, base: u32, span: u32) -> u32 {
        base + (self.next_f64() * f64::from(span)).floor() as u32
    }

    /// `base + draw * span`
    pub fn float_in(&mut self, base: f64, span: f64) -> f64 {
        base + self.next_f64() * span
    }

    /// Number of values drawn so far
    pub fn draws(&self) -> u64 {
        self.draws
    }
}
