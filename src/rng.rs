//! Injectable randomness.
//!
//! Every random decision in the chat core (profile choice, glyph sampling,
//! phrase and template selection, the gamble coin flip) goes through
//! [`RandomSource`]. Production code wraps a seeded or entropy-seeded
//! [`StdRng`]; tests substitute [`FixedSource`] or [`ScriptedSource`].

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub trait RandomSource {
    /// Uniform draw in `[0, 1)`.
    fn unit(&mut self) -> f64;

    /// Uniform index in `0..len`. `len` must be non-zero.
    fn index(&mut self, len: usize) -> usize {
        debug_assert!(len > 0, "index drawn from an empty pool");
        let i = (self.unit() * len as f64) as usize;
        i.min(len.saturating_sub(1))
    }
}

/// [`RandomSource`] backed by a `rand` generator.
#[derive(Debug, Clone)]
pub struct RngSource<R: Rng = StdRng> {
    rng: R,
}

impl RngSource<StdRng> {
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Deterministic generator; the same seed replays the same conversation.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl<R: Rng> RngSource<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn unit(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }

    fn index(&mut self, len: usize) -> usize {
        debug_assert!(len > 0, "index drawn from an empty pool");
        self.rng.gen_range(0..len)
    }
}

/// Returns the same value for every draw.
///
/// Index draws map the value onto the pool (`floor(value * len)`), so `0.0`
/// always picks the first element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedSource(pub f64);

impl RandomSource for FixedSource {
    fn unit(&mut self) -> f64 {
        self.0
    }
}

/// Replays a fixed sequence of unit draws, cycling when exhausted.
#[derive(Debug, Clone)]
pub struct ScriptedSource {
    values: Vec<f64>,
    pos: usize,
}

impl ScriptedSource {
    pub fn new(values: impl Into<Vec<f64>>) -> Self {
        let values = values.into();
        debug_assert!(!values.is_empty(), "scripted source needs at least one value");
        Self { values, pos: 0 }
    }

    /// Number of draws taken so far.
    pub fn draws(&self) -> usize {
        self.pos
    }
}

impl RandomSource for ScriptedSource {
    fn unit(&mut self) -> f64 {
        let v = self.values[self.pos % self.values.len()];
        self.pos += 1;
        v
    }
}
