//! fp-rng: Random sources for floorplan generation
//!
//! The generator only ever asks for one thing: a uniform value in `[0, 1)`.
//! [`RandomSource`] captures that, so callers can hand in a seeded
//! [`FloorRng`], a scripted [`ReplaySource`], or a plain closure.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Largest value a source may yield.
pub const MAX_UNIT: f64 = 1.0 - f64::EPSILON;

/// A source of uniform draws in `[0, 1)`.
pub trait RandomSource {
    /// Next uniform draw in `[0, 1)`.
    fn next_unit(&mut self) -> f64;
}

impl<F> RandomSource for F
where
    F: FnMut() -> f64,
{
    fn next_unit(&mut self) -> f64 {
        self()
    }
}

/// Uniform index into a list of `len` items: `floor(draw * len)`.
///
/// Returns `None` without consuming a draw when `len` is 0. Draws that
/// land on or above 1.0 are clamped to the last index.
pub fn index_below<R: RandomSource + ?Sized>(source: &mut R, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    let scaled = (source.next_unit() * len as f64).floor();
    if scaled <= 0.0 {
        return Some(0);
    }
    Some((scaled as usize).min(len - 1))
}

/// ChaCha8 stream behind a `u64` seed
///
/// Two generators built from the same seed hand out the same draws. Only
/// the seed survives serialization, so a deserialized `FloorRng` replays
/// its stream from the first draw.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "u64", into = "u64")]
pub struct FloorRng {
    seed: u64,
    stream: ChaCha8Rng,
}

impl FloorRng {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            stream: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Seeded from the thread RNG; `seed()` reports what was picked
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl From<u64> for FloorRng {
    fn from(seed: u64) -> Self {
        Self::new(seed)
    }
}

impl From<FloorRng> for u64 {
    fn from(rng: FloorRng) -> u64 {
        rng.seed
    }
}

impl Default for FloorRng {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl RandomSource for FloorRng {
    fn next_unit(&mut self) -> f64 {
        self.stream.gen_range(0.0..1.0)
    }
}

/// Replays a fixed list of draws, starting over when it runs out.
#[derive(Debug, Clone, PartialEq)]
pub struct ReplaySource {
    values: Vec<f64>,
    cursor: usize,
    draws: u64,
}

impl ReplaySource {
    /// Replay `values` in order, cycling. An empty list behaves like `[0.0]`.
    pub fn new(values: impl IntoIterator<Item = f64>) -> Self {
        let mut values: Vec<f64> = values.into_iter().map(clamp_unit).collect();
        if values.is_empty() {
            values.push(0.0);
        }
        Self {
            values,
            cursor: 0,
            draws: 0,
        }
    }

    /// Always yield `value`.
    pub fn constant(value: f64) -> Self {
        Self::new([value])
    }

    /// Number of draws handed out so far
    pub fn draws(&self) -> u64 {
        self.draws
    }
}

impl RandomSource for ReplaySource {
    fn next_unit(&mut self) -> f64 {
        let value = self.values[self.cursor];
        self.cursor = (self.cursor + 1) % self.values.len();
        self.draws += 1;
        value
    }
}

fn clamp_unit(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, MAX_UNIT)
    }
}
