//! Seeds and seeded jitter.
//!
//! A shape's decorative randomness is a pure function of its id: the first
//! eight ASCII digits of the id form the seed, and every jittered value is
//! drawn from a `StdRng` seeded with it. Nothing here reads the clock or any
//! global state.

#[cfg(test)]
#[path = "seed_test.rs"]
mod seed_test;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::geom::Point;

/// Number of leading digits of an id that form its seed.
const SEED_DIGITS: usize = 8;

/// Derive the jitter seed for an element id.
///
/// Uses the first eight ASCII digits in `id`, wherever they appear. Ids
/// without digits (or whose digits are all zero) get seed `1`.
#[must_use]
pub fn seed_from_id(id: &str) -> u64 {
    let digits: String = id.chars().filter(char::is_ascii_digit).take(SEED_DIGITS).collect();
    match digits.parse::<u64>() {
        Ok(0) | Err(_) => 1,
        Ok(seed) => seed,
    }
}

/// Deterministic jitter source.
pub struct Jitter {
    rng: StdRng,
}

impl Jitter {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self { rng: StdRng::seed_from_u64(seed) }
    }

    /// Uniform value in `[0, 1)`.
    pub fn unit(&mut self) -> f64 {
        self.rng.random::<f64>()
    }

    /// Uniform value in `[-amplitude, amplitude)`.
    pub fn signed(&mut self, amplitude: f64) -> f64 {
        self.unit().mul_add(2.0, -1.0) * amplitude
    }

    /// `p` displaced independently on both axes by up to `amplitude`.
    pub fn point(&mut self, p: Point, amplitude: f64) -> Point {
        let dx = self.signed(amplitude);
        let dy = self.signed(amplitude);
        Point::new(p.x + dx, p.y + dy)
    }
}
