//! Randomness seam for synthesized employee attributes.
//!
//! The remote source carries neither department nor rating, and locally
//! created employees get a random rating. Everything random goes through
//! [`RandomSource`] so tests can script the outcome.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::employee::{Department, Rating};

pub trait RandomSource: Send {
    /// Returns a uniformly distributed index in `0..len`. `len` is never zero.
    fn index(&mut self, len: usize) -> usize;

    fn department(&mut self) -> Department {
        Department::ALL[self.index(Department::ALL.len())]
    }

    fn rating(&mut self) -> Rating {
        Rating::ALL[self.index(Rating::ALL.len())]
    }
}

/// Thread-local RNG, the production default.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn index(&mut self, len: usize) -> usize {
        rand::thread_rng().gen_range(0..len)
    }
}

/// Reproducible RNG seeded from a `u64`.
#[derive(Debug, Clone)]
pub struct SeededRandom {
    rng: StdRng,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for SeededRandom {
    fn index(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..len)
    }
}

/// Replays a fixed script of indices, wrapping around at the end.
///
/// Each scripted value is reduced modulo the requested `len`.
#[derive(Debug, Clone)]
pub struct ScriptedRandom {
    script: Vec<usize>,
    cursor: usize,
}

impl ScriptedRandom {
    pub fn new(script: impl Into<Vec<usize>>) -> Self {
        Self {
            script: script.into(),
            cursor: 0,
        }
    }
}

impl RandomSource for ScriptedRandom {
    fn index(&mut self, len: usize) -> usize {
        if self.script.is_empty() {
            return 0;
        }
        let value = self.script[self.cursor % self.script.len()];
        self.cursor += 1;
        value % len
    }
}
