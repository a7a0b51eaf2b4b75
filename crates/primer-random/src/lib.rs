//! Bounded pseudo-random number generation for the primer walkthrough.
//!
//! [`BoundedGenerator`] owns its RNG state and hands out values strictly
//! below a configured upper bound. Seeded construction makes a sequence
//! reproducible across runs.

#![warn(missing_docs)]

pub mod error;
pub use error::RandomError;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

/// A pseudo-random number generator bounded to `0..upper`.
#[derive(Debug)]
pub struct BoundedGenerator {
    rng: StdRng,
    upper: u32,
}

impl BoundedGenerator {
    /// Creates a generator seeded from the operating system.
    ///
    /// # Arguments
    ///
    /// * `upper`: Exclusive upper bound for every sampled value.
    ///
    /// # Errors
    ///
    /// Returns [`RandomError::InvalidUpperBound`] if `upper` is zero, since
    /// the range `0..0` contains no values to sample.
    pub fn new(upper: u32) -> Result<Self, RandomError> {
        if upper == 0 {
            return Err(RandomError::InvalidUpperBound("must be at least 1"));
        }
        debug!(upper, "Initialized bounded generator from OS entropy");
        Ok(Self {
            rng: StdRng::from_rng(&mut rand::rng()),
            upper,
        })
    }

    /// Creates a generator with a fixed seed, for reproducible sequences.
    ///
    /// # Errors
    ///
    /// Returns [`RandomError::InvalidUpperBound`] if `upper` is zero.
    pub fn with_seed(upper: u32, seed: u64) -> Result<Self, RandomError> {
        if upper == 0 {
            return Err(RandomError::InvalidUpperBound("must be at least 1"));
        }
        debug!(upper, seed, "Initialized bounded generator from seed");
        Ok(Self {
            rng: StdRng::seed_from_u64(seed),
            upper,
        })
    }

    /// Returns the exclusive upper bound of this generator.
    #[must_use]
    pub const fn upper(&self) -> u32 {
        self.upper
    }

    /// Draws the next value in `0..upper`.
    pub fn sample(&mut self) -> u32 {
        self.rng.random_range(0..self.upper)
    }

    /// Draws `count` values in `0..upper`.
    pub fn sequence(&mut self, count: usize) -> Vec<u32> {
        let mut values = Vec::with_capacity(count);
        for _ in 0..count {
            values.push(self.sample());
        }
        values
    }
}
