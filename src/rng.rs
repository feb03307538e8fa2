//! # Random draw service
//!
//! Every stochastic operator of the engine consumes draws from a single stream
//! passed in explicitly as `&mut R where R: Random`. The order in which operators
//! consume draws is part of the observable behaviour: the same seed and the same
//! configuration replay the same run.
//!
//! ## Example
//!
//! ```rust
//! use evogen::rng::{Random, RandomNumberGenerator};
//!
//! let mut first = RandomNumberGenerator::from_seed(42);
//! let mut second = RandomNumberGenerator::from_seed(42);
//!
//! for _ in 0..5 {
//!     assert_eq!(first.uniform_int(10), second.uniform_int(10));
//!     assert_eq!(first.uniform_real(), second.uniform_real());
//! }
//! ```

use rand::{rngs::StdRng, Rng, SeedableRng};

/// Provides uniformly distributed draws to the genetic operators.
pub trait Random {
    /// Produces an integral value uniformly distributed on `[0, bound)`.
    ///
    /// # Panics
    ///
    /// Implementations may panic when `bound` is zero.
    fn uniform_int(&mut self, bound: usize) -> usize;

    /// Produces a real value uniformly distributed on `[0, 1)`.
    fn uniform_real(&mut self) -> f64;

    /// Flips a fair coin and returns true if it is "heads".
    ///
    /// Consumes exactly one `uniform_int(2)` draw.
    fn is_head_not_tails(&mut self) -> bool {
        self.uniform_int(2) == 1
    }
}

impl<R: Random + ?Sized> Random for &mut R {
    fn uniform_int(&mut self, bound: usize) -> usize {
        (**self).uniform_int(bound)
    }

    fn uniform_real(&mut self) -> f64 {
        (**self).uniform_real()
    }

    fn is_head_not_tails(&mut self) -> bool {
        (**self).is_head_not_tails()
    }
}

/// A wrapper around the `rand` crate's `StdRng` implementing [`Random`].
#[derive(Clone, Debug)]
pub struct RandomNumberGenerator {
    pub rng: StdRng,
}

impl RandomNumberGenerator {
    /// Creates a new `RandomNumberGenerator` instance seeded from the system entropy.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Creates a new `RandomNumberGenerator` instance with a specific seed.
    ///
    /// This is what reproducible runs and tests should use.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomNumberGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl Random for RandomNumberGenerator {
    fn uniform_int(&mut self, bound: usize) -> usize {
        assert!(bound > 0, "uniform_int requires a positive bound");
        self.rng.gen_range(0..bound)
    }

    fn uniform_real(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }
}
