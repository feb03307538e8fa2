//! A generic genetic algorithm engine for fixed-length chromosomes.
//!
//! Problems plug in through the [`Evaluator`] trait; the engine supplies
//! tournament and SUS selection, two-point and uniform crossover, mutation with
//! optional repair, and elitist or steady-state replacement. Every random choice
//! is drawn from an explicit [`Random`] source, so a seeded run is reproducible.
//!
//! ```rust
//! use evogen::{Evaluator, EvolutionLauncher, EvolutionOptions};
//!
//! struct CountOnes;
//!
//! impl Evaluator for CountOnes {
//!     type Gene = u8;
//!
//!     fn domain_size(&self) -> usize {
//!         16
//!     }
//!
//!     fn cost(&self, elements: &[usize]) -> f64 {
//!         elements.len() as f64
//!     }
//! }
//!
//! let options = EvolutionOptions::new(50, 20, 0.05);
//! let launcher = EvolutionLauncher::new(CountOnes, options).unwrap();
//! let result = launcher.run_with_seed(42).unwrap();
//!
//! assert!(result.solution.cost >= result.history[0]);
//! ```
pub mod chromosome;
pub mod crossover;
pub mod error;
pub mod evaluator;
pub mod evolution;
pub mod mutation;
pub mod replacement;
pub mod rng;
pub mod selection;

#[cfg(test)]
mod testing;

// Re-export commonly used types for convenience
pub use chromosome::{Chromosome, Gene, Population, ScoredPopulation};
pub use error::{GeneticError, OptionExt, Result};
pub use evaluator::{Evaluator, PenaltyPolicy, Solution};
pub use evolution::{
    EvolutionLauncher, EvolutionLauncherBuilder, EvolutionOptions, EvolutionResult,
    TerminationReason,
};
pub use mutation::RepairPolicy;
pub use rng::{Random, RandomNumberGenerator};
