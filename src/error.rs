//! # Error Types
//!
//! This module defines the error type returned by the evolutionary engine.
//! The engine has no error paths under normal operation; every variant below
//! marks either an invalid configuration or a hazard that would otherwise fail
//! silently (a division by a non-positive fitness total, an endless repair loop,
//! an unpaired parent).
//!
//! ## Examples
//!
//! Using the `Result` type:
//!
//! ```rust
//! use evogen::error::{GeneticError, Result};
//!
//! fn check_population_size(size: usize) -> Result<usize> {
//!     if size % 2 != 0 {
//!         return Err(GeneticError::Configuration(format!(
//!             "Population size must be even, got {}",
//!             size
//!         )));
//!     }
//!     Ok(size)
//! }
//!
//! assert!(check_population_size(4).is_ok());
//! assert!(check_population_size(5).is_err());
//! ```
//!
//! Using the `OptionExt` trait to convert `Option` to `Result`:
//!
//! ```rust
//! use evogen::error::{GeneticError, OptionExt};
//!
//! fn best_fitness(fitness: &[f64]) -> evogen::error::Result<f64> {
//!     fitness
//!         .iter()
//!         .cloned()
//!         .fold(None, |acc: Option<f64>, f| Some(acc.map_or(f, |a| a.max(f))))
//!         .ok_or_else_genetic(|| GeneticError::EmptyPopulation)
//! }
//!
//! assert_eq!(best_fitness(&[1.0, 3.0, 2.0]).unwrap(), 3.0);
//! assert!(best_fitness(&[]).is_err());
//! ```

use thiserror::Error;

/// Represents errors that can occur while running the genetic algorithm.
#[derive(Error, Debug)]
pub enum GeneticError {
    /// Error that occurs when an invalid configuration is provided.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Error that occurs when an empty population is encountered.
    #[error("Empty population error: Cannot operate on an empty population")]
    EmptyPopulation,

    /// Error that occurs when a fitness evaluation yields NaN or infinity.
    #[error("Fitness calculation error: {0}")]
    FitnessCalculation(String),

    /// Error that occurs when parent selection cannot proceed with the given fitness values.
    #[error("Selection error: {0}")]
    Selection(String),

    /// Error that occurs when forced mutation could not clear the infeasibility penalty.
    #[error("Repair failed: chromosome still infeasible after {passes} extra mutation passes")]
    RepairFailed {
        /// Number of extra mutation passes applied before giving up.
        passes: usize,
    },

    /// Error that occurs when targeted repair is handed an unusable locus.
    #[error("Repair error: {0}")]
    Repair(String),

    /// Error that occurs when an evolution process fails.
    #[error("Evolution error: {0}")]
    Evolution(String),
}

/// A specialized Result type for genetic algorithm operations.
pub type Result<T> = std::result::Result<T, GeneticError>;

/// Extension trait for Option to convert to Result with a custom error.
pub trait OptionExt<T> {
    /// Converts an `Option<T>` to a `Result<T, GeneticError>` using
    /// a closure to generate the error.
    fn ok_or_else_genetic<F>(self, err_fn: F) -> Result<T>
    where
        F: FnOnce() -> GeneticError;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_else_genetic<F>(self, err_fn: F) -> Result<T>
    where
        F: FnOnce() -> GeneticError,
    {
        self.ok_or_else(err_fn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repair_failed_message_mentions_passes() {
        let err = GeneticError::RepairFailed { passes: 7 };
        assert!(err.to_string().contains("7 extra mutation passes"));
    }

    #[test]
    fn test_option_ext() {
        let some: Option<usize> = Some(3);
        assert_eq!(some.ok_or_else_genetic(|| GeneticError::EmptyPopulation).unwrap(), 3);

        let none: Option<usize> = None;
        match none.ok_or_else_genetic(|| GeneticError::EmptyPopulation) {
            Err(GeneticError::EmptyPopulation) => {}
            other => panic!("Expected EmptyPopulation, got {:?}", other),
        }
    }
}
