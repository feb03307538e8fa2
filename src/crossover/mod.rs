//! # Recombination
//!
//! The [`CrossoverStrategy`] trait defines how two parents produce two offspring.
//! Parents are mated by position: `2k` with `2k + 1`. This pairing is why the
//! parent population must be non-empty and of even size.
pub mod two_point;
pub mod uniform;

use std::fmt::Debug;

use crate::chromosome::{Chromosome, Gene, Population};
use crate::error::{GeneticError, Result};
use crate::rng::Random;

pub use two_point::TwoPointCrossover;
pub use uniform::UniformCrossover;

/// Recombines pairs of adjacent parents into offspring pairs.
pub trait CrossoverStrategy<G: Gene>: Debug {
    /// Mates two parents of equal length, producing two offspring of that length.
    fn mate<R: Random>(
        &self,
        parent1: &Chromosome<G>,
        parent2: &Chromosome<G>,
        rng: &mut R,
    ) -> (Chromosome<G>, Chromosome<G>);

    /// Mates every adjacent pair of parents, in order.
    ///
    /// # Errors
    ///
    /// Returns [`GeneticError::Configuration`] if the parent population is empty or
    /// of odd size, or if two mated parents differ in length.
    fn crossover<R: Random>(&self, parents: &Population<G>, rng: &mut R) -> Result<Population<G>> {
        if parents.is_empty() || parents.len() % 2 != 0 {
            return Err(GeneticError::Configuration(format!(
                "Crossover pairs parents by position and needs a non-empty even population, got {}",
                parents.len()
            )));
        }

        let mut offspring = Population::with_capacity(parents.len());
        for pair in parents.chromosomes().chunks_exact(2) {
            let (parent1, parent2) = (&pair[0], &pair[1]);
            if parent1.len() != parent2.len() {
                return Err(GeneticError::Configuration(format!(
                    "Cannot mate chromosomes of different lengths ({} and {})",
                    parent1.len(),
                    parent2.len()
                )));
            }

            let (offspring1, offspring2) = self.mate(parent1, parent2, rng);
            offspring.push(offspring1);
            offspring.push(offspring2);
        }

        Ok(offspring)
    }
}
