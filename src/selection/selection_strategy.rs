use std::fmt::Debug;

use crate::chromosome::{Gene, Population};
use crate::error::{GeneticError, Result};
use crate::rng::Random;

/// Trait for parent selection strategies.
///
/// A selection strategy picks a multiset of parents from the population based on
/// the fitness of each chromosome. The order of the returned parents matters: the
/// recombiner mates positions `2k` and `2k + 1`.
///
/// # Examples
///
/// ```
/// use evogen::chromosome::{Chromosome, Population};
/// use evogen::rng::RandomNumberGenerator;
/// use evogen::selection::{SelectionStrategy, TournamentSelection};
/// use evogen::error::Result;
///
/// fn main() -> Result<()> {
///     let population: Population<u8> = vec![
///         Chromosome::new(vec![0, 0, 1]),
///         Chromosome::new(vec![0, 1, 1]),
///         Chromosome::new(vec![1, 1, 1]),
///         Chromosome::new(vec![0, 0, 0]),
///     ]
///     .into();
///     let fitness = vec![2.0, 3.0, 3.0, 0.0];
///     let mut rng = RandomNumberGenerator::from_seed(5);
///
///     let parents = TournamentSelection.select(&population, &fitness, 4, &mut rng)?;
///
///     assert_eq!(parents.len(), 4);
///     Ok(())
/// }
/// ```
pub trait SelectionStrategy<G: Gene>: Debug {
    /// Selects `num_to_select` parents from the population.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The population is empty
    /// - The fitness vector length doesn't match the population length
    /// - The fitness values cannot drive this strategy
    fn select<R: Random>(
        &self,
        population: &Population<G>,
        fitness: &[f64],
        num_to_select: usize,
        rng: &mut R,
    ) -> Result<Population<G>>;
}

pub(crate) fn check_inputs<G: Gene>(population: &Population<G>, fitness: &[f64]) -> Result<()> {
    if population.is_empty() {
        return Err(GeneticError::EmptyPopulation);
    }

    if fitness.len() != population.len() {
        return Err(GeneticError::Configuration(format!(
            "Fitness vector length ({}) doesn't match population length ({})",
            fitness.len(),
            population.len()
        )));
    }

    Ok(())
}
