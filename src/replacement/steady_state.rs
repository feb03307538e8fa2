use crate::chromosome::{Gene, ScoredPopulation};
use crate::error::{GeneticError, Result};
use crate::replacement::{Elite, ReplacementStrategy};
use crate::rng::Random;

/// Steady-state replacement.
///
/// Two slots of the current population are candidates for replacement: its worst
/// chromosome and one picked uniformly at random (the same slot may be picked by
/// both). Each candidate is replaced only when its fitness is strictly lower than
/// the best-known fitness: the worst by the best offspring, the random pick by the
/// second-best offspring. Zero, one or two slots change and the population size
/// stays the same. When both picks name the same slot and the worst was replaced,
/// the slot keeps the best offspring.
///
/// Consumes exactly one `uniform_int` draw, before anything else.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, Default)]
pub struct SteadyStateReplacement;

impl<G: Gene> ReplacementStrategy<G> for SteadyStateReplacement {
    fn replace<R: Random>(
        &self,
        mut current: ScoredPopulation<G>,
        mut offspring: ScoredPopulation<G>,
        elite: Elite<'_, G>,
        rng: &mut R,
    ) -> Result<ScoredPopulation<G>> {
        if current.is_empty() {
            return Err(GeneticError::EmptyPopulation);
        }
        if offspring.len() < 2 {
            return Err(GeneticError::Configuration(format!(
                "Steady-state replacement needs at least two offspring, got {}",
                offspring.len()
            )));
        }

        let random_idx = rng.uniform_int(current.len());
        let worst_idx = current.worst_index()?;

        let (new_best1, new_best1_fitness) = offspring.remove(offspring.best_index()?);
        let (new_best2, new_best2_fitness) = offspring.remove(offspring.best_index()?);

        let worst_fitness = current.fitness()[worst_idx];
        let random_fitness = current.fitness()[random_idx];

        let mut worst_replaced = false;
        if worst_fitness < elite.fitness {
            current.replace(worst_idx, new_best1, new_best1_fitness);
            worst_replaced = true;
        }

        if random_fitness < elite.fitness && !(worst_replaced && random_idx == worst_idx) {
            current.replace(random_idx, new_best2, new_best2_fitness);
        }

        Ok(current)
    }
}
