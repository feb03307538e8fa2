use crate::chromosome::{Gene, ScoredPopulation};
use crate::error::Result;
use crate::replacement::{Elite, ReplacementStrategy};
use crate::rng::Random;

/// Elitist generational replacement.
///
/// The offspring become the next population, except that the worst offspring is
/// overwritten in place by the best-known chromosome when its fitness is strictly
/// lower. Consumes no draws.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, Default)]
pub struct ElitistReplacement;

impl<G: Gene> ReplacementStrategy<G> for ElitistReplacement {
    fn replace<R: Random>(
        &self,
        _current: ScoredPopulation<G>,
        mut offspring: ScoredPopulation<G>,
        elite: Elite<'_, G>,
        _rng: &mut R,
    ) -> Result<ScoredPopulation<G>> {
        let worst = offspring.worst_index()?;
        if offspring.fitness()[worst] < elite.fitness {
            offspring.replace(worst, elite.chromosome.clone(), elite.fitness);
        }

        Ok(offspring)
    }
}
