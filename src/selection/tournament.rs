use crate::chromosome::{Gene, Population};
use crate::error::Result;
use crate::rng::Random;
use crate::selection::selection_strategy::{check_inputs, SelectionStrategy};

/// Binary tournament selection.
///
/// Each parent is chosen by drawing two population indices uniformly at random,
/// with replacement, and keeping the candidate with the strictly higher fitness.
/// On a tie the second-drawn candidate wins. Every parent costs exactly two
/// `uniform_int` draws.
///
/// # Examples
///
/// ```
/// use evogen::chromosome::{Chromosome, Population};
/// use evogen::rng::RandomNumberGenerator;
/// use evogen::selection::{SelectionStrategy, TournamentSelection};
///
/// let population: Population<u8> = vec![
///     Chromosome::new(vec![1, 1]),
///     Chromosome::new(vec![0, 0]),
/// ]
/// .into();
/// let fitness = vec![2.0, 0.0];
/// let mut rng = RandomNumberGenerator::from_seed(1);
///
/// let parents = TournamentSelection.select(&population, &fitness, 6, &mut rng).unwrap();
/// assert_eq!(parents.len(), 6);
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, Default)]
pub struct TournamentSelection;

impl TournamentSelection {
    /// Runs a single tournament and returns the index of the winner.
    pub fn run_tournament<R: Random>(&self, fitness: &[f64], rng: &mut R) -> usize {
        let first = rng.uniform_int(fitness.len());
        let second = rng.uniform_int(fitness.len());

        if fitness[first] > fitness[second] {
            first
        } else {
            second
        }
    }
}

impl<G: Gene> SelectionStrategy<G> for TournamentSelection {
    fn select<R: Random>(
        &self,
        population: &Population<G>,
        fitness: &[f64],
        num_to_select: usize,
        rng: &mut R,
    ) -> Result<Population<G>> {
        check_inputs(population, fitness)?;

        let mut selected = Population::with_capacity(num_to_select);
        while selected.len() < num_to_select {
            let winner = self.run_tournament(fitness, rng);
            selected.push(population[winner].clone());
        }

        Ok(selected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chromosome::Chromosome;
    use crate::error::GeneticError;
    use crate::rng::RandomNumberGenerator;
    use crate::testing::{RecordingRandom, ScriptedRandom};

    fn population() -> Population<u8> {
        vec![
            Chromosome::new(vec![0, 0, 0]),
            Chromosome::new(vec![0, 0, 1]),
            Chromosome::new(vec![0, 1, 1]),
            Chromosome::new(vec![1, 1, 1]),
        ]
        .into()
    }

    #[test]
    fn test_run_tournament_prefers_strictly_higher() {
        let fitness = vec![0.5, 0.8, 0.3, 0.9];
        let mut rng = ScriptedRandom::ints(vec![3, 2, 2, 3]);

        assert_eq!(TournamentSelection.run_tournament(&fitness, &mut rng), 3);
        assert_eq!(TournamentSelection.run_tournament(&fitness, &mut rng), 3);
    }

    #[test]
    fn test_run_tournament_tie_goes_to_second_draw() {
        let fitness = vec![1.0, 1.0, 1.0, 1.0];
        let mut rng = ScriptedRandom::ints(vec![0, 2, 3, 1]);

        assert_eq!(TournamentSelection.run_tournament(&fitness, &mut rng), 2);
        assert_eq!(TournamentSelection.run_tournament(&fitness, &mut rng), 1);
    }

    #[test]
    fn test_select_follows_draws() {
        let fitness = vec![0.0, 1.0, 2.0, 3.0];
        let mut rng = ScriptedRandom::ints(vec![0, 1, 3, 2, 2, 2, 1, 0]);

        let parents = TournamentSelection
            .select(&population(), &fitness, 4, &mut rng)
            .unwrap();

        assert!(rng.is_exhausted());
        assert_eq!(parents[0], population()[1]);
        assert_eq!(parents[1], population()[3]);
        assert_eq!(parents[2], population()[2]);
        assert_eq!(parents[3], population()[1]);
    }

    #[test]
    fn test_winner_never_loses_to_its_opponent() {
        let fitness = vec![4.0, -1.0, 4.0, 2.5];
        let mut rng = RecordingRandom::new(RandomNumberGenerator::from_seed(99));
        let population = population();

        let parents = TournamentSelection
            .select(&population, &fitness, 200, &mut rng)
            .unwrap();

        assert_eq!(rng.ints.len(), 400);
        for (k, parent) in parents.iter().enumerate() {
            let first = rng.ints[2 * k];
            let second = rng.ints[2 * k + 1];
            let expected = if fitness[first] > fitness[second] { first } else { second };
            assert_eq!(parent, &population[expected]);
            assert!(fitness[expected] >= fitness[first] && fitness[expected] >= fitness[second]);
        }
    }

    #[test]
    fn test_tournament_selection_empty_population() {
        let population: Population<u8> = Population::new(Vec::new());
        let mut rng = RandomNumberGenerator::from_seed(1);

        let result = TournamentSelection.select(&population, &[], 3, &mut rng);
        assert!(matches!(result, Err(GeneticError::EmptyPopulation)));
    }

    #[test]
    fn test_tournament_selection_mismatched_lengths() {
        let mut rng = RandomNumberGenerator::from_seed(1);

        let result = TournamentSelection.select(&population(), &[0.5], 1, &mut rng);
        assert!(matches!(result, Err(GeneticError::Configuration(_))));
    }
}
