use std::time::{Duration, Instant};

use tracing::{debug, info};

use super::options::{Crossover, EvolutionOptions, LogLevel, Replacement, Selection};
use crate::{
    chromosome::{Chromosome, Gene, Population, ScoredPopulation},
    crossover::{CrossoverStrategy, TwoPointCrossover, UniformCrossover},
    error::{GeneticError, Result},
    evaluator::{Evaluator, Solution},
    mutation::{MutationReport, Mutator},
    replacement::{Elite, ElitistReplacement, ReplacementStrategy, SteadyStateReplacement},
    rng::{Random, RandomNumberGenerator},
    selection::{SelectionStrategy, StochasticUniversalSampling, TournamentSelection},
};

/// Why a run stopped.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminationReason {
    /// Every configured generation ran.
    MaxGenerations,
    /// The wall-clock limit was reached after a generation.
    TimeLimit,
}

/// Counters accumulated over a whole run.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunStatistics {
    /// Loci changed by regular mutation passes.
    pub mutated_genes: usize,
    /// Extra full passes spent by forced-mutation repair.
    pub extra_mutation_passes: usize,
    /// Genes cleared by targeted repair.
    pub removed_genes: usize,
    /// Chromosomes still penalized after the repair pass cap.
    pub failed_repairs: usize,
    /// Generations that produced a new best solution.
    pub improvements: usize,
}

impl RunStatistics {
    fn absorb(&mut self, report: &MutationReport) {
        self.mutated_genes += report.mutated_genes;
        self.extra_mutation_passes += report.extra_mutation_passes;
        self.removed_genes += report.removed_genes;
        self.failed_repairs += report.failed_repairs;
    }
}

/// Outcome of a run: the best solution found and how the run went.
#[derive(Debug, Clone)]
pub struct EvolutionResult<G: Gene> {
    /// Decoded best solution.
    pub solution: Solution,
    /// Genotype of the best solution.
    pub chromosome: Chromosome<G>,
    /// Fitness of `chromosome`.
    pub fitness: f64,
    /// Generations completed.
    pub generations: usize,
    pub elapsed: Duration,
    pub termination: TerminationReason,
    /// Best cost after initialization and after every generation.
    pub history: Vec<f64>,
    pub statistics: RunStatistics,
}

/// Everything carried from one generation to the next.
///
/// The elite is the best chromosome of the current population and is refreshed
/// every generation. The best-known chromosome and solution only change when the
/// population best strictly exceeds the best solution's cost.
#[derive(Debug, Clone)]
pub struct EvolutionState<G: Gene> {
    population: ScoredPopulation<G>,
    elite_chromosome: Chromosome<G>,
    elite_fitness: f64,
    best_chromosome: Chromosome<G>,
    best_fitness: f64,
    best_solution: Solution,
    generation: usize,
    history: Vec<f64>,
    statistics: RunStatistics,
}

impl<G: Gene> EvolutionState<G> {
    pub fn population(&self) -> &ScoredPopulation<G> {
        &self.population
    }

    pub fn elite_chromosome(&self) -> &Chromosome<G> {
        &self.elite_chromosome
    }

    pub fn elite_fitness(&self) -> f64 {
        self.elite_fitness
    }

    pub fn best_chromosome(&self) -> &Chromosome<G> {
        &self.best_chromosome
    }

    pub fn best_fitness(&self) -> f64 {
        self.best_fitness
    }

    pub fn best_solution(&self) -> &Solution {
        &self.best_solution
    }

    pub fn generation(&self) -> usize {
        self.generation
    }

    pub fn history(&self) -> &[f64] {
        &self.history
    }

    pub fn statistics(&self) -> &RunStatistics {
        &self.statistics
    }
}

/// Runs the genetic algorithm for one evaluator under one set of options.
///
/// The launcher owns no random state: every entry point takes the random stream it
/// draws from, so a seeded generator reproduces a run exactly.
#[derive(Debug, Clone)]
pub struct EvolutionLauncher<E: Evaluator> {
    evaluator: E,
    options: EvolutionOptions,
}

impl<E: Evaluator> EvolutionLauncher<E> {
    /// Creates a launcher after validating `options`.
    ///
    /// # Errors
    ///
    /// Returns [`GeneticError::Configuration`] if the options fail
    /// [`EvolutionOptions::validate`].
    pub fn new(evaluator: E, options: EvolutionOptions) -> Result<Self> {
        options.validate()?;
        Ok(Self { evaluator, options })
    }

    pub fn evaluator(&self) -> &E {
        &self.evaluator
    }

    pub fn options(&self) -> &EvolutionOptions {
        &self.options
    }

    /// Builds `population_size` random chromosomes, one after the other.
    pub fn initialize_population<R: Random>(&self, rng: &mut R) -> Population<E::Gene> {
        (0..self.options.get_population_size())
            .map(|_| self.evaluator.random_chromosome(rng))
            .collect()
    }

    /// Scores every chromosome with the configured penalty.
    ///
    /// # Errors
    ///
    /// Returns [`GeneticError::FitnessCalculation`] on a non-finite fitness.
    pub fn evaluate(&self, population: Population<E::Gene>) -> Result<ScoredPopulation<E::Gene>> {
        let penalty = self.options.get_penalty().value();
        let fitness = population
            .iter()
            .map(|chromosome| {
                let fitness = self.evaluator.fitness(chromosome, penalty);
                if fitness.is_finite() {
                    Ok(fitness)
                } else {
                    Err(GeneticError::FitnessCalculation(format!(
                        "Non-finite fitness score encountered: {}",
                        fitness
                    )))
                }
            })
            .collect::<Result<Vec<_>>>()?;

        ScoredPopulation::new(population, fitness)
    }

    /// Creates and scores the initial population and takes its best chromosome as
    /// the best-known one.
    pub fn initialize<R: Random>(&self, rng: &mut R) -> Result<EvolutionState<E::Gene>> {
        let population = self.evaluate(self.initialize_population(rng))?;
        let best_idx = population.best_index()?;
        let best_chromosome = population.population()[best_idx].clone();
        let best_fitness = population.fitness()[best_idx];
        let best_solution = self.evaluator.decode(&best_chromosome);

        if self.options.get_log_level() != LogLevel::None {
            info!(generation = 0, cost = best_solution.cost, "initial best solution");
        }

        Ok(EvolutionState {
            population,
            elite_chromosome: best_chromosome.clone(),
            elite_fitness: best_fitness,
            best_chromosome,
            best_fitness,
            history: vec![best_solution.cost],
            best_solution,
            generation: 0,
            statistics: RunStatistics::default(),
        })
    }

    /// Runs one generation: selection, crossover, mutation with repair,
    /// replacement against the elite, then the elite and best-known updates.
    pub fn evolve_generation<R: Random>(
        &self,
        mut state: EvolutionState<E::Gene>,
        rng: &mut R,
    ) -> Result<EvolutionState<E::Gene>> {
        let population_size = self.options.get_population_size();

        let parents = self.select(&state.population, population_size, rng)?;
        let offspring = self.recombine(&parents, rng)?;

        let mutator = self.mutator();
        let (offspring, report) = mutator.mutate(&self.evaluator, offspring, rng)?;
        state.statistics.absorb(&report);

        let offspring = self.evaluate(offspring)?;
        let elite = Elite {
            chromosome: &state.elite_chromosome,
            fitness: state.elite_fitness,
        };
        let next = self.replace(state.population, offspring, elite, rng)?;

        if next.len() != population_size {
            return Err(GeneticError::Evolution(format!(
                "Replacement produced {} chromosomes instead of {}",
                next.len(),
                population_size
            )));
        }

        state.generation += 1;
        let best_idx = next.best_index()?;
        let generation_best = next.fitness()[best_idx];

        if self.options.get_log_level() == LogLevel::Verbose {
            let worst = next.fitness()[next.worst_index()?];
            debug!(
                generation = state.generation,
                best = generation_best,
                worst,
                "generation complete"
            );
        }

        state.elite_chromosome = next.population()[best_idx].clone();
        state.elite_fitness = generation_best;

        if generation_best > state.best_solution.cost {
            state.best_chromosome = state.elite_chromosome.clone();
            state.best_fitness = generation_best;
            state.best_solution = self.evaluator.decode(&state.best_chromosome);
            state.statistics.improvements += 1;

            if self.options.get_log_level() != LogLevel::None {
                info!(
                    generation = state.generation,
                    cost = state.best_solution.cost,
                    "new best solution"
                );
            }
        }

        state.history.push(state.best_solution.cost);
        state.population = next;

        Ok(state)
    }

    /// Runs the whole algorithm, drawing every random choice from `rng`.
    ///
    /// Stops after `max_generations` generations or, checked once per generation,
    /// when the elapsed time reaches `time_limit`.
    ///
    /// # Errors
    ///
    /// Propagates any error raised by an operator, such as SUS on negative fitness
    /// or an exhausted strict repair.
    pub fn run<R: Random>(&self, rng: &mut R) -> Result<EvolutionResult<E::Gene>> {
        let start = Instant::now();
        let max_generations = self.options.get_max_generations();
        let time_limit = self.options.get_time_limit();

        let mut state = self.initialize(rng)?;
        let mut termination = TerminationReason::MaxGenerations;

        while state.generation < max_generations {
            state = self.evolve_generation(state, rng)?;

            if state.generation < max_generations && start.elapsed() >= time_limit {
                termination = TerminationReason::TimeLimit;
                if self.options.get_log_level() != LogLevel::None {
                    info!(
                        generation = state.generation,
                        limit = ?time_limit,
                        "time limit reached, stopping early"
                    );
                }
                break;
            }
        }

        Ok(EvolutionResult {
            solution: state.best_solution,
            chromosome: state.best_chromosome,
            fitness: state.best_fitness,
            generations: state.generation,
            elapsed: start.elapsed(),
            termination,
            history: state.history,
            statistics: state.statistics,
        })
    }

    /// Runs with a fresh generator seeded from `seed`.
    pub fn run_with_seed(&self, seed: u64) -> Result<EvolutionResult<E::Gene>> {
        let mut rng = RandomNumberGenerator::from_seed(seed);
        self.run(&mut rng)
    }

    fn mutator(&self) -> Mutator {
        Mutator::new(self.options.get_mutation_rate())
            .with_repair(self.options.get_repair(), self.options.get_penalty().value())
            .with_max_repair_passes(self.options.get_max_repair_passes())
            .with_strict_repair(self.options.is_strict_repair())
    }

    fn select<R: Random>(
        &self,
        population: &ScoredPopulation<E::Gene>,
        num_to_select: usize,
        rng: &mut R,
    ) -> Result<Population<E::Gene>> {
        let (chromosomes, fitness) = (population.population(), population.fitness());
        match self.options.get_selection() {
            Selection::Tournament => {
                TournamentSelection.select(chromosomes, fitness, num_to_select, rng)
            }
            Selection::Sus => StochasticUniversalSampling::new(self.options.get_sus_scaling())
                .select(chromosomes, fitness, num_to_select, rng),
        }
    }

    fn recombine<R: Random>(
        &self,
        parents: &Population<E::Gene>,
        rng: &mut R,
    ) -> Result<Population<E::Gene>> {
        match self.options.get_crossover() {
            Crossover::TwoPoint => TwoPointCrossover.crossover(parents, rng),
            Crossover::Uniform => UniformCrossover.crossover(parents, rng),
        }
    }

    fn replace<R: Random>(
        &self,
        current: ScoredPopulation<E::Gene>,
        offspring: ScoredPopulation<E::Gene>,
        elite: Elite<'_, E::Gene>,
        rng: &mut R,
    ) -> Result<ScoredPopulation<E::Gene>> {
        match self.options.get_replacement() {
            Replacement::Elitist => ElitistReplacement.replace(current, offspring, elite, rng),
            Replacement::SteadyState => {
                SteadyStateReplacement.replace(current, offspring, elite, rng)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluator::LARGE_NEGATIVE_PENALTY;
    use crate::testing::ScriptedRandom;

    struct IndexSum;

    impl Evaluator for IndexSum {
        type Gene = u8;

        fn domain_size(&self) -> usize {
            4
        }

        fn cost(&self, elements: &[usize]) -> f64 {
            elements.iter().sum::<usize>() as f64
        }
    }

    /// Feasible with at most two selected loci; cost is the sum of `locus + 1`.
    struct AtMostTwo;

    impl Evaluator for AtMostTwo {
        type Gene = u8;

        fn domain_size(&self) -> usize {
            4
        }

        fn cost(&self, elements: &[usize]) -> f64 {
            elements.iter().map(|&e| (e + 1) as f64).sum()
        }

        fn is_feasible(&self, solution: &Solution) -> bool {
            solution.len() <= 2
        }
    }

    struct NotANumber;

    impl Evaluator for NotANumber {
        type Gene = u8;

        fn domain_size(&self) -> usize {
            2
        }

        fn cost(&self, _elements: &[usize]) -> f64 {
            f64::NAN
        }
    }

    fn launcher(options: EvolutionOptions) -> EvolutionLauncher<IndexSum> {
        EvolutionLauncher::new(IndexSum, options).unwrap()
    }

    #[test]
    fn test_new_rejects_invalid_options() {
        let result = EvolutionLauncher::new(IndexSum, EvolutionOptions::new(1, 3, 0.1));
        assert!(matches!(result, Err(GeneticError::Configuration(_))));
    }

    #[test]
    fn test_initialize_tracks_population_best() {
        let launcher = launcher(EvolutionOptions::new(1, 2, 0.0));
        let mut rng = ScriptedRandom::ints(vec![0, 1, 0, 0, 1, 0, 0, 1]);

        let state = launcher.initialize(&mut rng).unwrap();

        assert!(rng.is_exhausted());
        assert_eq!(state.population().fitness(), &[1.0, 3.0]);
        assert_eq!(state.best_chromosome().genes(), &[1, 0, 0, 1]);
        assert_eq!(state.best_fitness(), 3.0);
        assert_eq!(state.best_solution().elements, vec![0, 3]);
        assert_eq!(state.history(), &[3.0]);
        assert_eq!(state.generation(), 0);
    }

    #[test]
    fn test_evaluate_rejects_non_finite_fitness() {
        let launcher = EvolutionLauncher::new(NotANumber, EvolutionOptions::new(1, 2, 0.0)).unwrap();
        let population: Population<u8> = vec![Chromosome::new(vec![1, 0])].into();

        let result = launcher.evaluate(population);
        assert!(matches!(result, Err(GeneticError::FitnessCalculation(_))));
    }

    #[test]
    fn test_tie_does_not_replace_best() {
        // [1,1,0,0] is the initial best at cost 1. The generation produces
        // [0,1,0,0], also cost 1, which must not take over.
        let launcher = launcher(EvolutionOptions::new(1, 2, 0.5));
        let mut rng = ScriptedRandom::new(
            vec![1, 1, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0],
            vec![0.1, 0.9, 0.9, 0.9, 0.1, 0.1, 0.9, 0.9],
        );

        let state = launcher.initialize(&mut rng).unwrap();
        let state = launcher.evolve_generation(state, &mut rng).unwrap();

        assert!(rng.is_exhausted());
        assert_eq!(state.generation(), 1);
        assert_eq!(state.population().population()[0].genes(), &[0, 1, 0, 0]);
        assert_eq!(state.population().population()[1].genes(), &[1, 1, 0, 0]);
        assert_eq!(state.elite_chromosome().genes(), &[0, 1, 0, 0]);
        assert_eq!(state.elite_fitness(), 1.0);
        assert_eq!(state.best_chromosome().genes(), &[1, 1, 0, 0]);
        assert_eq!(state.statistics().mutated_genes, 3);
        assert_eq!(state.statistics().improvements, 0);
        assert_eq!(state.history(), &[1.0, 1.0]);
    }

    #[test]
    fn test_elite_follows_population_best_after_infeasible_start() {
        let launcher = EvolutionLauncher::new(AtMostTwo, EvolutionOptions::new(2, 2, 0.5)).unwrap();
        let mut rng = ScriptedRandom::new(
            vec![1, 1, 1, 1, 1, 1, 1, 0, 0, 1, 1, 0, 0, 0, 0, 1, 1, 1, 0, 0],
            vec![
                0.1, 0.9, 0.9, 0.9, 0.1, 0.1, 0.9, 0.9, // [0,1,1,0] and [0,0,1,1]
                0.9, 0.9, 0.1, 0.9, 0.1, 0.9, 0.9, 0.9, // [0,0,0,1] and [1,0,1,1]
            ],
        );

        let state = launcher.initialize(&mut rng).unwrap();
        assert_eq!(state.elite_fitness(), LARGE_NEGATIVE_PENALTY);
        assert_eq!(state.best_solution().cost, 10.0);

        let state = launcher.evolve_generation(state, &mut rng).unwrap();
        assert_eq!(state.population().fitness(), &[5.0, 7.0]);
        assert_eq!(state.elite_chromosome().genes(), &[0, 0, 1, 1]);
        assert_eq!(state.elite_fitness(), 7.0);
        // 7 does not beat the infeasible initial cost of 10.
        assert_eq!(state.best_chromosome().genes(), &[1, 1, 1, 1]);

        let state = launcher.evolve_generation(state, &mut rng).unwrap();
        assert!(rng.is_exhausted());
        assert_eq!(state.population().population()[1].genes(), &[0, 0, 1, 1]);
        assert_eq!(state.population().fitness(), &[4.0, 7.0]);
        assert_eq!(state.elite_fitness(), 7.0);
        assert_eq!(state.best_solution().cost, 10.0);
    }

    #[test]
    fn test_run_with_zero_generations_returns_initial_best() {
        let launcher = launcher(EvolutionOptions::new(0, 4, 0.1));

        let result = launcher.run_with_seed(3).unwrap();

        assert_eq!(result.generations, 0);
        assert_eq!(result.termination, TerminationReason::MaxGenerations);
        assert_eq!(result.history.len(), 1);
        assert_eq!(result.solution, IndexSum.decode(&result.chromosome));
    }
}
