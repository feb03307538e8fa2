//! # Mutation and repair
//!
//! The [`Mutator`] visits every locus of every offspring and, with probability
//! `mutation_rate`, hands it to [`Evaluator::mutate_gene`]. One `uniform_real` draw
//! is consumed per locus whether or not it mutates.
//!
//! Two repair policies can follow each offspring's own mutation pass:
//!
//! - [`RepairPolicy::ForcedMutation`] repeats full mutation passes while the
//!   chromosome's fitness stays at or below the infeasibility penalty, up to
//!   `max_repair_passes` passes.
//! - [`RepairPolicy::TargetedRemoval`] clears the locus reported by
//!   [`Evaluator::find_forbidden_value`] until none is reported. Every step clears a
//!   selected gene, so the loop ends after at most `domain_size` steps.

use tracing::warn;

use crate::chromosome::{Chromosome, Gene, Population};
use crate::error::{GeneticError, Result};
use crate::evaluator::Evaluator;
use crate::rng::Random;

/// Extra forced-mutation passes allowed per chromosome when none is configured.
pub const DEFAULT_MAX_REPAIR_PASSES: usize = 1000;

/// Repair applied to an offspring after its mutation pass.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RepairPolicy {
    #[default]
    None,
    /// Extra full mutation passes until fitness clears the penalty threshold.
    ForcedMutation,
    /// Clear forbidden loci one at a time until the evaluator reports none.
    TargetedRemoval,
}

/// What a repair attempt did to a chromosome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepairOutcome {
    /// The chromosome needed no repair.
    Untouched,
    /// Forced mutation cleared the penalty after this many extra passes.
    Repaired { passes: usize },
    /// Targeted repair cleared this many forbidden genes.
    Removed { genes: usize },
    /// Forced mutation hit the pass cap with the chromosome still penalized.
    Exhausted { passes: usize },
}

/// Counters accumulated over one mutation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MutationReport {
    pub mutated_genes: usize,
    pub extra_mutation_passes: usize,
    pub removed_genes: usize,
    pub failed_repairs: usize,
}

impl MutationReport {
    fn record(&mut self, outcome: RepairOutcome) {
        match outcome {
            RepairOutcome::Untouched => {}
            RepairOutcome::Repaired { passes } => self.extra_mutation_passes += passes,
            RepairOutcome::Removed { genes } => self.removed_genes += genes,
            RepairOutcome::Exhausted { passes } => {
                self.extra_mutation_passes += passes;
                self.failed_repairs += 1;
            }
        }
    }
}

/// Per-locus mutation with optional infeasibility repair.
#[derive(Debug, Clone)]
pub struct Mutator {
    mutation_rate: f64,
    repair: RepairPolicy,
    penalty: f64,
    max_repair_passes: usize,
    strict_repair: bool,
}

impl Mutator {
    /// Creates a mutator without repair.
    pub fn new(mutation_rate: f64) -> Self {
        Self {
            mutation_rate,
            repair: RepairPolicy::None,
            penalty: crate::evaluator::LARGE_NEGATIVE_PENALTY,
            max_repair_passes: DEFAULT_MAX_REPAIR_PASSES,
            strict_repair: false,
        }
    }

    /// Sets the repair policy and the penalty value forced mutation tests against.
    pub fn with_repair(mut self, repair: RepairPolicy, penalty: f64) -> Self {
        self.repair = repair;
        self.penalty = penalty;
        self
    }

    pub fn with_max_repair_passes(mut self, max_repair_passes: usize) -> Self {
        self.max_repair_passes = max_repair_passes;
        self
    }

    /// Makes an exhausted forced-mutation repair fail the step with
    /// [`GeneticError::RepairFailed`] instead of being counted and skipped.
    pub fn with_strict_repair(mut self, strict_repair: bool) -> Self {
        self.strict_repair = strict_repair;
        self
    }

    pub fn mutation_rate(&self) -> f64 {
        self.mutation_rate
    }

    pub fn repair(&self) -> RepairPolicy {
        self.repair
    }

    pub fn max_repair_passes(&self) -> usize {
        self.max_repair_passes
    }

    /// One mutation pass over every locus. Returns the number of mutated loci.
    pub fn mutate_chromosome<E, R>(
        &self,
        evaluator: &E,
        chromosome: &mut Chromosome<E::Gene>,
        rng: &mut R,
    ) -> usize
    where
        E: Evaluator,
        R: Random,
    {
        let mut mutated = 0;
        for locus in 0..chromosome.len() {
            if rng.uniform_real() < self.mutation_rate {
                evaluator.mutate_gene(chromosome, locus);
                mutated += 1;
            }
        }
        mutated
    }

    /// Applies extra mutation passes while the chromosome's fitness is at or below
    /// the penalty, stopping after `max_repair_passes` passes.
    pub fn force_feasibility<E, R>(
        &self,
        evaluator: &E,
        chromosome: &mut Chromosome<E::Gene>,
        rng: &mut R,
    ) -> RepairOutcome
    where
        E: Evaluator,
        R: Random,
    {
        let mut passes = 0;
        while evaluator.fitness(chromosome, self.penalty) <= self.penalty {
            if passes == self.max_repair_passes {
                return RepairOutcome::Exhausted { passes };
            }
            self.mutate_chromosome(evaluator, chromosome, rng);
            passes += 1;
        }

        if passes == 0 {
            RepairOutcome::Untouched
        } else {
            RepairOutcome::Repaired { passes }
        }
    }

    /// Clears every locus the evaluator reports as forbidden, one at a time.
    ///
    /// # Errors
    ///
    /// Returns [`GeneticError::Repair`] if the evaluator reports a locus outside the
    /// chromosome or one that is not selected, since clearing it cannot make progress.
    pub fn remove_forbidden<E>(
        &self,
        evaluator: &E,
        chromosome: &mut Chromosome<E::Gene>,
    ) -> Result<RepairOutcome>
    where
        E: Evaluator,
    {
        let mut removed = 0;
        while let Some(locus) = evaluator.find_forbidden_value(&evaluator.decode(chromosome)) {
            if locus >= chromosome.len() {
                return Err(GeneticError::Repair(format!(
                    "Forbidden locus {} is outside a chromosome of length {}",
                    locus,
                    chromosome.len()
                )));
            }
            if !chromosome[locus].is_set() {
                return Err(GeneticError::Repair(format!(
                    "Forbidden locus {} is not selected, clearing it cannot restore feasibility",
                    locus
                )));
            }

            chromosome[locus] = <E::Gene as Gene>::ZERO;
            removed += 1;
        }

        Ok(if removed == 0 {
            RepairOutcome::Untouched
        } else {
            RepairOutcome::Removed { genes: removed }
        })
    }

    /// Repairs a chromosome according to the configured policy.
    pub fn repair_chromosome<E, R>(
        &self,
        evaluator: &E,
        chromosome: &mut Chromosome<E::Gene>,
        rng: &mut R,
    ) -> Result<RepairOutcome>
    where
        E: Evaluator,
        R: Random,
    {
        match self.repair {
            RepairPolicy::None => Ok(RepairOutcome::Untouched),
            RepairPolicy::ForcedMutation => {
                let outcome = self.force_feasibility(evaluator, chromosome, rng);
                if let RepairOutcome::Exhausted { passes } = outcome {
                    if self.strict_repair {
                        return Err(GeneticError::RepairFailed { passes });
                    }
                    warn!(passes, "could not repair chromosome, keeping it penalized");
                }
                Ok(outcome)
            }
            RepairPolicy::TargetedRemoval => self.remove_forbidden(evaluator, chromosome),
        }
    }

    /// Mutates, then repairs, every offspring in order.
    pub fn mutate<E, R>(
        &self,
        evaluator: &E,
        mut offspring: Population<E::Gene>,
        rng: &mut R,
    ) -> Result<(Population<E::Gene>, MutationReport)>
    where
        E: Evaluator,
        R: Random,
    {
        let mut report = MutationReport::default();
        for chromosome in offspring.iter_mut() {
            report.mutated_genes += self.mutate_chromosome(evaluator, chromosome, rng);
            let outcome = self.repair_chromosome(evaluator, chromosome, rng)?;
            report.record(outcome);
        }

        Ok((offspring, report))
    }
}
