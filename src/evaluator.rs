//! # Evaluator
//!
//! The [`Evaluator`] trait is the capability set a concrete problem supplies to the
//! engine: the domain size, the decoding of a genotype into a [`Solution`], its cost,
//! feasibility checks, and the problem-specific random chromosome and gene mutation.
//! Only `domain_size` and `cost` are required; the rest default to the binary
//! subset-selection encoding, where a set gene selects its locus.
//!
//! ## Example
//!
//! ```rust
//! use evogen::chromosome::Chromosome;
//! use evogen::evaluator::{Evaluator, PenaltyPolicy};
//!
//! /// Maximizes the sum of the selected indices, with at most two selections.
//! struct CappedIndexSum;
//!
//! impl Evaluator for CappedIndexSum {
//!     type Gene = u8;
//!
//!     fn domain_size(&self) -> usize {
//!         4
//!     }
//!
//!     fn cost(&self, elements: &[usize]) -> f64 {
//!         elements.iter().sum::<usize>() as f64
//!     }
//!
//!     fn is_feasible(&self, solution: &evogen::evaluator::Solution) -> bool {
//!         solution.len() <= 2
//!     }
//! }
//!
//! let evaluator = CappedIndexSum;
//! let penalty = PenaltyPolicy::LargeNegative.value();
//!
//! let feasible = Chromosome::new(vec![0u8, 0, 1, 1]);
//! assert_eq!(evaluator.fitness(&feasible, penalty), 5.0);
//!
//! let infeasible = Chromosome::new(vec![1u8, 1, 1, 0]);
//! assert_eq!(evaluator.fitness(&infeasible, penalty), penalty);
//! ```

use std::fmt;

use crate::chromosome::{Chromosome, Gene};
use crate::rng::Random;

/// Fitness assigned to an infeasible chromosome under [`PenaltyPolicy::LargeNegative`].
pub const LARGE_NEGATIVE_PENALTY: f64 = -5000.0;

/// Fitness assigned to an infeasible chromosome under [`PenaltyPolicy::Zero`].
pub const ZERO_PENALTY: f64 = 0.0;

/// Selects the fitness value given to infeasible chromosomes.
///
/// `LargeNegative` keeps infeasible chromosomes far below any feasible one, but makes
/// fitness-proportional selection ill-defined unless fitness is shifted first.
/// `Zero` keeps fitness non-negative for non-negative cost functions, but an infeasible
/// chromosome then ties with an empty feasible solution.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PenaltyPolicy {
    LargeNegative,
    Zero,
    Custom(f64),
}

impl PenaltyPolicy {
    /// The fitness value an infeasible chromosome receives.
    pub fn value(&self) -> f64 {
        match self {
            PenaltyPolicy::LargeNegative => LARGE_NEGATIVE_PENALTY,
            PenaltyPolicy::Zero => ZERO_PENALTY,
            PenaltyPolicy::Custom(value) => *value,
        }
    }
}

impl Default for PenaltyPolicy {
    fn default() -> Self {
        PenaltyPolicy::LargeNegative
    }
}

/// A decoded candidate: the selected domain indices and their true objective cost.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    pub cost: f64,
    pub elements: Vec<usize>,
}

impl Solution {
    pub fn new(elements: Vec<usize>, cost: f64) -> Self {
        Self { cost, elements }
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn contains(&self, element: usize) -> bool {
        self.elements.contains(&element)
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Solution: cost=[{}], size=[{}], elements={:?}",
            self.cost,
            self.elements.len(),
            self.elements
        )
    }
}

/// Problem-specific capabilities consumed by the engine.
///
/// Implementations must be deterministic: decoding the same chromosome twice yields
/// the same solution and cost.
pub trait Evaluator {
    /// Element type of the chromosomes this problem is encoded with.
    type Gene: Gene;

    /// Number of loci of every chromosome. Constant for the evaluator's lifetime.
    fn domain_size(&self) -> usize;

    /// True objective cost of the solution selecting `elements`.
    fn cost(&self, elements: &[usize]) -> f64;

    /// Maps a genotype to its phenotype, attaching the true cost.
    fn decode(&self, chromosome: &Chromosome<Self::Gene>) -> Solution {
        let elements = chromosome.selected_loci();
        let cost = self.cost(&elements);
        Solution::new(elements, cost)
    }

    /// Fitness of a chromosome: the decoded cost when feasible, `penalty` otherwise.
    fn fitness(&self, chromosome: &Chromosome<Self::Gene>, penalty: f64) -> f64 {
        let solution = self.decode(chromosome);
        if self.is_feasible(&solution) {
            solution.cost
        } else {
            penalty
        }
    }

    fn is_feasible(&self, _solution: &Solution) -> bool {
        true
    }

    /// Returns a selected locus whose presence violates a constraint, if any.
    fn find_forbidden_value(&self, _solution: &Solution) -> Option<usize> {
        None
    }

    /// Generates a chromosome with one fair coin per locus.
    fn random_chromosome<R: Random>(&self, rng: &mut R) -> Chromosome<Self::Gene> {
        (0..self.domain_size())
            .map(|_| {
                if rng.uniform_int(2) == 1 {
                    <Self::Gene as Gene>::ONE
                } else {
                    <Self::Gene as Gene>::ZERO
                }
            })
            .collect::<Vec<_>>()
            .into()
    }

    /// Mutates a single locus in place. Binary genotypes flip the bit.
    fn mutate_gene(&self, chromosome: &mut Chromosome<Self::Gene>, locus: usize) {
        chromosome[locus] = chromosome[locus].flipped();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::RandomNumberGenerator;

    struct IndexSum {
        size: usize,
    }

    impl Evaluator for IndexSum {
        type Gene = u8;

        fn domain_size(&self) -> usize {
            self.size
        }

        fn cost(&self, elements: &[usize]) -> f64 {
            elements.iter().sum::<usize>() as f64
        }
    }

    struct NoLocusZero;

    impl Evaluator for NoLocusZero {
        type Gene = i32;

        fn domain_size(&self) -> usize {
            3
        }

        fn cost(&self, elements: &[usize]) -> f64 {
            elements.len() as f64
        }

        fn is_feasible(&self, solution: &Solution) -> bool {
            !solution.contains(0)
        }
    }

    #[test]
    fn test_decode_collects_set_loci() {
        let evaluator = IndexSum { size: 5 };
        let solution = evaluator.decode(&Chromosome::new(vec![0, 1, 0, 1, 1]));
        assert_eq!(solution.elements, vec![1, 3, 4]);
        assert_eq!(solution.cost, 8.0);
    }

    #[test]
    fn test_fitness_uses_penalty_for_infeasible() {
        let evaluator = NoLocusZero;
        let infeasible = Chromosome::new(vec![1, 1, 0]);
        let feasible = Chromosome::new(vec![0, 1, 1]);

        assert_eq!(
            evaluator.fitness(&infeasible, PenaltyPolicy::LargeNegative.value()),
            LARGE_NEGATIVE_PENALTY
        );
        assert_eq!(evaluator.fitness(&infeasible, PenaltyPolicy::Zero.value()), 0.0);
        assert_eq!(evaluator.fitness(&feasible, PenaltyPolicy::Zero.value()), 2.0);
    }

    #[test]
    fn test_random_chromosome_has_domain_length() {
        let evaluator = IndexSum { size: 17 };
        let mut rng = RandomNumberGenerator::from_seed(11);
        let chromosome = evaluator.random_chromosome(&mut rng);
        assert_eq!(chromosome.len(), 17);
        assert!(chromosome.iter().all(|&gene| gene == 0 || gene == 1));
    }

    #[test]
    fn test_mutate_gene_flips_bit() {
        let evaluator = IndexSum { size: 3 };
        let mut chromosome = Chromosome::new(vec![0, 1, 0]);
        evaluator.mutate_gene(&mut chromosome, 0);
        evaluator.mutate_gene(&mut chromosome, 1);
        assert_eq!(chromosome.genes(), &[1, 0, 0]);
    }

    #[test]
    fn test_custom_penalty_value() {
        assert_eq!(PenaltyPolicy::Custom(-1.5).value(), -1.5);
        assert_eq!(PenaltyPolicy::default(), PenaltyPolicy::LargeNegative);
    }

    #[test]
    fn test_solution_display() {
        let solution = Solution::new(vec![2, 3], 5.0);
        assert_eq!(solution.to_string(), "Solution: cost=[5], size=[2], elements=[2, 3]");
    }
}
