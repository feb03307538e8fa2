//! # Chromosomes and populations
//!
//! A [`Chromosome`] is a fixed-length genotype; a [`Population`] is an ordered
//! collection of chromosomes. Order carries no meaning except during crossover,
//! where the chromosomes at positions `2k` and `2k + 1` are mated.
//!
//! ## Example
//!
//! ```rust
//! use evogen::chromosome::{Chromosome, Population};
//!
//! let mut population = Population::with_capacity(2);
//! population.push(Chromosome::new(vec![0u8, 1, 1, 0]));
//! population.push(Chromosome::new(vec![1u8, 0, 0, 1]));
//!
//! assert_eq!(population.len(), 2);
//! assert_eq!(population[1].selected_loci(), vec![0, 3]);
//! ```

use std::fmt::Debug;
use std::ops::{Index, IndexMut};

use crate::error::{GeneticError, OptionExt, Result};

/// Element type of a chromosome.
///
/// Genes are numeric values; a binary genotype uses `ZERO` and `ONE` only.
pub trait Gene: Copy + PartialEq + Debug + Send + Sync + 'static {
    /// The "not selected" allele.
    const ZERO: Self;
    /// The "selected" allele.
    const ONE: Self;

    /// Returns true when this gene marks its locus as selected.
    fn is_set(&self) -> bool {
        *self != Self::ZERO
    }

    /// Returns the opposite binary allele.
    fn flipped(self) -> Self {
        if self.is_set() {
            Self::ZERO
        } else {
            Self::ONE
        }
    }
}

macro_rules! impl_gene {
    ($($t:ty),*) => {
        $(
            impl Gene for $t {
                const ZERO: Self = 0;
                const ONE: Self = 1;
            }
        )*
    };
}

impl_gene!(u8, u16, u32, u64, usize, i8, i16, i32, i64);

/// A fixed-length genotype.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Chromosome<G: Gene> {
    genes: Vec<G>,
}

impl<G: Gene> Chromosome<G> {
    /// Creates a chromosome from the given genes.
    pub fn new(genes: Vec<G>) -> Self {
        Self { genes }
    }

    /// Creates a chromosome of `len` loci, all set to `G::ZERO`.
    pub fn zeroed(len: usize) -> Self {
        Self {
            genes: vec![G::ZERO; len],
        }
    }

    pub fn len(&self) -> usize {
        self.genes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }

    pub fn genes(&self) -> &[G] {
        &self.genes
    }

    pub fn iter(&self) -> std::slice::Iter<'_, G> {
        self.genes.iter()
    }

    /// Returns the loci whose gene is set, in ascending order.
    pub fn selected_loci(&self) -> Vec<usize> {
        self.genes
            .iter()
            .enumerate()
            .filter(|(_, gene)| gene.is_set())
            .map(|(locus, _)| locus)
            .collect()
    }

    pub fn into_genes(self) -> Vec<G> {
        self.genes
    }
}

impl<G: Gene> From<Vec<G>> for Chromosome<G> {
    fn from(genes: Vec<G>) -> Self {
        Self::new(genes)
    }
}

impl<G: Gene> Index<usize> for Chromosome<G> {
    type Output = G;

    fn index(&self, locus: usize) -> &G {
        &self.genes[locus]
    }
}

impl<G: Gene> IndexMut<usize> for Chromosome<G> {
    fn index_mut(&mut self, locus: usize) -> &mut G {
        &mut self.genes[locus]
    }
}

/// An ordered collection of chromosomes evolved together.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Population<G: Gene> {
    chromosomes: Vec<Chromosome<G>>,
}

impl<G: Gene> Population<G> {
    pub fn new(chromosomes: Vec<Chromosome<G>>) -> Self {
        Self { chromosomes }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            chromosomes: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, chromosome: Chromosome<G>) {
        self.chromosomes.push(chromosome);
    }

    /// Removes and returns the chromosome at `index`, shifting later ones left.
    pub fn remove(&mut self, index: usize) -> Chromosome<G> {
        self.chromosomes.remove(index)
    }

    pub fn len(&self) -> usize {
        self.chromosomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chromosomes.is_empty()
    }

    pub fn chromosomes(&self) -> &[Chromosome<G>] {
        &self.chromosomes
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Chromosome<G>> {
        self.chromosomes.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Chromosome<G>> {
        self.chromosomes.iter_mut()
    }

    pub fn into_chromosomes(self) -> Vec<Chromosome<G>> {
        self.chromosomes
    }
}

impl<G: Gene> From<Vec<Chromosome<G>>> for Population<G> {
    fn from(chromosomes: Vec<Chromosome<G>>) -> Self {
        Self::new(chromosomes)
    }
}

impl<G: Gene> FromIterator<Chromosome<G>> for Population<G> {
    fn from_iter<I: IntoIterator<Item = Chromosome<G>>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<G: Gene> Index<usize> for Population<G> {
    type Output = Chromosome<G>;

    fn index(&self, index: usize) -> &Chromosome<G> {
        &self.chromosomes[index]
    }
}

impl<G: Gene> IndexMut<usize> for Population<G> {
    fn index_mut(&mut self, index: usize) -> &mut Chromosome<G> {
        &mut self.chromosomes[index]
    }
}

/// Returns the index of the first chromosome with the highest fitness.
pub fn index_of_best(fitness: &[f64]) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (idx, &value) in fitness.iter().enumerate() {
        match best {
            Some((_, best_value)) if value <= best_value => {}
            _ => best = Some((idx, value)),
        }
    }
    best.map(|(idx, _)| idx)
}

/// Returns the index of the first chromosome with the lowest fitness.
pub fn index_of_worst(fitness: &[f64]) -> Option<usize> {
    let mut worst: Option<(usize, f64)> = None;
    for (idx, &value) in fitness.iter().enumerate() {
        match worst {
            Some((_, worst_value)) if value >= worst_value => {}
            _ => worst = Some((idx, value)),
        }
    }
    worst.map(|(idx, _)| idx)
}

/// A population paired with the fitness of each of its chromosomes.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredPopulation<G: Gene> {
    population: Population<G>,
    fitness: Vec<f64>,
}

impl<G: Gene> ScoredPopulation<G> {
    /// Pairs a population with its fitness values.
    ///
    /// # Errors
    ///
    /// Returns [`GeneticError::Configuration`] if the lengths differ.
    pub fn new(population: Population<G>, fitness: Vec<f64>) -> Result<Self> {
        if population.len() != fitness.len() {
            return Err(GeneticError::Configuration(format!(
                "Fitness vector length ({}) doesn't match population length ({})",
                fitness.len(),
                population.len()
            )));
        }

        Ok(Self {
            population,
            fitness,
        })
    }

    pub fn population(&self) -> &Population<G> {
        &self.population
    }

    pub fn fitness(&self) -> &[f64] {
        &self.fitness
    }

    pub fn len(&self) -> usize {
        self.population.len()
    }

    pub fn is_empty(&self) -> bool {
        self.population.is_empty()
    }

    pub fn best_index(&self) -> Result<usize> {
        index_of_best(&self.fitness).ok_or_else_genetic(|| GeneticError::EmptyPopulation)
    }

    pub fn worst_index(&self) -> Result<usize> {
        index_of_worst(&self.fitness).ok_or_else_genetic(|| GeneticError::EmptyPopulation)
    }

    /// Overwrites the chromosome at `index` together with its fitness.
    pub fn replace(&mut self, index: usize, chromosome: Chromosome<G>, fitness: f64) {
        self.population[index] = chromosome;
        self.fitness[index] = fitness;
    }

    /// Removes the chromosome at `index`, returning it with its fitness.
    pub fn remove(&mut self, index: usize) -> (Chromosome<G>, f64) {
        (self.population.remove(index), self.fitness.remove(index))
    }

    pub fn into_parts(self) -> (Population<G>, Vec<f64>) {
        (self.population, self.fitness)
    }
}
