//! # Population replacement
//!
//! Strategies that build the next generation from the offspring and, for
//! steady-state replacement, the current population. Both compare against the
//! previous population's best chromosome so that the population best never drops.
pub mod elitist;
pub mod steady_state;

use std::fmt::Debug;

use crate::chromosome::{Chromosome, Gene, ScoredPopulation};
use crate::error::Result;
use crate::rng::Random;

pub use elitist::ElitistReplacement;
pub use steady_state::SteadyStateReplacement;

/// The best chromosome of the previous population and its fitness.
#[derive(Debug, Clone, Copy)]
pub struct Elite<'a, G: Gene> {
    pub chromosome: &'a Chromosome<G>,
    pub fitness: f64,
}

/// Produces the next population.
pub trait ReplacementStrategy<G: Gene>: Debug {
    /// Combines the current population and the evaluated offspring into the next
    /// population. The result always has the same size as `offspring`.
    fn replace<R: Random>(
        &self,
        current: ScoredPopulation<G>,
        offspring: ScoredPopulation<G>,
        elite: Elite<'_, G>,
        rng: &mut R,
    ) -> Result<ScoredPopulation<G>>;
}
