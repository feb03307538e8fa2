//! # Parent selection
//!
//! Strategies that pick a population-sized multiset of parents:
//! [`TournamentSelection`] and [`StochasticUniversalSampling`].
pub mod selection_strategy;
pub mod sus;
pub mod tournament;

pub use selection_strategy::SelectionStrategy;
pub use sus::{StochasticUniversalSampling, SusScaling};
pub use tournament::TournamentSelection;
