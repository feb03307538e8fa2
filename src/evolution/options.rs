//! # EvolutionOptions
//!
//! The `EvolutionOptions` struct holds the configuration of a run: generation and
//! time limits, population size, mutation rate, the strategy chosen for each
//! operator, repair settings, the infeasibility penalty and the logging level.
//!
//! ## Example
//!
//! ```rust
//! use evogen::evolution::options::{
//!     Crossover, EvolutionOptions, LogLevel, Replacement, Selection,
//! };
//! use evogen::evaluator::PenaltyPolicy;
//! use evogen::mutation::RepairPolicy;
//!
//! let options = EvolutionOptions::builder()
//!     .max_generations(500)
//!     .population_size(100)
//!     .mutation_rate(0.01)
//!     .selection(Selection::Tournament)
//!     .crossover(Crossover::Uniform)
//!     .replacement(Replacement::SteadyState)
//!     .repair(RepairPolicy::TargetedRemoval)
//!     .penalty(PenaltyPolicy::Zero)
//!     .log_level(LogLevel::Minimal)
//!     .build();
//!
//! assert!(options.validate().is_ok());
//!
//! let default_options = EvolutionOptions::default();
//! assert_eq!(default_options.get_time_limit().as_secs(), 1800);
//! ```
//!
//! ## Enums
//!
//! - `Selection`: `Tournament` or `Sus` (stochastic universal sampling).
//! - `Crossover`: `TwoPoint` or `Uniform`.
//! - `Replacement`: `Elitist` or `SteadyState`.
//! - `LogLevel`: `Verbose`, `Minimal` or `None`.

use std::time::Duration;

use crate::error::{GeneticError, Result};
use crate::evaluator::PenaltyPolicy;
use crate::mutation::{RepairPolicy, DEFAULT_MAX_REPAIR_PASSES};
use crate::selection::SusScaling;

/// Wall-clock ceiling applied when none is configured.
pub const DEFAULT_TIME_LIMIT: Duration = Duration::from_secs(1800);

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    Verbose,
    Minimal,
    #[default]
    None,
}

/// Parent selection strategy.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    Tournament,
    Sus,
}

/// Recombination strategy.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Crossover {
    #[default]
    TwoPoint,
    Uniform,
}

/// Population replacement strategy.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Replacement {
    #[default]
    Elitist,
    SteadyState,
}

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct EvolutionOptions {
    max_generations: usize,
    population_size: usize,
    mutation_rate: f64,
    selection: Selection,
    crossover: Crossover,
    replacement: Replacement,
    repair: RepairPolicy,
    penalty: PenaltyPolicy,
    /// Cap on extra passes of forced-mutation repair, per chromosome
    max_repair_passes: usize,
    strict_repair: bool,
    sus_scaling: SusScaling,
    time_limit: Duration,
    log_level: LogLevel,
}

impl EvolutionOptions {
    /// Creates options with the given run size and defaults for everything else.
    pub fn new(max_generations: usize, population_size: usize, mutation_rate: f64) -> Self {
        Self {
            max_generations,
            population_size,
            mutation_rate,
            ..Self::default()
        }
    }

    /// Checks that the options describe a runnable configuration.
    ///
    /// # Errors
    ///
    /// Returns [`GeneticError::Configuration`] if:
    /// - The population size is zero or odd
    /// - The mutation rate is not a finite value in `[0, 1]`
    /// - `max_repair_passes` is zero
    /// - A custom penalty is not finite
    pub fn validate(&self) -> Result<()> {
        if self.population_size == 0 {
            return Err(GeneticError::Configuration(
                "Population size cannot be zero".to_string(),
            ));
        }

        if self.population_size % 2 != 0 {
            return Err(GeneticError::Configuration(format!(
                "Population size must be even so parents can be paired, got {}",
                self.population_size
            )));
        }

        if !self.mutation_rate.is_finite() || !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(GeneticError::Configuration(format!(
                "Mutation rate must be within [0, 1], got {}",
                self.mutation_rate
            )));
        }

        if self.max_repair_passes == 0 {
            return Err(GeneticError::Configuration(
                "Maximum repair passes cannot be zero".to_string(),
            ));
        }

        if !self.penalty.value().is_finite() {
            return Err(GeneticError::Configuration(format!(
                "Infeasibility penalty must be finite, got {}",
                self.penalty.value()
            )));
        }

        Ok(())
    }

    pub fn get_max_generations(&self) -> usize {
        self.max_generations
    }

    pub fn get_population_size(&self) -> usize {
        self.population_size
    }

    pub fn get_mutation_rate(&self) -> f64 {
        self.mutation_rate
    }

    pub fn get_selection(&self) -> Selection {
        self.selection
    }

    pub fn get_crossover(&self) -> Crossover {
        self.crossover
    }

    pub fn get_replacement(&self) -> Replacement {
        self.replacement
    }

    pub fn get_repair(&self) -> RepairPolicy {
        self.repair
    }

    pub fn get_penalty(&self) -> PenaltyPolicy {
        self.penalty
    }

    pub fn get_max_repair_passes(&self) -> usize {
        self.max_repair_passes
    }

    pub fn is_strict_repair(&self) -> bool {
        self.strict_repair
    }

    pub fn get_sus_scaling(&self) -> SusScaling {
        self.sus_scaling
    }

    pub fn get_time_limit(&self) -> Duration {
        self.time_limit
    }

    pub fn get_log_level(&self) -> LogLevel {
        self.log_level
    }

    pub fn set_max_generations(&mut self, max_generations: usize) {
        self.max_generations = max_generations;
    }

    pub fn set_population_size(&mut self, population_size: usize) {
        self.population_size = population_size;
    }

    pub fn set_mutation_rate(&mut self, mutation_rate: f64) {
        self.mutation_rate = mutation_rate;
    }

    pub fn set_selection(&mut self, selection: Selection) {
        self.selection = selection;
    }

    pub fn set_crossover(&mut self, crossover: Crossover) {
        self.crossover = crossover;
    }

    pub fn set_replacement(&mut self, replacement: Replacement) {
        self.replacement = replacement;
    }

    pub fn set_repair(&mut self, repair: RepairPolicy) {
        self.repair = repair;
    }

    pub fn set_penalty(&mut self, penalty: PenaltyPolicy) {
        self.penalty = penalty;
    }

    pub fn set_max_repair_passes(&mut self, max_repair_passes: usize) {
        self.max_repair_passes = max_repair_passes;
    }

    pub fn set_strict_repair(&mut self, strict_repair: bool) {
        self.strict_repair = strict_repair;
    }

    pub fn set_sus_scaling(&mut self, sus_scaling: SusScaling) {
        self.sus_scaling = sus_scaling;
    }

    pub fn set_time_limit(&mut self, time_limit: Duration) {
        self.time_limit = time_limit;
    }

    pub fn set_log_level(&mut self, log_level: LogLevel) {
        self.log_level = log_level;
    }

    /// Returns a builder for creating an `EvolutionOptions` instance.
    pub fn builder() -> EvolutionOptionsBuilder {
        EvolutionOptionsBuilder::default()
    }
}

impl Default for EvolutionOptions {
    fn default() -> Self {
        Self {
            max_generations: 1000,
            population_size: 100,
            mutation_rate: 0.01,
            selection: Selection::default(),
            crossover: Crossover::default(),
            replacement: Replacement::default(),
            repair: RepairPolicy::default(),
            penalty: PenaltyPolicy::default(),
            max_repair_passes: DEFAULT_MAX_REPAIR_PASSES,
            strict_repair: false,
            sus_scaling: SusScaling::default(),
            time_limit: DEFAULT_TIME_LIMIT,
            log_level: LogLevel::None,
        }
    }
}

/// Builder for `EvolutionOptions`.
///
/// Unset fields fall back to [`EvolutionOptions::default`].
#[derive(Debug, Clone, Default)]
pub struct EvolutionOptionsBuilder {
    max_generations: Option<usize>,
    population_size: Option<usize>,
    mutation_rate: Option<f64>,
    selection: Option<Selection>,
    crossover: Option<Crossover>,
    replacement: Option<Replacement>,
    repair: Option<RepairPolicy>,
    penalty: Option<PenaltyPolicy>,
    max_repair_passes: Option<usize>,
    strict_repair: Option<bool>,
    sus_scaling: Option<SusScaling>,
    time_limit: Option<Duration>,
    log_level: Option<LogLevel>,
}

impl EvolutionOptionsBuilder {
    pub fn max_generations(mut self, value: usize) -> Self {
        self.max_generations = Some(value);
        self
    }

    pub fn population_size(mut self, value: usize) -> Self {
        self.population_size = Some(value);
        self
    }

    pub fn mutation_rate(mut self, value: f64) -> Self {
        self.mutation_rate = Some(value);
        self
    }

    pub fn selection(mut self, value: Selection) -> Self {
        self.selection = Some(value);
        self
    }

    pub fn crossover(mut self, value: Crossover) -> Self {
        self.crossover = Some(value);
        self
    }

    pub fn replacement(mut self, value: Replacement) -> Self {
        self.replacement = Some(value);
        self
    }

    pub fn repair(mut self, value: RepairPolicy) -> Self {
        self.repair = Some(value);
        self
    }

    pub fn penalty(mut self, value: PenaltyPolicy) -> Self {
        self.penalty = Some(value);
        self
    }

    pub fn max_repair_passes(mut self, value: usize) -> Self {
        self.max_repair_passes = Some(value);
        self
    }

    pub fn strict_repair(mut self, value: bool) -> Self {
        self.strict_repair = Some(value);
        self
    }

    pub fn sus_scaling(mut self, value: SusScaling) -> Self {
        self.sus_scaling = Some(value);
        self
    }

    pub fn time_limit(mut self, value: Duration) -> Self {
        self.time_limit = Some(value);
        self
    }

    pub fn log_level(mut self, value: LogLevel) -> Self {
        self.log_level = Some(value);
        self
    }

    /// Builds the `EvolutionOptions` instance.
    pub fn build(self) -> EvolutionOptions {
        let default = EvolutionOptions::default();
        EvolutionOptions {
            max_generations: self.max_generations.unwrap_or(default.max_generations),
            population_size: self.population_size.unwrap_or(default.population_size),
            mutation_rate: self.mutation_rate.unwrap_or(default.mutation_rate),
            selection: self.selection.unwrap_or(default.selection),
            crossover: self.crossover.unwrap_or(default.crossover),
            replacement: self.replacement.unwrap_or(default.replacement),
            repair: self.repair.unwrap_or(default.repair),
            penalty: self.penalty.unwrap_or(default.penalty),
            max_repair_passes: self.max_repair_passes.unwrap_or(default.max_repair_passes),
            strict_repair: self.strict_repair.unwrap_or(default.strict_repair),
            sus_scaling: self.sus_scaling.unwrap_or(default.sus_scaling),
            time_limit: self.time_limit.unwrap_or(default.time_limit),
            log_level: self.log_level.unwrap_or(default.log_level),
        }
    }
}
