use crate::{
    error::{GeneticError, Result},
    evaluator::Evaluator,
};

use super::{EvolutionLauncher, EvolutionOptions};

/// Assembles an [`EvolutionLauncher`] from an evaluator and options.
#[derive(Debug, Clone)]
pub struct EvolutionLauncherBuilder<E: Evaluator> {
    evaluator: Option<E>,
    options: Option<EvolutionOptions>,
}

impl<E: Evaluator> EvolutionLauncherBuilder<E> {
    pub fn new() -> Self {
        Self {
            evaluator: None,
            options: None,
        }
    }

    pub fn with_evaluator(mut self, evaluator: E) -> Self {
        self.evaluator = Some(evaluator);
        self
    }

    pub fn with_options(mut self, options: EvolutionOptions) -> Self {
        self.options = Some(options);
        self
    }

    /// Builds the launcher.
    ///
    /// # Errors
    ///
    /// Returns [`GeneticError::Configuration`] if the evaluator or the options are
    /// missing, or if the options are invalid.
    pub fn build(self) -> Result<EvolutionLauncher<E>> {
        let evaluator = self
            .evaluator
            .ok_or_else(|| GeneticError::Configuration("Evaluator not specified".to_string()))?;

        let options = self.options.ok_or_else(|| {
            GeneticError::Configuration("Evolution options not specified".to_string())
        })?;

        EvolutionLauncher::new(evaluator, options)
    }
}

impl<E: Evaluator> Default for EvolutionLauncherBuilder<E> {
    fn default() -> Self {
        Self::new()
    }
}
