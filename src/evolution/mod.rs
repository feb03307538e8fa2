pub mod builder;
pub mod launcher;
pub mod options;

pub use builder::EvolutionLauncherBuilder;
pub use launcher::{
    EvolutionLauncher, EvolutionResult, EvolutionState, RunStatistics, TerminationReason,
};
pub use options::{Crossover, EvolutionOptions, LogLevel, Replacement, Selection};
