//! Termination strategies: predicates over the engine's running state
//! that decide when to stop. The Runner terminates when
//! any registered strategy returns `true` (logical OR).

mod max_duration;
mod max_epochs;
mod target_fitness;
mod target_std_dev;

pub use max_duration::MaxDuration;
pub use max_epochs::MaxEpochs;
pub use target_fitness::TargetFitness;
pub use target_std_dev::TargetStdDev;

use std::time::Duration;

/// The engine state a termination strategy evaluates against.
#[derive(Clone, Copy, Debug)]
pub struct TerminationState {
    pub epoch: u64,
    pub elapsed: Duration,
    pub best_fitness: f64,
    pub population_fitness_stddev: f64,
}

/// A predicate evaluated once per generation. Some variants (TargetStdDev)
/// carry internal state across calls, hence `&mut self`.
pub trait TerminationStrategy: std::fmt::Debug {
    fn should_terminate(&mut self, state: &TerminationState) -> bool;
}
