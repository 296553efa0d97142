use super::{TerminationState, TerminationStrategy};

/// `true` when `best_fitness >= f_star`.
#[derive(Clone, Copy, Debug)]
pub struct TargetFitness {
    f_star: f64,
}

impl TargetFitness {
    pub fn new(f_star: f64) -> Self {
        TargetFitness { f_star }
    }
}

impl TerminationStrategy for TargetFitness {
    fn should_terminate(&mut self, state: &TerminationState) -> bool {
        state.best_fitness >= self.f_star
    }
}
