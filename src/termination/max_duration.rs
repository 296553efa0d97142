use super::{TerminationState, TerminationStrategy};
use std::time::Duration;

/// `true` when `elapsed >= d`.
#[derive(Clone, Copy, Debug)]
pub struct MaxDuration {
    d: Duration,
}

impl MaxDuration {
    pub fn new(d: Duration) -> Self {
        MaxDuration { d }
    }
}

impl TerminationStrategy for MaxDuration {
    fn should_terminate(&mut self, state: &TerminationState) -> bool {
        state.elapsed >= self.d
    }
}
