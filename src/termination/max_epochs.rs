use super::{TerminationState, TerminationStrategy};

/// `true` when `epoch >= n`. The Runner's
/// default when no termination strategy is registered (`MaxEpochs(100)`).
#[derive(Clone, Copy, Debug)]
pub struct MaxEpochs {
    n: u64,
}

impl MaxEpochs {
    pub fn new(n: u64) -> Self {
        MaxEpochs { n }
    }
}

impl TerminationStrategy for MaxEpochs {
    fn should_terminate(&mut self, state: &TerminationState) -> bool {
        state.epoch >= self.n
    }
}
