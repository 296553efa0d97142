use crate::operator::{OperatorInfo, OperatorSelectionPolicy};
use crate::random::EngineRng;

/// Rotates a cursor through the operator list, advancing modulo `N` each
/// call.
#[derive(Clone, Debug, Default)]
pub struct RoundRobinPolicy {
    cursor: usize,
}

impl RoundRobinPolicy {
    pub fn new() -> Self {
        Self::default()
    }
}

impl OperatorSelectionPolicy for RoundRobinPolicy {
    fn select(&mut self, infos: &[OperatorInfo], _rng: &mut EngineRng, _epoch: u64) -> usize {
        let choice = self.cursor % infos.len();
        self.cursor = (self.cursor + 1) % infos.len();
        choice
    }
}
