use crate::operator::{OperatorInfo, OperatorSelectionPolicy};
use crate::random::EngineRng;

/// Uniform pick from `N` operators.
#[derive(Clone, Copy, Debug, Default)]
pub struct RandomPolicy;

impl RandomPolicy {
    pub fn new() -> Self {
        Self
    }
}

impl OperatorSelectionPolicy for RandomPolicy {
    fn select(&mut self, infos: &[OperatorInfo], rng: &mut EngineRng, _epoch: u64) -> usize {
        rng.range(0, infos.len())
    }
}
