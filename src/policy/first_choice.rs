use crate::operator::{OperatorInfo, OperatorSelectionPolicy};
use crate::random::EngineRng;

/// Always returns the first operator. The
/// Runner's default when exactly one operator of a kind is registered.
#[derive(Clone, Copy, Debug, Default)]
pub struct FirstChoicePolicy;

impl FirstChoicePolicy {
    pub fn new() -> Self {
        Self
    }
}

impl OperatorSelectionPolicy for FirstChoicePolicy {
    fn select(&mut self, _infos: &[OperatorInfo], _rng: &mut EngineRng, _epoch: u64) -> usize {
        0
    }
}
