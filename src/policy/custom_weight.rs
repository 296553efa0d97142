use crate::operator::{OperatorInfo, OperatorSelectionPolicy};
use crate::random::EngineRng;
use crate::wheel::RouletteWheel;

/// Builds a weighted roulette wheel from each operator's `custom_weight`,
/// falling back to uniform weights if every weight is zero; spins without
/// removal.
#[derive(Clone, Copy, Debug, Default)]
pub struct CustomWeightPolicy;

impl CustomWeightPolicy {
    pub fn new() -> Self {
        Self
    }
}

impl OperatorSelectionPolicy for CustomWeightPolicy {
    fn select(&mut self, infos: &[OperatorInfo], rng: &mut EngineRng, _epoch: u64) -> usize {
        let indices: Vec<usize> = (0..infos.len()).collect();
        let weights: Vec<f64> = infos.iter().map(|info| info.custom_weight).collect();
        let all_zero = weights.iter().all(|&w| w == 0.0);
        let weights = if all_zero { vec![1.0; infos.len()] } else { weights };
        let wheel = RouletteWheel::new(indices, weights).expect("non-empty, validated weights");
        *wheel.spin(rng)
    }
}
