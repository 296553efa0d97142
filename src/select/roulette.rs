use super::{universal_pairs, weighted_pairs};
use crate::chromosome::Chromosome;
use crate::couple::Couple;
use crate::operator::OperatorInfo;
use crate::random::EngineRng;
use crate::select::ParentSelector;

/// Fitness-proportional ("roulette wheel") parent selection: `w(c) =
/// fitness(c)`. Assumes a maximising objective with non-negative fitness
/// values.
#[derive(Clone, Debug, Default)]
pub struct RouletteSelector {
    pub custom_weight: f64,
}

impl RouletteSelector {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<C: Chromosome> ParentSelector<C> for RouletteSelector {
    fn info(&self) -> OperatorInfo {
        OperatorInfo::with_weight("select::roulette", self.custom_weight)
    }

    fn select_pairs(
        &self,
        population: &mut [C],
        rng: &mut EngineRng,
        k: usize,
        _epoch: u64,
    ) -> Vec<Couple<C>> {
        if let Some(pairs) = universal_pairs(population, k) {
            return pairs;
        }
        weighted_pairs(population, rng, k, |c| c.fitness())
    }
}
