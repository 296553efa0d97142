use super::{universal_pairs, weighted_pairs};
use crate::chromosome::Chromosome;
use crate::couple::Couple;
use crate::operator::OperatorInfo;
use crate::random::EngineRng;
use crate::select::ParentSelector;

/// Parent selection with uniform weights: every chromosome is equally
/// likely to be drawn regardless of fitness.
#[derive(Clone, Debug, Default)]
pub struct RandomSelector {
    pub custom_weight: f64,
}

impl RandomSelector {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<C: Chromosome> ParentSelector<C> for RandomSelector {
    fn info(&self) -> OperatorInfo {
        OperatorInfo::with_weight("select::random", self.custom_weight)
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
        weighted_pairs(population, rng, k, |_| 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::select::Toy;

    #[test]
    fn selects_k_couples_drawn_from_the_population() {
        let mut population = Toy::population(&[1.0, 2.0, 3.0, 4.0]);
        let mut rng = EngineRng::from_seed(9);
        let selector = RandomSelector::new();

        let couples = selector.select_pairs(&mut population, &mut rng, 15, 0);
        assert_eq!(couples.len(), 15);

        let ids: std::collections::HashSet<_> = population.iter().map(|c| c.id()).collect();
        for couple in &couples {
            assert!(ids.contains(&couple.a.id()));
            assert!(ids.contains(&couple.b.id()));
        }
    }
}
