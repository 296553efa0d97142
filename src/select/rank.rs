use super::{universal_pairs, weighted_pairs};
use crate::chromosome::Chromosome;
use crate::couple::Couple;
use crate::operator::OperatorInfo;
use crate::random::EngineRng;
use crate::select::ParentSelector;
use std::collections::HashMap;

/// Rank-based parent selection: sort the population by fitness ascending,
/// assign rank `r in [1..N]`, and weight by rank rather than raw fitness.
/// Bounds the advantage of extreme outliers.
#[derive(Clone, Debug, Default)]
pub struct RankSelector {
    pub custom_weight: f64,
}

impl RankSelector {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<C: Chromosome> ParentSelector<C> for RankSelector {
    fn info(&self) -> OperatorInfo {
        OperatorInfo::with_weight("select::rank", self.custom_weight)
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

        let n = population.len();
        let fitness: Vec<f64> = population.iter_mut().map(|c| c.fitness()).collect();

        let mut order: Vec<usize> = (0..n).collect();
        order.sort_by(|&i, &j| fitness[i].partial_cmp(&fitness[j]).unwrap());

        let mut weight_by_id = HashMap::with_capacity(n);
        for (rank, &idx) in order.iter().enumerate() {
            weight_by_id.insert(population[idx].id(), (rank + 1) as f64);
        }

        weighted_pairs(population, rng, k, move |c| {
            *weight_by_id.get(&c.id()).unwrap_or(&1.0)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::select::Toy;

    #[test]
    fn selects_k_couples_drawn_from_the_population() {
        let mut population = Toy::population(&[1.0, 2.0, 3.0, 4.0, 5.0]);
        let mut rng = EngineRng::from_seed(1);
        let selector = RankSelector::new();

        let couples = selector.select_pairs(&mut population, &mut rng, 10, 0);
        assert_eq!(couples.len(), 10);

        let ids: std::collections::HashSet<_> = population.iter().map(|c| c.id()).collect();
        for couple in &couples {
            assert!(ids.contains(&couple.a.id()));
            assert!(ids.contains(&couple.b.id()));
        }
    }
}
