use super::{degenerate_case, SurvivorSelector};
use crate::chromosome::Chromosome;
use crate::operator::OperatorInfo;
use crate::random::EngineRng;

/// Random survivor selection: shuffle the parent population and
/// eliminate the first `|offspring|`. Recommended
/// rate 0.25.
#[derive(Clone, Copy, Debug, Default)]
pub struct RandomSurvivor {
    pub custom_weight: f64,
}

impl RandomSurvivor {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<C: Chromosome> SurvivorSelector<C> for RandomSurvivor {
    fn info(&self) -> OperatorInfo {
        OperatorInfo::with_weight("survivor::random", self.custom_weight)
    }

    fn apply(&self, population: Vec<C>, offspring: Vec<C>, rng: &mut EngineRng, _epoch: u64) -> Vec<C> {
        if degenerate_case(&population, &offspring) {
            return population;
        }

        let eliminate_count = offspring.len().min(population.len());
        let mut order = rng.shuffled_indices(population.len());
        order.truncate(eliminate_count);
        let eliminated: std::collections::HashSet<usize> = order.into_iter().collect();

        let mut survivors: Vec<C> = population
            .into_iter()
            .enumerate()
            .filter(|(i, _)| !eliminated.contains(i))
            .map(|(_, c)| c)
            .collect();
        survivors.extend(offspring);
        survivors
    }

    fn recommended_rate(&self) -> f64 {
        0.25
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::survivor::Toy;

    #[test]
    fn eliminates_exactly_one_per_offspring_and_keeps_population_size() {
        let population = Toy::population(&[1.0, 2.0, 3.0, 4.0, 5.0]);
        let offspring = Toy::population(&[6.0, 7.0]);
        let mut rng = EngineRng::from_seed(3);

        let survivor = RandomSurvivor::new();
        let next = survivor.apply(population, offspring, &mut rng, 0);
        assert_eq!(next.len(), 5);
    }
}
