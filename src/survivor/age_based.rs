use super::{degenerate_case, SurvivorSelector};
use crate::chromosome::Chromosome;
use crate::operator::OperatorInfo;
use crate::random::EngineRng;
use crate::wheel::RouletteWheel;

/// Age-based survivor selection: weighted roulette with `w(c) = age(c) +
/// 1`, pick-and-remove until enough are eliminated. Recommended rate 0.35.
#[derive(Clone, Copy, Debug, Default)]
pub struct AgeBasedSurvivor {
    pub custom_weight: f64,
}

impl AgeBasedSurvivor {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<C: Chromosome> SurvivorSelector<C> for AgeBasedSurvivor {
    fn info(&self) -> OperatorInfo {
        OperatorInfo::with_weight("survivor::age_based", self.custom_weight)
    }

    fn apply(&self, population: Vec<C>, offspring: Vec<C>, rng: &mut EngineRng, _epoch: u64) -> Vec<C> {
        if degenerate_case(&population, &offspring) {
            return population;
        }

        let eliminate_count = offspring.len().min(population.len());
        let indices: Vec<usize> = (0..population.len()).collect();
        let weights: Vec<f64> = population.iter().map(|c| c.age() as f64 + 1.0).collect();
        let mut wheel = RouletteWheel::new(indices, weights).expect("non-empty, validated weights");

        let mut eliminated = std::collections::HashSet::new();
        for _ in 0..eliminate_count {
            if wheel.is_empty() {
                break;
            }
            eliminated.insert(wheel.spin_and_remove(rng));
        }

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
        0.35
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::survivor::Toy;

    #[test]
    fn eliminates_exactly_one_per_offspring_and_keeps_population_size() {
        let population = vec![Toy::with_age(1.0, 0), Toy::with_age(2.0, 5), Toy::with_age(3.0, 10)];
        let offspring = Toy::population(&[9.0]);
        let mut rng = EngineRng::from_seed(4);

        let survivor = AgeBasedSurvivor::new();
        let next = survivor.apply(population, offspring, &mut rng, 0);
        assert_eq!(next.len(), 3);
    }

    #[test]
    fn older_members_are_eliminated_more_often_than_younger_ones() {
        let survivor = AgeBasedSurvivor::new();
        let mut old_eliminations = 0u64;
        let trials: u64 = 500;

        for seed in 0..trials {
            let population = vec![Toy::with_age(1.0, 0), Toy::with_age(2.0, 50)];
            let offspring = Toy::population(&[9.0]);
            let mut rng = EngineRng::from_seed(seed);
            let mut next = survivor.apply(population, offspring, &mut rng, 0);
            let survivor_fitnesses: Vec<f64> = next.iter_mut().map(|c| c.fitness()).collect();
            if !survivor_fitnesses.contains(&2.0) {
                old_eliminations += 1;
            }
        }

        assert!(
            old_eliminations as f64 / trials as f64 > 0.7,
            "expected the age-50 member to be eliminated substantially more often, got {old_eliminations}/{trials}"
        );
    }
}
