use super::{degenerate_case, SurvivorSelector};
use crate::chromosome::Chromosome;
use crate::operator::OperatorInfo;
use crate::random::EngineRng;

/// Generational replacement: eliminate the entire parent population,
/// `next = offspring`. Recommended
/// offspring rate 1.0.
#[derive(Clone, Copy, Debug, Default)]
pub struct GenerationalSurvivor {
    pub custom_weight: f64,
}

impl GenerationalSurvivor {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<C: Chromosome> SurvivorSelector<C> for GenerationalSurvivor {
    fn info(&self) -> OperatorInfo {
        OperatorInfo::with_weight("survivor::generational", self.custom_weight)
    }

    fn apply(&self, population: Vec<C>, offspring: Vec<C>, _rng: &mut EngineRng, _epoch: u64) -> Vec<C> {
        if degenerate_case(&population, &offspring) {
            return population;
        }
        offspring
    }

    fn recommended_rate(&self) -> f64 {
        1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::survivor::Toy;

    #[test]
    fn replaces_the_whole_parent_population_with_the_offspring() {
        let population = Toy::population(&[1.0, 2.0, 3.0]);
        let offspring = Toy::population(&[4.0, 5.0]);
        let mut rng = EngineRng::from_seed(1);

        let survivor = GenerationalSurvivor::new();
        let mut next = survivor.apply(population, offspring, &mut rng, 0);

        let mut fitnesses: Vec<f64> = next.iter_mut().map(|c| c.fitness()).collect();
        fitnesses.sort_by(|a, b| a.partial_cmp(b).unwrap());
        assert_eq!(fitnesses, vec![4.0, 5.0]);
    }

    #[test]
    fn no_offspring_leaves_the_population_untouched() {
        let population = Toy::population(&[1.0, 2.0]);
        let mut rng = EngineRng::from_seed(2);

        let survivor = GenerationalSurvivor::new();
        let next = survivor.apply(population.clone(), Vec::new(), &mut rng, 0);
        assert_eq!(next.len(), population.len());
    }
}
