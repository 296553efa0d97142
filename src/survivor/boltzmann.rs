use super::{degenerate_case, SurvivorSelector};
use crate::chromosome::Chromosome;
use crate::cooling::CoolingSchedule;
use crate::error::{config_ensure, GaResult};
use crate::operator::OperatorInfo;
use crate::random::EngineRng;
use crate::wheel::RouletteWheel;

/// Boltzmann survivor selection: same temperature schedule as the
/// Boltzmann parent selector; elimination weight `w(c) = exp((fmax -
/// fitness(c)) / T)` so low-fitness candidates are more likely removed,
/// with a uniform fallback when the fitness range is zero. Recommended rate 0.4.
#[derive(Clone, Debug)]
pub struct BoltzmannSurvivor {
    t0: f64,
    alpha: f64,
    epsilon: f64,
    schedule: CoolingSchedule,
    pub custom_weight: f64,
}

impl BoltzmannSurvivor {
    pub fn new(t0: f64, alpha: f64, epsilon: f64, schedule: CoolingSchedule) -> GaResult<Self> {
        config_ensure!(t0 > 0.0, "BoltzmannSurvivor requires t0 > 0");
        config_ensure!(alpha >= 0.0, "BoltzmannSurvivor requires alpha >= 0");
        config_ensure!(epsilon > 0.0, "BoltzmannSurvivor requires epsilon > 0");
        Ok(BoltzmannSurvivor {
            t0,
            alpha,
            epsilon,
            schedule,
            custom_weight: 0.0,
        })
    }
}

impl<C: Chromosome> SurvivorSelector<C> for BoltzmannSurvivor {
    fn info(&self) -> OperatorInfo {
        OperatorInfo::with_weight("survivor::boltzmann", self.custom_weight)
    }

    fn apply(&self, population: Vec<C>, offspring: Vec<C>, rng: &mut EngineRng, epoch: u64) -> Vec<C> {
        if degenerate_case(&population, &offspring) {
            return population;
        }

        let mut population = population;
        let fitness: Vec<f64> = population.iter_mut().map(|c| c.fitness()).collect();
        let fmax = fitness.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        let fmin = fitness.iter().cloned().fold(f64::INFINITY, f64::min);
        let temperature = self.schedule.temperature(self.t0, self.alpha, self.epsilon, epoch);

        let indices: Vec<usize> = (0..population.len()).collect();
        let weights: Vec<f64> = if (fmax - fmin).abs() < f64::EPSILON {
            vec![1.0; population.len()]
        } else {
            fitness.iter().map(|&f| ((fmax - f) / temperature).exp()).collect()
        };

        let eliminate_count = offspring.len().min(population.len());
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
        0.4
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::survivor::Toy;
    use rstest::rstest;

    #[test]
    fn rejects_non_positive_t0() {
        assert!(BoltzmannSurvivor::new(0.0, 0.1, 0.1, CoolingSchedule::Exponential).is_err());
    }

    #[rstest]
    #[case(0)]
    #[case(25)]
    fn keeps_population_size_at_any_epoch(#[case] epoch: u64) {
        let population = Toy::population(&[1.0, 2.0, 3.0, 4.0, 5.0]);
        let offspring = Toy::population(&[9.0, 10.0]);
        let mut rng = EngineRng::from_seed(7);

        let survivor = BoltzmannSurvivor::new(4.0, 0.05, 0.1, CoolingSchedule::Exponential).unwrap();
        let next = survivor.apply(population, offspring, &mut rng, epoch);
        assert_eq!(next.len(), 5);
    }

    #[test]
    fn uniform_fallback_when_fitness_range_is_zero() {
        let population = Toy::population(&[5.0, 5.0, 5.0]);
        let offspring = Toy::population(&[9.0]);
        let mut rng = EngineRng::from_seed(8);

        let survivor = BoltzmannSurvivor::new(1.0, 0.0, 0.1, CoolingSchedule::Exponential).unwrap();
        let next = survivor.apply(population, offspring, &mut rng, 0);
        assert_eq!(next.len(), 3);
    }
}
