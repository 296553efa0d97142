use super::{degenerate_case, SurvivorSelector};
use crate::chromosome::Chromosome;
use crate::error::{config_ensure, GaResult};
use crate::operator::OperatorInfo;
use crate::random::EngineRng;
use crate::wheel::RouletteWheel;

const LOSER_WEIGHT_EPSILON: f64 = 1e-6;

/// Tournament survivor selection: repeatedly draw `size` non-eliminated
/// candidates and eliminate the "loser" (deterministic: lowest fitness;
/// stochastic: weighted by `(fmax + eps) - fitness`), until enough are
/// eliminated or the pool is exhausted.
/// Recommended rate 0.5.
#[derive(Clone, Debug)]
pub struct TournamentSurvivor {
    size: usize,
    stochastic: bool,
    pub custom_weight: f64,
}

impl TournamentSurvivor {
    pub fn new(size: usize, stochastic: bool) -> GaResult<Self> {
        config_ensure!(size >= 2, "TournamentSurvivor requires a tournament size of at least 2");
        Ok(TournamentSurvivor {
            size,
            stochastic,
            custom_weight: 0.0,
        })
    }
}

impl<C: Chromosome> SurvivorSelector<C> for TournamentSurvivor {
    fn info(&self) -> OperatorInfo {
        OperatorInfo::with_weight("survivor::tournament", self.custom_weight)
    }

    fn apply(&self, population: Vec<C>, offspring: Vec<C>, rng: &mut EngineRng, _epoch: u64) -> Vec<C> {
        if degenerate_case(&population, &offspring) {
            return population;
        }

        let mut population = population;
        let fitness: Vec<f64> = population.iter_mut().map(|c| c.fitness()).collect();
        let fmax = fitness.iter().cloned().fold(f64::NEG_INFINITY, f64::max);

        let eliminate_count = offspring.len().min(population.len());
        let mut pool: Vec<usize> = (0..population.len()).collect();
        let mut eliminated = std::collections::HashSet::new();

        while eliminated.len() < eliminate_count && pool.len() >= 2 {
            let size = self.size.min(pool.len());
            let drawn_positions = rng.sample_indices(pool.len(), size);
            let drawn: Vec<usize> = drawn_positions.iter().map(|&p| pool[p]).collect();

            let loser = if self.stochastic {
                let weights: Vec<f64> = drawn.iter().map(|&i| (fmax + LOSER_WEIGHT_EPSILON) - fitness[i]).collect();
                let mut wheel = RouletteWheel::new(drawn.clone(), weights).expect("non-empty, validated weights");
                wheel.spin_and_remove(rng)
            } else {
                *drawn
                    .iter()
                    .min_by(|&&a, &&b| fitness[a].partial_cmp(&fitness[b]).unwrap())
                    .unwrap()
            };

            eliminated.insert(loser);
            pool.retain(|&i| i != loser);
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
        0.5
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::survivor::Toy;

    #[test]
    fn rejects_tournament_size_below_two() {
        assert!(TournamentSurvivor::new(1, false).is_err());
    }

    #[test]
    fn deterministic_tournament_over_the_whole_population_always_eliminates_the_worst() {
        let population = Toy::population(&[1.0, 2.0, 3.0, 4.0, 5.0]);
        let offspring = Toy::population(&[9.0]);
        let mut rng = EngineRng::from_seed(5);

        let survivor = TournamentSurvivor::new(5, false).unwrap();
        let mut next = survivor.apply(population, offspring, &mut rng, 0);

        let fitnesses: Vec<f64> = next.iter_mut().map(|c| c.fitness()).collect();
        assert_eq!(next.len(), 5);
        assert!(!fitnesses.contains(&1.0), "the lowest-fitness member should have been eliminated");
    }

    #[test]
    fn stochastic_tournament_keeps_population_size() {
        let population = Toy::population(&[1.0, 2.0, 3.0, 4.0, 5.0]);
        let offspring = Toy::population(&[9.0, 10.0]);
        let mut rng = EngineRng::from_seed(6);

        let survivor = TournamentSurvivor::new(3, true).unwrap();
        let next = survivor.apply(population, offspring, &mut rng, 0);
        assert_eq!(next.len(), 5);
    }
}
