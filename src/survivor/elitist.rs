use super::{degenerate_case, SurvivorSelector};
use crate::chromosome::Chromosome;
use crate::error::{config_ensure, GaResult};
use crate::operator::OperatorInfo;
use crate::random::EngineRng;

/// Elitist survivor selection: sort the parent population by fitness
/// descending; the top `ceil(elite_frac * |P|)` are protected; eliminate
/// uniformly at random from the remainder until `|E| = |offspring|`
/// (bounded by the non-elite count). Recommended
/// rate `1 - elite_frac`.
#[derive(Clone, Debug)]
pub struct ElitistSurvivor {
    elite_frac: f64,
    pub custom_weight: f64,
}

impl ElitistSurvivor {
    pub fn new(elite_frac: f64) -> GaResult<Self> {
        config_ensure!((0.0..=1.0).contains(&elite_frac), "ElitistSurvivor requires elite_frac in [0, 1]");
        Ok(ElitistSurvivor {
            elite_frac,
            custom_weight: 0.0,
        })
    }
}

impl<C: Chromosome> SurvivorSelector<C> for ElitistSurvivor {
    fn info(&self) -> OperatorInfo {
        OperatorInfo::with_weight("survivor::elitist", self.custom_weight)
    }

    fn apply(&self, population: Vec<C>, offspring: Vec<C>, rng: &mut EngineRng, _epoch: u64) -> Vec<C> {
        if degenerate_case(&population, &offspring) {
            return population;
        }

        let n = population.len();
        let mut population = population;
        let fitness: Vec<f64> = population.iter_mut().map(|c| c.fitness()).collect();
        let mut order: Vec<usize> = (0..n).collect();
        order.sort_by(|&i, &j| fitness[j].partial_cmp(&fitness[i]).unwrap());

        let elite_count = ((self.elite_frac * n as f64).ceil() as usize).min(n);
        let mut nonelite: Vec<usize> = order[elite_count..].to_vec();
        rng.shuffle(&mut nonelite);

        let eliminate_count = offspring.len().min(nonelite.len());
        let eliminated: std::collections::HashSet<usize> =
            nonelite.into_iter().take(eliminate_count).collect();

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
        1.0 - self.elite_frac
    }
}
