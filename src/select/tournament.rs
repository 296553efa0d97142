use super::universal_pairs;
use crate::chromosome::Chromosome;
use crate::couple::Couple;
use crate::error::{config_ensure, GaResult};
use crate::operator::OperatorInfo;
use crate::random::EngineRng;
use crate::select::ParentSelector;
use crate::wheel::RouletteWheel;

/// Tournament parent selection: draw `size` candidates uniformly without
/// replacement; if `stochastic`, pick the two winners by fitness-weighted
/// roulette among them, else take the two highest-fitness of the draw.
#[derive(Clone, Debug)]
pub struct TournamentSelector {
    size: usize,
    stochastic: bool,
    pub custom_weight: f64,
}

impl TournamentSelector {
    pub fn new(size: usize, stochastic: bool) -> GaResult<Self> {
        config_ensure!(size >= 2, "TournamentSelector requires a tournament size of at least 2");
        Ok(TournamentSelector {
            size,
            stochastic,
            custom_weight: 0.0,
        })
    }
}

impl<C: Chromosome> ParentSelector<C> for TournamentSelector {
    fn info(&self) -> OperatorInfo {
        OperatorInfo::with_weight("select::tournament", self.custom_weight)
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

        let size = self.size.min(population.len());
        let mut couples = Vec::with_capacity(k);
        for _ in 0..k {
            let mut drawn = rng.sample_indices(population.len(), size);

            if self.stochastic {
                let weights: Vec<f64> = drawn.iter().map(|&i| population[i].fitness()).collect();
                let mut wheel =
                    RouletteWheel::new(drawn.clone(), weights).expect("non-empty, validated weights");
                let first = wheel.spin_and_remove(rng);
                let second = wheel.spin_and_remove(rng);
                couples.push(Couple::new(population[first].clone(), population[second].clone()));
            } else {
                drawn.sort_by(|&i, &j| {
                    population[j]
                        .fitness()
                        .partial_cmp(&population[i].fitness())
                        .unwrap()
                });
                couples.push(Couple::new(
                    population[drawn[0]].clone(),
                    population[drawn[1]].clone(),
                ));
            }
        }
        couples
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::select::Toy;
    use rstest::rstest;

    #[test]
    fn rejects_tournament_size_below_two() {
        assert!(TournamentSelector::new(1, false).is_err());
    }

    #[test]
    fn deterministic_tournament_over_the_whole_population_always_picks_the_two_best() {
        let mut population = Toy::population(&[1.0, 2.0, 3.0, 4.0, 5.0]);
        let mut rng = EngineRng::from_seed(3);
        let selector = TournamentSelector::new(5, false).unwrap();

        for mut couple in selector.select_pairs(&mut population, &mut rng, 20, 0) {
            let mut pair = [couple.a.fitness(), couple.b.fitness()];
            pair.sort_by(|a, b| b.partial_cmp(a).unwrap());
            assert_eq!(pair, [5.0, 4.0]);
        }
    }

    #[rstest]
    #[case(2)]
    #[case(3)]
    #[case(5)]
    fn stochastic_tournament_produces_k_couples(#[case] size: usize) {
        let mut population = Toy::population(&[1.0, 2.0, 3.0, 4.0, 5.0]);
        let mut rng = EngineRng::from_seed(4);
        let selector = TournamentSelector::new(size, true).unwrap();

        assert_eq!(selector.select_pairs(&mut population, &mut rng, 12, 0).len(), 12);
    }
}
