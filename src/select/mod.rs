//! Parent selectors: given the population, produce `k` mating pairs.

mod boltzmann;
mod elitist;
mod rank;
mod random;
mod roulette;
mod tournament;

pub use boltzmann::BoltzmannSelector;
pub use crate::cooling::CoolingSchedule;
pub use elitist::ElitistSelector;
pub use rank::RankSelector;
pub use random::RandomSelector;
pub use roulette::RouletteSelector;
pub use tournament::TournamentSelector;

use crate::chromosome::Chromosome;
use crate::couple::Couple;
use crate::operator::OperatorInfo;
use crate::random::EngineRng;
use crate::wheel::RouletteWheel;

/// A strategy that chooses `k` mating pairs from the population.
pub trait ParentSelector<C: Chromosome>: std::fmt::Debug {
    /// Metadata used by operator-selection policies (name, custom weight).
    fn info(&self) -> OperatorInfo;

    /// Produce `k` couples. `epoch` is available for time-varying
    /// selectors (Boltzmann's cooling schedule).
    fn select_pairs(
        &self,
        population: &mut [C],
        rng: &mut EngineRng,
        k: usize,
        epoch: u64,
    ) -> Vec<Couple<C>>;
}

/// The universal rules every selector must apply before doing anything
/// variant-specific: `|P| <= 1` yields nothing, and
/// `|P| == 2` yields `k` copies of the only possible pair. Returns `None`
/// when `|P| >= 3` and the caller must run its own weighted logic.
fn universal_pairs<C: Chromosome>(population: &[C], k: usize) -> Option<Vec<Couple<C>>> {
    if population.len() <= 1 {
        return Some(Vec::new());
    }
    if population.len() == 2 {
        return Some(
            (0..k)
                .map(|_| Couple::new(population[0].clone(), population[1].clone()))
                .collect(),
        );
    }
    None
}

/// Shared `|P| >= 3` machinery: build a wheel over `weights(population)`
/// and draw two distinct parents via `spin_and_remove` per couple.
/// Used by Random, Roulette, Rank, and Boltzmann, whose only difference
/// is the weight function.
fn weighted_pairs<C: Chromosome>(
    population: &mut [C],
    rng: &mut EngineRng,
    k: usize,
    weights: impl Fn(&mut C) -> f64,
) -> Vec<Couple<C>> {
    let weight_values: Vec<f64> = population.iter_mut().map(weights).collect();
    let mut couples = Vec::with_capacity(k);
    for _ in 0..k {
        let indices: Vec<usize> = (0..population.len()).collect();
        let mut wheel =
            RouletteWheel::new(indices, weight_values.clone()).expect("non-empty, validated weights");
        let first = wheel.spin_and_remove(rng);
        let second = wheel.spin_and_remove(rng);
        couples.push(Couple::new(population[first].clone(), population[second].clone()));
    }
    couples
}

/// A scalar-fitness chromosome fixture shared by this module's and its
/// siblings' unit tests. `value` is both the sole gene and the fitness.
#[cfg(test)]
#[derive(Clone, Debug)]
pub(crate) struct Toy {
    value: f64,
    id: crate::chromosome::ChromosomeId,
    age: u32,
    cached: Option<f64>,
}

#[cfg(test)]
impl Toy {
    pub(crate) fn new(value: f64) -> Self {
        Toy {
            value,
            id: crate::chromosome::ChromosomeId::next(),
            age: 0,
            cached: None,
        }
    }

    pub(crate) fn population(values: &[f64]) -> Vec<Toy> {
        values.iter().map(|&v| Toy::new(v)).collect()
    }
}

#[cfg(test)]
impl Chromosome for Toy {
    type Gene = f64;
    fn genes(&self) -> &[f64] {
        std::slice::from_ref(&self.value)
    }
    fn genes_mut(&mut self) -> &mut Vec<f64> {
        unimplemented!("not exercised in these tests")
    }
    fn id(&self) -> crate::chromosome::ChromosomeId {
        self.id
    }
    fn age(&self) -> u32 {
        self.age
    }
    fn set_age(&mut self, age: u32) {
        self.age = age;
    }
    fn cached_fitness(&self) -> Option<f64> {
        self.cached
    }
    fn set_cached_fitness(&mut self, fitness: Option<f64>) {
        self.cached = fitness;
    }
    fn compute_fitness(&self) -> f64 {
        self.value
    }
    fn mutate(&mut self, _rng: &mut EngineRng) {}
    fn deep_copy(&self) -> Self {
        Toy::new(self.value)
    }
}

#[cfg(test)]
mod universal_tests {
    use super::*;

    #[test]
    fn empty_or_singleton_population_yields_no_couples() {
        assert_eq!(universal_pairs::<Toy>(&[], 5).unwrap().len(), 0);
        assert_eq!(universal_pairs(&[Toy::new(1.0)], 5).unwrap().len(), 0);
    }

    #[test]
    fn two_member_population_yields_k_identical_pairs() {
        let pop = vec![Toy::new(1.0), Toy::new(2.0)];
        let couples = universal_pairs(&pop, 4).unwrap();
        assert_eq!(couples.len(), 4);
        for c in &couples {
            assert_eq!(c.a.id(), pop[0].id());
            assert_eq!(c.b.id(), pop[1].id());
        }
    }

    #[test]
    fn three_or_more_returns_none_for_caller_to_handle() {
        let pop = vec![Toy::new(1.0), Toy::new(2.0), Toy::new(3.0)];
        assert!(universal_pairs(&pop, 4).is_none());
    }
}
