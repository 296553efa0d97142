//! Survivor selection strategies: given the parent population and the
//! newly produced offspring, choose an elimination set `E ⊆ population`
//! and return `(population \ E) ∪ offspring`.

mod age_based;
mod boltzmann;
mod elitist;
mod generational;
mod random;
mod tournament;

pub use age_based::AgeBasedSurvivor;
pub use boltzmann::BoltzmannSurvivor;
pub use elitist::ElitistSurvivor;
pub use generational::GenerationalSurvivor;
pub use random::RandomSurvivor;
pub use tournament::TournamentSurvivor;

use crate::chromosome::Chromosome;
use crate::operator::OperatorInfo;
use crate::random::EngineRng;

/// A strategy that decides which parents are eliminated to make room for
/// `offspring`. `|E|` is `min(offspring.len(), population.len())`
/// unless the variant's contract says otherwise (Generational eliminates
/// the whole parent population).
pub trait SurvivorSelector<C: Chromosome>: std::fmt::Debug {
    /// Metadata used by operator-selection policies.
    fn info(&self) -> OperatorInfo;

    /// Produce the next generation's population from `population` (the
    /// pre-selection parents) and `offspring` (freshly produced this
    /// generation). With zero offspring or an empty population, the
    /// contract is a no-op: return `population` unchanged.
    fn apply(
        &self,
        population: Vec<C>,
        offspring: Vec<C>,
        rng: &mut EngineRng,
        epoch: u64,
    ) -> Vec<C>;

    /// The recommended offspring-generation rate this strategy publishes
    /// to the orchestrator.
    fn recommended_rate(&self) -> f64;
}

/// Common guard every variant applies first: with no offspring or an
/// empty population, return `population` unchanged.
fn degenerate_case<C: Chromosome>(population: &[C], offspring: &[C]) -> bool {
    offspring.is_empty() || population.is_empty()
}

/// A scalar-fitness chromosome fixture shared by this module's siblings'
/// unit tests. `value` is both the sole gene and the fitness; `age` is
/// settable directly since `AgeBasedSurvivor` weights on it.
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

    pub(crate) fn with_age(value: f64, age: u32) -> Self {
        let mut toy = Toy::new(value);
        toy.age = age;
        toy
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
