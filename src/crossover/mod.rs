//! Crossover strategies: given a mated `Couple`, produce offspring
//! chromosomes.
//!
//! Parents need not carry equal-length gene sequences: offspring length
//! is the longer parent's length, and any position beyond the shorter
//! parent's end takes its gene from the longer parent instead.

mod k_point;
mod one_point;
mod uniform;

pub use k_point::KPointCrossover;
pub use one_point::OnePointCrossover;
pub use uniform::UniformCrossover;

use crate::chromosome::Chromosome;
use crate::couple::Couple;
use crate::operator::OperatorInfo;
use crate::random::EngineRng;

/// A strategy that turns one mated couple into offspring.
pub trait CrossoverStrategy<C: Chromosome>: std::fmt::Debug {
    /// Metadata used by operator-selection policies.
    fn info(&self) -> OperatorInfo;

    /// Produce offspring from `couple`. Parents are read, never mutated;
    /// offspring are built via `Chromosome::deep_copy` (or an equivalent
    /// fresh construction) so each gets its own identity, age 0, and a
    /// cleared fitness cache.
    fn cross(&self, couple: &Couple<C>, rng: &mut EngineRng) -> Vec<C>;

    /// An optional per-strategy override of the engine's global
    /// `crossover_rate`. `None` means "use the engine's configured rate".
    fn rate_override(&self) -> Option<f64> {
        None
    }
}

/// Build an offspring shell from a template parent: fresh identity, age
/// 0, no cached fitness, genes to be overwritten by the caller.
fn offspring_template<C: Chromosome>(template: &C) -> C {
    let mut child = template.deep_copy();
    child.invalidate_fitness();
    child
}

/// The gene at position `i` from `primary`, falling back to `other` when
/// `i` is beyond `primary`'s length. Callers must ensure `other` actually
/// has a gene at `i` (true whenever `other` is the longer of the two
/// parents and `i < max(len(primary), len(other))`).
fn gene_at<C: Chromosome>(primary: &C, other: &C, i: usize) -> C::Gene {
    let genes = primary.genes();
    if i < genes.len() {
        genes[i].clone()
    } else {
        other.genes()[i].clone()
    }
}

/// A fixed-length integer-vector chromosome fixture shared by this
/// module's siblings' unit tests.
#[cfg(test)]
#[derive(Clone, Debug)]
pub(crate) struct Toy {
    genes: Vec<i32>,
    id: crate::chromosome::ChromosomeId,
    age: u32,
    cached: Option<f64>,
}

#[cfg(test)]
impl Toy {
    pub(crate) fn new(genes: Vec<i32>) -> Self {
        Toy {
            genes,
            id: crate::chromosome::ChromosomeId::next(),
            age: 0,
            cached: None,
        }
    }
}

#[cfg(test)]
impl Chromosome for Toy {
    type Gene = i32;
    fn genes(&self) -> &[i32] {
        &self.genes
    }
    fn genes_mut(&mut self) -> &mut Vec<i32> {
        &mut self.genes
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
        self.genes.iter().map(|&g| g as f64).sum()
    }
    fn mutate(&mut self, _rng: &mut EngineRng) {}
    fn deep_copy(&self) -> Self {
        Toy::new(self.genes.clone())
    }
}
