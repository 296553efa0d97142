//! The `Chromosome` contract: a domain-supplied candidate solution plus
//! the engine-managed bookkeeping (identity, age, fitness cache) it rides
//! along with.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::random::EngineRng;

/// Opaque, process-unique identity assigned at construction and carried
/// only by `deep_copy` with a freshly allocated value. Compared by
/// identity, never by gene content.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(transparent)]
pub struct ChromosomeId(u64);

impl ChromosomeId {
    /// Allocate the next identity. Never reused, even across engine
    /// instances, so two chromosomes are never mistaken for the same
    /// individual just because their engines both started counting at 0.
    pub fn next() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        ChromosomeId(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

/// A domain-defined candidate solution.
///
/// Implementers own the genes and the fitness function; the engine owns
/// `id`, `age`, and the fitness cache, reading and writing them only
/// through the accessor methods below. A typical implementation stores
/// `id`/`age`/`cached_fitness` as plain fields alongside the gene vector,
/// e.g.:
///
/// ```
/// use pursuit_evolve::chromosome::{Chromosome, ChromosomeId};
/// use pursuit_evolve::random::EngineRng;
///
/// #[derive(Clone, Debug)]
/// struct SumChromosome {
///     genes: Vec<i32>,
///     id: ChromosomeId,
///     age: u32,
///     cached_fitness: Option<f64>,
/// }
///
/// impl Chromosome for SumChromosome {
///     type Gene = i32;
///
///     fn genes(&self) -> &[i32] { &self.genes }
///     fn genes_mut(&mut self) -> &mut Vec<i32> { &mut self.genes }
///     fn id(&self) -> ChromosomeId { self.id }
///     fn age(&self) -> u32 { self.age }
///     fn set_age(&mut self, age: u32) { self.age = age; }
///     fn cached_fitness(&self) -> Option<f64> { self.cached_fitness }
///     fn set_cached_fitness(&mut self, fitness: Option<f64>) { self.cached_fitness = fitness; }
///
///     fn compute_fitness(&self) -> f64 {
///         self.genes.iter().map(|&g| g as f64).sum()
///     }
///
///     fn mutate(&mut self, rng: &mut EngineRng) {
///         let idx = rng.range(0, self.genes.len());
///         self.genes[idx] = self.genes[idx].wrapping_add(if rng.chance(0.5) { 1 } else { -1 });
///     }
///
///     fn deep_copy(&self) -> Self {
///         SumChromosome {
///             genes: self.genes.clone(),
///             id: ChromosomeId::next(),
///             age: 0,
///             cached_fitness: None,
///         }
///     }
/// }
/// ```
pub trait Chromosome: Clone {
    /// The element type of the gene sequence.
    type Gene: Clone;

    /// The ordered gene sequence.
    fn genes(&self) -> &[Self::Gene];

    /// Mutable access to the gene sequence, for crossover and repair
    /// implementations built against the default helpers in this crate.
    fn genes_mut(&mut self) -> &mut Vec<Self::Gene>;

    /// The chromosome's process-unique, immutable identity.
    fn id(&self) -> ChromosomeId;

    /// Generations survived since this chromosome entered the population
    /// (0 for fresh offspring).
    fn age(&self) -> u32;

    /// Set by the engine once per surviving generation, and reset to 0 on
    /// fresh offspring.
    fn set_age(&mut self, age: u32);

    /// The cached fitness value, if one is currently populated.
    fn cached_fitness(&self) -> Option<f64>;

    /// Write (or clear, with `None`) the fitness cache. The engine clears
    /// this whenever genes change: mutation, crossover output, repair.
    fn set_cached_fitness(&mut self, fitness: Option<f64>);

    /// Compute this chromosome's fitness from its current genes. Higher
    /// is better.
    /// Must not itself read or write the fitness cache; `fitness()`
    /// handles caching.
    fn compute_fitness(&self) -> f64;

    /// Mutate the genes in place, using the supplied RNG for any
    /// randomness. The engine invalidates the fitness cache afterwards;
    /// implementations do not need to do so themselves.
    fn mutate(&mut self, rng: &mut EngineRng);

    /// Produce a new chromosome with the same genes but a fresh identity,
    /// age 0, and no cached fitness. Parents are never mutated by
    /// crossover; `deep_copy` is how the engine clones a chromosome when
    /// it needs an independent, freshly-identified copy.
    fn deep_copy(&self) -> Self;

    /// Repair invalid genes after mutation or crossover. A no-op by
    /// default; domains with gene-legality constraints (e.g. permutation
    /// chromosomes) override this.
    fn repair(&mut self) {}

    /// The cached fitness if present, else compute, cache, and return it.
    /// This is the method callers should use; `compute_fitness` is the
    /// raw, uncached hook domains provide.
    fn fitness(&mut self) -> f64 {
        if let Some(cached) = self.cached_fitness() {
            return cached;
        }
        let value = self.compute_fitness();
        self.set_cached_fitness(Some(value));
        value
    }

    /// Clear the fitness cache. Called by the engine after any operation
    /// that changes genes.
    fn invalidate_fitness(&mut self) {
        self.set_cached_fitness(None);
    }
}
