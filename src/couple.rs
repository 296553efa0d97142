//! Ephemeral mating pairs produced by parent selection.

use crate::chromosome::Chromosome;

/// Two distinct chromosomes selected to mate. `Couple`s are produced one
/// at a time by a `ParentSelector` and consumed immediately by a
/// `CrossoverStrategy`; they are never stored in the population.
#[derive(Clone, Debug)]
pub struct Couple<C: Chromosome> {
    pub a: C,
    pub b: C,
}

impl<C: Chromosome> Couple<C> {
    /// Build a couple, panicking if the two chromosomes share an
    /// identity. Every call site in this crate draws `a` and `b` from
    /// distinct population slots or distinct roulette-wheel spins, so
    /// this should never trip outside of a strategy bug.
    pub fn new(a: C, b: C) -> Self {
        debug_assert!(
            a.id() != b.id(),
            "Couple invariant violated: both chromosomes share identity {:?}",
            a.id()
        );
        Couple { a, b }
    }
}
