//! A single-threaded genetic-algorithm engine with pluggable parent
//! selection, crossover, survivor selection, termination, and
//! operator-selection strategies, including an Adaptive-Pursuit policy
//! that learns which operator to prefer from observed reward.
//!
//! The engine owns its RNG, population, and stopwatch exclusively
//! (no hidden global or thread-local state); given a fixed seed, a run is
//! fully reproducible. See [`runner::Runner`] for the orchestrator and
//! [`chromosome::Chromosome`] for the contract a domain must implement to
//! plug in.
//!
//! ```
//! use pursuit_evolve::chromosome::{Chromosome, ChromosomeId};
//! use pursuit_evolve::config::EvolveConfigBuilder;
//! use pursuit_evolve::random::EngineRng;
//! use pursuit_evolve::runner::Runner;
//! use pursuit_evolve::termination::MaxEpochs;
//!
//! #[derive(Clone, Debug)]
//! struct SumChromosome {
//!     genes: Vec<i32>,
//!     id: ChromosomeId,
//!     age: u32,
//!     cached_fitness: Option<f64>,
//! }
//!
//! impl Chromosome for SumChromosome {
//!     type Gene = i32;
//!     fn genes(&self) -> &[i32] { &self.genes }
//!     fn genes_mut(&mut self) -> &mut Vec<i32> { &mut self.genes }
//!     fn id(&self) -> ChromosomeId { self.id }
//!     fn age(&self) -> u32 { self.age }
//!     fn set_age(&mut self, age: u32) { self.age = age; }
//!     fn cached_fitness(&self) -> Option<f64> { self.cached_fitness }
//!     fn set_cached_fitness(&mut self, fitness: Option<f64>) { self.cached_fitness = fitness; }
//!     fn compute_fitness(&self) -> f64 { self.genes.iter().map(|&g| g as f64).sum() }
//!     fn mutate(&mut self, rng: &mut EngineRng) {
//!         let idx = rng.range(0, self.genes.len());
//!         self.genes[idx] = self.genes[idx].wrapping_add(if rng.chance(0.5) { 1 } else { -1 });
//!     }
//!     fn deep_copy(&self) -> Self {
//!         SumChromosome { genes: self.genes.clone(), id: ChromosomeId::next(), age: 0, cached_fitness: None }
//!     }
//! }
//!
//! let mut rng = EngineRng::from_seed(42);
//! let population: Vec<SumChromosome> = (0..10)
//!     .map(|_| SumChromosome {
//!         genes: (0..5).map(|_| rng.range(0, 100) as i32).collect(),
//!         id: ChromosomeId::next(),
//!         age: 0,
//!         cached_fitness: None,
//!     })
//!     .collect();
//!
//! let config = EvolveConfigBuilder::new()
//!     .rng_seed(42)
//!     .termination(vec![Box::new(MaxEpochs::new(20))])
//!     .build()
//!     .unwrap();
//!
//! let runner = Runner::new(config, population).unwrap();
//! let outcome = runner.run_to_completion().unwrap();
//! assert!(outcome.best.clone().fitness() >= 0.0);
//! ```

/// Install a process-wide `tracing` subscriber, reading filter directives
/// from `RUST_LOG` (defaulting to `info`). Safe to call more than once;
/// only the first call takes effect. Requires the `logging` feature.
#[cfg(feature = "logging")]
pub fn init_logging() {
    use std::sync::Once;
    static INIT: Once = Once::new();

    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .init();
    });
}

pub mod chromosome;
pub mod config;
pub mod cooling;
pub mod couple;
pub mod crossover;
pub mod error;
pub mod group;
pub mod operator;
pub mod policy;
pub mod population;
pub mod random;
pub mod runner;
pub mod select;
pub mod survivor;
pub mod termination;
pub mod wheel;

/// Common imports for downstream crates wiring up a `Runner`.
pub mod prelude {
    pub use crate::chromosome::{Chromosome, ChromosomeId};
    pub use crate::config::{EvolveConfig, EvolveConfigBuilder};
    pub use crate::couple::Couple;
    pub use crate::error::{GaError, GaResult};
    pub use crate::random::EngineRng;
    pub use crate::runner::{RunOutcome, Runner};
}
