//! The engine's single, exclusively-owned random source.
//!
//! One RNG per engine instance, exclusively owned, so that a fixed seed
//! makes an entire run reproducible end to end. `EngineRng` wraps
//! `rand::rngs::SmallRng` and is threaded explicitly through every
//! strategy and policy call rather than reached for through thread-local
//! or global state.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// A seedable, owned random source passed by `&mut` to every strategy and
/// policy call in the engine.
#[derive(Debug, Clone)]
pub struct EngineRng {
    inner: SmallRng,
}

impl EngineRng {
    /// Build a deterministic RNG from an explicit seed.
    pub fn from_seed(seed: u64) -> Self {
        EngineRng {
            inner: SmallRng::seed_from_u64(seed),
        }
    }

    /// Build a non-deterministic RNG seeded from OS entropy.
    pub fn from_entropy() -> Self {
        EngineRng {
            inner: SmallRng::from_os_rng(),
        }
    }

    /// A uniform draw in `[0, 1)`.
    #[inline]
    pub fn unit(&mut self) -> f64 {
        self.inner.random::<f64>()
    }

    /// A uniform integer draw in `[low, high)`.
    #[inline]
    pub fn range(&mut self, low: usize, high: usize) -> usize {
        self.inner.random_range(low..high)
    }

    /// `true` with probability `p` (clamped to `[0, 1]`).
    #[inline]
    pub fn chance(&mut self, p: f64) -> bool {
        self.inner.random_bool(p.clamp(0.0, 1.0))
    }

    /// Shuffle `items` in place (Fisher-Yates, via `rand::seq`).
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        use rand::seq::SliceRandom;
        items.shuffle(&mut self.inner);
    }

    /// A uniformly random permutation of `0..n`.
    pub fn shuffled_indices(&mut self, n: usize) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..n).collect();
        self.shuffle(&mut indices);
        indices
    }

    /// `count` distinct indices drawn without replacement from `0..n`.
    ///
    /// Panics if `count > n`, the same contract as `rand::seq`'s sampling
    /// helpers.
    pub fn sample_indices(&mut self, n: usize, count: usize) -> Vec<usize> {
        use rand::seq::index::sample;
        sample(&mut self.inner, n, count).into_vec()
    }
}
