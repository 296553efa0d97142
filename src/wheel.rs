//! The weighted roulette wheel primitive shared by most parent, survivor,
//! and custom-weight policy strategies.
//!
//! A cumulative-distribution draw over a heap-owned, per-call value
//! rather than an iterator closed over a thread-local RNG: the RNG is
//! always supplied by the caller, and `spin_and_remove` mutates the
//! wheel in place so repeated calls draw a permutation without
//! replacement.

use crate::error::{config_ensure, GaResult};
use crate::random::EngineRng;

/// A weighted roulette wheel over a fixed set of candidates of type `T`.
///
/// Construction fails (`GaError::Configuration`) on an empty candidate
/// list, a negative weight, or a total weight of zero.
#[derive(Clone, Debug)]
pub struct RouletteWheel<T> {
    items: Vec<T>,
    weights: Vec<f64>,
    cumulative: Vec<f64>,
}

impl<T> RouletteWheel<T> {
    /// Build a wheel from parallel `items`/`weights` vectors.
    pub fn new(items: Vec<T>, weights: Vec<f64>) -> GaResult<Self> {
        config_ensure!(!items.is_empty(), "roulette wheel requires at least one candidate");
        config_ensure!(items.len() == weights.len(), "roulette wheel candidate and weight counts differ");
        config_ensure!(
            weights.iter().all(|&w| w >= 0.0 && w.is_finite()),
            "roulette wheel weights must be non-negative and finite"
        );
        let total: f64 = weights.iter().sum();
        config_ensure!(total > 0.0, "roulette wheel total weight must be greater than zero");

        let cumulative = Self::build_cumulative(&weights, total);
        Ok(RouletteWheel {
            items,
            weights,
            cumulative,
        })
    }

    /// Build a wheel with uniform weights over `items`.
    pub fn uniform(items: Vec<T>) -> GaResult<Self> {
        let n = items.len();
        Self::new(items, vec![1.0; n])
    }

    fn build_cumulative(weights: &[f64], total: f64) -> Vec<f64> {
        let mut running = 0.0;
        weights
            .iter()
            .map(|&w| {
                running += w / total;
                running
            })
            .collect()
    }

    /// Number of remaining candidates.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Draw `u ~ Uniform[0, 1)` and return the first candidate whose
    /// cumulative probability is `>= u`, via binary search on the
    /// cumulative array (: O(log N)). Floating point drift
    /// that lets the scan fall through returns the last candidate.
    pub fn spin(&self, rng: &mut EngineRng) -> &T {
        if self.items.len() == 1 {
            return &self.items[0];
        }
        let u = rng.unit();
        let idx = match self
            .cumulative
            .binary_search_by(|probe| probe.partial_cmp(&u).unwrap())
        {
            Ok(i) => i,
            Err(i) => i,
        };
        &self.items[idx.min(self.items.len() - 1)]
    }

    fn spin_index(&self, rng: &mut EngineRng) -> usize {
        if self.items.len() == 1 {
            return 0;
        }
        let u = rng.unit();
        match self
            .cumulative
            .binary_search_by(|probe| probe.partial_cmp(&u).unwrap())
        {
            Ok(i) => i,
            Err(i) => i,
        }
        .min(self.items.len() - 1)
    }

    /// Spin, remove the winner, and rebuild the cumulative distribution
    /// from the remaining weights. Falls back to uniform weights if every
    /// remaining weight is zero.
    pub fn spin_and_remove(&mut self, rng: &mut EngineRng) -> T {
        let idx = self.spin_index(rng);
        let winner = self.items.remove(idx);
        self.weights.remove(idx);

        if !self.items.is_empty() {
            let total: f64 = self.weights.iter().sum();
            if total <= 0.0 {
                self.weights = vec![1.0; self.items.len()];
                self.cumulative = Self::build_cumulative(&self.weights, self.items.len() as f64);
            } else {
                self.cumulative = Self::build_cumulative(&self.weights, total);
            }
        } else {
            self.cumulative.clear();
        }

        winner
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GaError;
    use rstest::rstest;

    fn rng() -> EngineRng {
        EngineRng::from_seed(42)
    }

    #[test]
    fn empty_candidates_is_configuration_error() {
        let result = RouletteWheel::<i32>::new(vec![], vec![]);
        assert!(matches!(result, Err(GaError::Configuration { .. })));
    }

    #[rstest]
    #[case(vec![1.0, -1.0])]
    #[case(vec![0.0, 0.0])]
    #[case(vec![1.0, f64::NAN])]
    fn bad_weights_are_configuration_errors(#[case] weights: Vec<f64>) {
        let result = RouletteWheel::new(vec!["a", "b"], weights);
        assert!(matches!(result, Err(GaError::Configuration { .. })));
    }

    #[test]
    fn single_candidate_always_wins() {
        let wheel = RouletteWheel::new(vec!["only"], vec![5.0]).unwrap();
        let mut rng = rng();
        for _ in 0..10 {
            assert_eq!(*wheel.spin(&mut rng), "only");
        }
    }

    #[test]
    fn uniform_weights_distribute_uniformly() {
        let wheel = RouletteWheel::uniform(vec![0, 1, 2, 3]).unwrap();
        let mut rng = rng();
        let mut counts = [0u32; 4];
        let spins = 40_000;
        for _ in 0..spins {
            counts[*wheel.spin(&mut rng) as usize] += 1;
        }
        let expected = spins as f64 / 4.0;
        // 3-sigma band for a Binomial(spins, 1/4) proportion.
        let sigma = (spins as f64 * 0.25 * 0.75).sqrt();
        for c in counts {
            assert!((c as f64 - expected).abs() < 3.0 * sigma, "counts={counts:?}");
        }
    }

    #[test]
    fn skewed_weight_dominates() {
        let wheel = RouletteWheel::new(vec!["x1", "x2", "x3"], vec![1.0, 1.0, 100.0]).unwrap();
        let mut rng = rng();
        let mut counts = [0u32; 3];
        for _ in 0..20_000 {
            let idx = match *wheel.spin(&mut rng) {
                "x1" => 0,
                "x2" => 1,
                _ => 2,
            };
            counts[idx] += 1;
        }
        assert!(counts[2] > counts[0] * 10);
        assert!(counts[2] > counts[1] * 10);
    }

    #[test]
    fn spin_and_remove_yields_a_permutation() {
        let mut wheel = RouletteWheel::uniform(vec![0, 1, 2, 3, 4]).unwrap();
        let mut rng = rng();
        let mut drawn = Vec::new();
        while !wheel.is_empty() {
            drawn.push(wheel.spin_and_remove(&mut rng));
        }
        drawn.sort();
        assert_eq!(drawn, vec![0, 1, 2, 3, 4]);
    }
}
