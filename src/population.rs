//! Free functions over a population (`&mut [C]`) for the statistics the
//! orchestrator and several strategies need: mean/stddev/min/max fitness
//! and the index of the fittest member.
//!
//! The population is an ordered sequence of chromosomes with no
//! dedicated wrapper type; these functions work directly on `Vec<C>` /
//! `&mut [C]`. Mean and standard deviation use the numerically-stable
//! two-pass method.

use crate::chromosome::Chromosome;

/// Fitness values of every member, caching each as a side effect
/// (`Chromosome::fitness` populates the cache on first call).
pub fn fitness_values<C: Chromosome>(population: &mut [C]) -> Vec<f64> {
    population.iter_mut().map(|c| c.fitness()).collect()
}

/// Arithmetic mean of the population's fitness values. Returns 0.0 for an
/// empty population.
pub fn mean_fitness<C: Chromosome>(population: &mut [C]) -> f64 {
    let values = fitness_values(population);
    mean(&values)
}

/// Population standard deviation (denominator `n`, not `n - 1`), the
/// "population fitness standard deviation" used by `TargetStdDev`
/// termination and the Boltzmann survivor strategy's diversity signal.
pub fn stddev_fitness<C: Chromosome>(population: &mut [C]) -> f64 {
    let values = fitness_values(population);
    stddev(&values)
}

pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

pub fn stddev(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let m = mean(values);
    let variance = values.iter().map(|v| (v - m).powi(2)).sum::<f64>() / values.len() as f64;
    variance.sqrt()
}

/// `(min, max)` fitness over the population, evaluating and caching each
/// member's fitness along the way. Returns `(0.0, 0.0)` for an empty
/// population.
pub fn fitness_range<C: Chromosome>(population: &mut [C]) -> (f64, f64) {
    let values = fitness_values(population);
    range(&values)
}

pub fn range(values: &[f64]) -> (f64, f64) {
    if values.is_empty() {
        return (0.0, 0.0);
    }
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for &v in values {
        min = min.min(v);
        max = max.max(v);
    }
    (min, max)
}

/// Index of the highest-fitness chromosome, ties broken by first
/// occurrence.
pub fn best_index<C: Chromosome>(population: &mut [C]) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (i, c) in population.iter_mut().enumerate() {
        let f = c.fitness();
        match best {
            Some((_, best_f)) if best_f >= f => {}
            _ => best = Some((i, f)),
        }
    }
    best.map(|(i, _)| i)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn mean_and_stddev_of_uniform_values() {
        let values = vec![2.0, 2.0, 2.0];
        assert_eq!(mean(&values), 2.0);
        assert_eq!(stddev(&values), 0.0);
    }

    #[test]
    fn mean_and_stddev_known_case() {
        let values = vec![2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert_relative_eq!(mean(&values), 5.0, epsilon = 1e-9);
        assert_relative_eq!(stddev(&values), 2.0, epsilon = 1e-9);
    }

    #[test]
    fn range_of_empty_is_zero() {
        assert_eq!(range(&[]), (0.0, 0.0));
    }
}
