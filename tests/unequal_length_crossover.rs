mod common;

use common::IntVecChromosome;
use pursuit_evolve::chromosome::Chromosome;
use pursuit_evolve::couple::Couple;
use pursuit_evolve::crossover::{CrossoverStrategy, KPointCrossover, OnePointCrossover, UniformCrossover};
use pursuit_evolve::random::EngineRng;

fn mismatched_couple() -> Couple<IntVecChromosome> {
    Couple::new(
        IntVecChromosome::new((0..10).collect()),
        IntVecChromosome::new(vec![100, 101, 102]),
    )
}

/// One-point crossover on parents of different lengths must produce
/// full-length offspring (the longer parent's length), not truncate to
/// the shorter parent's length.
#[test]
fn one_point_crossover_fills_in_from_the_longer_parent() {
    let mut rng = EngineRng::from_seed(1);
    let couple = mismatched_couple();
    let strategy = OnePointCrossover::new();

    for _ in 0..50 {
        let offspring = strategy.cross(&couple, &mut rng);
        assert_eq!(offspring.len(), 2);
        for child in &offspring {
            assert_eq!(child.genes().len(), 10, "offspring must match the longer parent's length");
            for (i, &gene) in child.genes().iter().enumerate().skip(3) {
                assert_eq!(gene, i as i32, "position {i} has no gene in the shorter parent, so it must come from the longer one");
            }
        }
    }
}

/// K-point crossover on parents of different lengths must likewise
/// produce full-length offspring.
#[test]
fn k_point_crossover_fills_in_from_the_longer_parent() {
    let mut rng = EngineRng::from_seed(2);
    let couple = mismatched_couple();
    let strategy = KPointCrossover::new(2).unwrap();

    for _ in 0..50 {
        let offspring = strategy.cross(&couple, &mut rng);
        assert_eq!(offspring.len(), 2);
        for child in &offspring {
            assert_eq!(child.genes().len(), 10);
            for (i, &gene) in child.genes().iter().enumerate().skip(3) {
                assert_eq!(gene, i as i32);
            }
        }
    }
}

/// Uniform crossover on parents of different lengths must likewise
/// produce a full-length offspring.
#[test]
fn uniform_crossover_fills_in_from_the_longer_parent() {
    let mut rng = EngineRng::from_seed(3);
    let couple = mismatched_couple();
    let strategy = UniformCrossover::default();

    for _ in 0..50 {
        let offspring = strategy.cross(&couple, &mut rng);
        assert_eq!(offspring.len(), 1);
        let child = &offspring[0];
        assert_eq!(child.genes().len(), 10);
        for (i, &gene) in child.genes().iter().enumerate().skip(3) {
            assert_eq!(gene, i as i32);
        }
    }
}
