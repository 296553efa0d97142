mod common;

use common::IntVecChromosome;
use pursuit_evolve::chromosome::Chromosome;
use pursuit_evolve::couple::Couple;
use pursuit_evolve::crossover::{CrossoverStrategy, UniformCrossover};
use pursuit_evolve::random::EngineRng;

/// With a 0.5 mix rate, each offspring gene position should take its
/// allele from either parent roughly half the time over many draws.
#[test]
fn uniform_crossover_mixes_alleles_evenly() {
    let mut rng = EngineRng::from_seed(42);
    let couple = Couple::new(
        IntVecChromosome::new(vec![0, 0, 0, 0, 0]),
        IntVecChromosome::new(vec![1, 1, 1, 1, 1]),
    );
    let strategy = UniformCrossover::default();

    let mut from_b = 0usize;
    let mut total = 0usize;
    for _ in 0..1000 {
        let offspring = strategy.cross(&couple, &mut rng);
        assert_eq!(offspring.len(), 1, "uniform crossover produces exactly one offspring");
        for &gene in offspring[0].genes() {
            total += 1;
            if gene == 1 {
                from_b += 1;
            }
        }
    }

    let ratio = from_b as f64 / total as f64;
    assert!(
        (0.45..=0.55).contains(&ratio),
        "expected roughly even mixing, got ratio={ratio}"
    );
}
