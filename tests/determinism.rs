mod common;

use common::IntVecChromosome;
use pursuit_evolve::chromosome::Chromosome;
use pursuit_evolve::config::EvolveConfigBuilder;
use pursuit_evolve::random::EngineRng;
use pursuit_evolve::runner::Runner;
use pursuit_evolve::termination::MaxEpochs;

fn sorted_genes(mut population: Vec<IntVecChromosome>) -> Vec<Vec<i32>> {
    let mut genes: Vec<Vec<i32>> = population.iter_mut().map(|c| c.genes().to_vec()).collect();
    genes.sort();
    genes
}

/// Two runs seeded identically, given identical starting genes, must
/// reach gene-for-gene identical final populations. Chromosome identities
/// are drawn from a process-wide counter and are expected to differ
/// between the two runs; only the evolved gene content is compared.
#[test]
fn same_seed_same_initial_genes_yields_identical_outcome() {
    let mut seed_rng = EngineRng::from_seed(7);
    let starting_genes: Vec<Vec<i32>> = (0..12)
        .map(|_| (0..6).map(|_| seed_rng.range(0, 50) as i32).collect())
        .collect();

    let run = |genes: &[Vec<i32>]| -> Vec<Vec<i32>> {
        let population: Vec<IntVecChromosome> = genes.iter().cloned().map(IntVecChromosome::new).collect();
        let config = EvolveConfigBuilder::new()
            .rng_seed(42)
            .termination(vec![Box::new(MaxEpochs::new(15))])
            .build()
            .unwrap();
        let outcome = Runner::new(config, population).unwrap().run_to_completion().unwrap();
        sorted_genes(outcome.final_population)
    };

    let first = run(&starting_genes);
    let second = run(&starting_genes);

    assert_eq!(first, second);
}
