mod common;

use common::{random_population, IntVecChromosome};
use pursuit_evolve::chromosome::Chromosome;
use pursuit_evolve::config::EvolveConfigBuilder;
use pursuit_evolve::random::EngineRng;
use pursuit_evolve::runner::Runner;
use pursuit_evolve::survivor::ElitistSurvivor;
use pursuit_evolve::termination::MaxEpochs;

/// An individual that already carries the best possible allele at every
/// gene position can never be beaten by crossover (which only ever
/// recombines existing alleles), so with mutation disabled an Elitist
/// survivor strategy must keep its identity in the population for the
/// whole run.
#[test]
fn elitist_survivor_preserves_the_unbeatable_individual() {
    let mut rng = EngineRng::from_seed(42);
    let mut population = random_population(&mut rng, 20, 5, 100);

    let gene_len = population[0].genes().len();
    let dominant_genes: Vec<i32> = (0..gene_len)
        .map(|i| population.iter().map(|c| c.genes()[i]).max().unwrap())
        .collect();
    population[0] = IntVecChromosome::new(dominant_genes);
    let dominant_id = population[0].id();
    let dominant_fitness = population[0].clone().fitness();

    let config = EvolveConfigBuilder::new()
        .rng_seed(42)
        .mutation_rate(0.0)
        .survivor_selectors(vec![Box::new(ElitistSurvivor::new(0.2).unwrap())])
        .termination(vec![Box::new(MaxEpochs::new(10))])
        .build()
        .unwrap();

    let outcome = Runner::new(config, population).unwrap().run_to_completion().unwrap();

    assert!(
        outcome.final_population.iter().any(|c| c.id() == dominant_id),
        "the unbeatable individual's identity should survive every generation"
    );
    let mut best = outcome.best;
    assert_eq!(best.fitness(), dominant_fitness);
}
